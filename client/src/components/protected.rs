//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every authenticated route. Once auth state has loaded it evaluates
//! `util::guard::decide` and navigates on a redirect decision. Nothing is
//! rendered until the route is allowed.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::Loading;
use crate::state::session::AuthState;
use crate::util::guard::{self, GuardDecision};

#[component]
pub fn Protected(
    /// Role names allowed on this route; any authenticated user when absent.
    #[prop(optional_no_strip)]
    roles: Option<&'static [&'static str]>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let state = auth.get();
        if state.loading {
            return None;
        }
        let here = guard::path_and_query(&location.pathname.get(), &location.search.get());
        Some(guard::decide(&state.session, roles, &here))
    });

    Effect::new(move || match decision.get() {
        Some(GuardDecision::RedirectLogin(to) | GuardDecision::RedirectDefault(to)) => {
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        Some(GuardDecision::Allow) | None => {}
    });

    view! {
        <Show
            when=move || decision.get() == Some(GuardDecision::Allow)
            fallback=|| view! { <Loading label="Verificando sesión..."/> }
        >
            {children()}
        </Show>
    }
}
