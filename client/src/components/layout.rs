//! Application chrome: sidebar navigation, header, logout.
//!
//! DESIGN
//! ======
//! Navigation entries are filtered by role with the same allow-lists the
//! route guard uses, so users never see links that would bounce them.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::{ADMIN_ROLES, APP_TITLE};
use crate::state::confirm::Confirmer;
use crate::state::session::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub roles: Option<&'static [&'static str]>,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/", label: "Inicio", roles: None },
    NavItem { href: "/companies", label: "Empresas", roles: Some(ADMIN_ROLES) },
    NavItem { href: "/assets", label: "Activos", roles: None },
    NavItem { href: "/employees", label: "Empleados", roles: None },
];

/// Entries visible to a user with `role`.
#[must_use]
pub fn visible_nav_items(role: Option<&str>) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| match (item.roles, role) {
            (None, _) => true,
            (Some(allowed), Some(role)) => allowed.iter().any(|r| r.eq_ignore_ascii_case(role)),
            (Some(_), None) => false,
        })
        .copied()
        .collect()
}

/// Whether `href` should be highlighted for the current `pathname`.
#[must_use]
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let confirmer = expect_context::<Confirmer>();
    let pathname = use_location().pathname;

    let user_name = move || auth.with(|a| a.user().map(|u| u.full_name.clone()).unwrap_or_default());
    let user_role = move || auth.with(|a| a.user().map(|u| u.role.clone()).unwrap_or_default());
    let items = move || auth.with(|a| visible_nav_items(a.session.role()));

    let on_logout = move |_| {
        let confirmer = confirmer.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::confirm::ConfirmOptions;
            use crate::state::session::{self, SessionSnapshot};

            let options = ConfirmOptions::new("Cerrar sesión", "¿Desea cerrar la sesión actual?")
                .confirm_label("Cerrar sesión")
                .danger();
            if !confirmer.confirm(options).await {
                return;
            }
            crate::net::api::logout().await;
            session::clear();
            auth.try_set(AuthState::loaded(SessionSnapshot::default()));
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::config::LOGIN_ROUTE);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = confirmer;
        }
    };

    view! {
        <div class="app-layout">
            <aside class="app-layout__sidebar">
                <span class="app-layout__brand">{APP_TITLE}</span>
                <nav class="app-layout__nav">
                    {move || {
                        items()
                            .into_iter()
                            .map(|item| {
                                let active = move || is_active(item.href, &pathname.get());
                                view! {
                                    <a href=item.href class="app-layout__link" class:app-layout__link--active=active>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
            </aside>
            <div class="app-layout__main">
                <header class="app-layout__header toolbar">
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">
                        {user_name}
                        " ("
                        <span class="toolbar__self-method">{user_role}</span>
                        ")"
                    </span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Cerrar sesión">
                        "Salir"
                    </button>
                </header>
                <main class="app-layout__content">{children()}</main>
            </div>
        </div>
    }
}
