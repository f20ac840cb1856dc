//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the shared handles (`AuthState`, `Notifier`, `Confirmer`)
//! through context, restores the stored session once running in the browser,
//! and mounts both overlays above the router. Every route except `/login`
//! is wrapped in the route guard and the application chrome.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::AppLayout;
use crate::components::notification_overlay::NotificationOverlay;
use crate::components::protected::Protected;
use crate::config::{ADMIN_ROLES, APP_TITLE, MANAGER_ROLES};
use crate::pages::areas::AreaFormPage;
use crate::pages::assets::{AssetDetailPage, AssetFormPage, AssetListPage};
use crate::pages::assignments::AssignmentFormPage;
use crate::pages::categories::CategoryFormPage;
use crate::pages::companies::{CompanyDetailPage, CompanyFormPage, CompanyListPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::employees::{EmployeeDetailPage, EmployeeFormPage, EmployeeListPage};
use crate::pages::login::LoginPage;
use crate::pages::maintenance::MaintenanceFormPage;
use crate::pages::sites::{SiteDetailPage, SiteFormPage};
use crate::state::confirm::Confirmer;
use crate::state::notifications::Notifier;
use crate::state::session::{self, AuthState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Guard + chrome around an authenticated page.
fn guarded<V: IntoView + 'static>(roles: Option<&'static [&'static str]>, page: fn() -> V) -> impl IntoView {
    view! {
        <Protected roles=roles>
            <AppLayout>{page()}</AppLayout>
        </Protected>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);
    provide_context(Notifier::new());
    provide_context(Confirmer::new());

    // localStorage only exists in the browser; the guard waits for this.
    Effect::new(move || {
        let restored = session::load();
        if restored.has_token() && restored.user.is_none() {
            leptos::logging::warn!("stored session has a token but no readable user");
        }
        auth.set(AuthState::loaded(restored));
    });

    let manager = Some(MANAGER_ROLES);
    let admin = Some(ADMIN_ROLES);

    view! {
        <Stylesheet id="leptos" href="/pkg/activos.css"/>
        <Title text=APP_TITLE/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Página no encontrada."</p> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=move || guarded(None, DashboardPage)/>

                <Route path=StaticSegment("companies") view=move || guarded(admin, CompanyListPage)/>
                <Route
                    path=(StaticSegment("companies"), StaticSegment("new"))
                    view=move || guarded(admin, CompanyFormPage)
                />
                <Route
                    path=(StaticSegment("companies"), ParamSegment("id"), StaticSegment("edit"))
                    view=move || guarded(admin, CompanyFormPage)
                />
                <Route
                    path=(StaticSegment("companies"), ParamSegment("id"))
                    view=move || guarded(None, CompanyDetailPage)
                />

                <Route
                    path=(StaticSegment("sites"), StaticSegment("new"))
                    view=move || guarded(manager, SiteFormPage)
                />
                <Route path=(StaticSegment("sites"), ParamSegment("id")) view=move || guarded(None, SiteDetailPage)/>
                <Route
                    path=(StaticSegment("areas"), StaticSegment("new"))
                    view=move || guarded(manager, AreaFormPage)
                />
                <Route
                    path=(StaticSegment("categories"), StaticSegment("new"))
                    view=move || guarded(manager, CategoryFormPage)
                />

                <Route path=StaticSegment("employees") view=move || guarded(None, EmployeeListPage)/>
                <Route
                    path=(StaticSegment("employees"), StaticSegment("new"))
                    view=move || guarded(manager, EmployeeFormPage)
                />
                <Route
                    path=(StaticSegment("employees"), ParamSegment("id"), StaticSegment("edit"))
                    view=move || guarded(manager, EmployeeFormPage)
                />
                <Route
                    path=(StaticSegment("employees"), ParamSegment("id"))
                    view=move || guarded(None, EmployeeDetailPage)
                />

                <Route path=StaticSegment("assets") view=move || guarded(None, AssetListPage)/>
                <Route
                    path=(StaticSegment("assets"), StaticSegment("new"))
                    view=move || guarded(manager, AssetFormPage)
                />
                <Route
                    path=(StaticSegment("assets"), ParamSegment("id"), StaticSegment("edit"))
                    view=move || guarded(manager, AssetFormPage)
                />
                <Route path=(StaticSegment("assets"), ParamSegment("id")) view=move || guarded(None, AssetDetailPage)/>

                <Route
                    path=(StaticSegment("assignments"), StaticSegment("new"))
                    view=move || guarded(manager, AssignmentFormPage)
                />
                <Route
                    path=(StaticSegment("maintenance"), StaticSegment("new"))
                    view=move || guarded(manager, MaintenanceFormPage)
                />
            </Routes>
        </Router>

        <NotificationOverlay/>
        <ConfirmDialog/>
    }
}
