//! Login page: email + password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{APP_TITLE, RETURN_URL_PARAM};
use crate::net::types::LoginRequest;
use crate::pages::common::query_param;
use crate::state::notifications::Notifier;
use crate::state::session::AuthState;
use crate::util::guard::safe_return_url;

/// Trim and check the credentials before sending them.
///
/// # Errors
///
/// Returns the message to show when either field is blank or the email is malformed.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Ingrese su correo y contraseña.");
    }
    let well_formed = email
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.starts_with('.'));
    if !well_formed {
        return Err("Ingrese un correo válido.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = expect_context::<Notifier>();
    let navigate = use_navigate();
    let return_to = safe_return_url(query_param(RETURN_URL_PARAM).as_deref());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let navigate_home = navigate.clone();
    let return_home = return_to.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.session.has_token() && state.session.user.is_some() {
            navigate_home(&return_home, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                notifier.warning("Datos incompletos", message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let return_to = return_to.clone();
            leptos::task::spawn_local(async move {
                use crate::net::error::ApiError;
                use crate::state::session::{self, SessionSnapshot};

                match crate::net::api::login(&request).await {
                    Ok(login) => {
                        session::store(&login);
                        auth.set(AuthState::loaded(SessionSnapshot {
                            token: Some(login.access_token),
                            user: Some(login.user),
                        }));
                        password.set(String::new());
                        navigate(&return_to, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(ApiError::Unauthorized) => {
                        notifier.error("No se pudo iniciar sesión", "Correo o contraseña incorrectos.");
                    }
                    Err(e) => notifier.error("No se pudo iniciar sesión", &e.to_string()),
                }
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{APP_TITLE}</h1>
                <p class="login-card__subtitle">"Inicie sesión para continuar"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="usuario@empresa.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
