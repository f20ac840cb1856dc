//! Page load/submit lifecycle shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages follow one pattern: `Loading -> {Ready, Failed}` on mount, and on
//! form pages `Ready -> Submitting -> {Ready, Failed}`. A failed load shows a
//! single error notification and navigates away; a failed submit shows the
//! notification and keeps the user on the form. A 401 clears the session and
//! redirects to login without a notification.
//!
//! DESIGN
//! ======
//! Each load is bound to a `Lifetime` released in `on_cleanup`; responses that
//! arrive after the page unmounted are discarded instead of writing into
//! disposed signals or navigating from a page the user already left. The
//! side effects go through `PageEffects` so the outcome rules are testable
//! without a router.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::error::ApiError;
use crate::state::notifications::Notifier;
use crate::state::session::{self, AuthState, SessionSnapshot};
use crate::util::guard;

pub const LOAD_ERROR_TITLE: &str = "Error al cargar";
pub const SAVE_ERROR_TITLE: &str = "Error al guardar";

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed,
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            Self::Loading | Self::Failed => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// Liveness flag for work started by a mounted page.
#[derive(Clone, Debug)]
pub struct Lifetime(Arc<AtomicBool>);

impl Lifetime {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// A lifetime that ends when the current reactive owner is cleaned up.
pub fn scoped_lifetime() -> Lifetime {
    let lifetime = Lifetime::new();
    let handle = lifetime.clone();
    on_cleanup(move || handle.end());
    lifetime
}

/// Side effects a page may trigger when an operation settles.
pub trait PageEffects {
    fn notify_error(&self, title: &str, message: &str);
    fn navigate(&self, to: &str);
    /// Drop the stored session and send the user to login.
    fn expire_session(&self);
}

/// Apply the load-failure rules. Returns the data only when it should render.
///
/// `leave_to` is `None` for secondary loads on an already rendered page (QR
/// payload, area reload); those notify and keep the page as it is.
pub fn finish_load<T, E: PageEffects>(
    result: Result<T, ApiError>,
    lifetime: &Lifetime,
    leave_to: Option<&str>,
    effects: &E,
) -> Option<T> {
    if !lifetime.is_alive() {
        leptos::logging::log!("discarding load result for unmounted page");
        return None;
    }
    match result {
        Ok(data) => Some(data),
        Err(ApiError::Unauthorized) => {
            effects.expire_session();
            None
        }
        Err(e) => {
            leptos::logging::warn!("page load failed: {e}");
            effects.notify_error(LOAD_ERROR_TITLE, &e.to_string());
            if let Some(to) = leave_to {
                effects.navigate(to);
            }
            None
        }
    }
}

/// Apply the submit-failure rules. The caller stays on the form on `None`.
pub fn finish_submit<T, E: PageEffects>(result: Result<T, ApiError>, lifetime: &Lifetime, effects: &E) -> Option<T> {
    if !lifetime.is_alive() {
        return None;
    }
    match result {
        Ok(data) => Some(data),
        Err(ApiError::Unauthorized) => {
            effects.expire_session();
            None
        }
        Err(e) => {
            leptos::logging::warn!("submit failed: {e}");
            effects.notify_error(SAVE_ERROR_TITLE, &e.to_string());
            None
        }
    }
}

/// Router- and context-backed `PageEffects` for a mounted page.
#[derive(Clone)]
pub struct LiveEffects {
    pub notifier: Notifier,
    auth: RwSignal<AuthState>,
    navigate: Arc<dyn Fn(&str, NavigateOptions) + Send + Sync>,
    pathname: Memo<String>,
    search: Memo<String>,
}

impl LiveEffects {
    /// Capture router and overlay handles. Call during component setup.
    pub fn from_context() -> Self {
        let location = use_location();
        Self {
            notifier: expect_context::<Notifier>(),
            auth: expect_context::<RwSignal<AuthState>>(),
            navigate: Arc::new(use_navigate()),
            pathname: location.pathname,
            search: location.search,
        }
    }

    /// Navigate and replace the current history entry.
    pub fn replace(&self, to: &str) {
        (self.navigate)(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

impl PageEffects for LiveEffects {
    fn notify_error(&self, title: &str, message: &str) {
        self.notifier.error(title, message);
    }

    fn navigate(&self, to: &str) {
        (self.navigate)(to, NavigateOptions::default());
    }

    fn expire_session(&self) {
        let here = guard::path_and_query(&self.pathname.get_untracked(), &self.search.get_untracked());
        session::clear();
        self.auth.try_set(AuthState::loaded(SessionSnapshot::default()));
        self.replace(&guard::login_redirect(&here));
    }
}

/// Run `load` once on mount and settle `state` with its outcome.
pub fn load_on_mount<T, Fut, F>(state: RwSignal<LoadState<T>>, leave_to: Option<&str>, load: F)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    F: FnOnce() -> Fut + 'static,
{
    let effects = LiveEffects::from_context();
    let lifetime = scoped_lifetime();
    let leave_to = leave_to.map(str::to_owned);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = load().await;
        let next = match finish_load(result, &lifetime, leave_to.as_deref(), &effects) {
            Some(data) => LoadState::Ready(data),
            None => LoadState::Failed,
        };
        state.try_set(next);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, leave_to, load, effects, lifetime);
    }
}

/// Run a submit future, toggling `busy`, and hand a success to `on_success`.
pub fn spawn_submit<T, Fut, S>(
    busy: RwSignal<bool>,
    effects: LiveEffects,
    lifetime: Lifetime,
    submit: Fut,
    on_success: S,
)
where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce(T) + 'static,
{
    if busy.get_untracked() {
        return;
    }
    busy.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = submit.await;
        let outcome = finish_submit(result, &lifetime, &effects);
        busy.try_set(false);
        if let Some(saved) = outcome {
            on_success(saved);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (effects, lifetime, submit, on_success);
        busy.set(false);
    }
}
