//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `Protected` component evaluates `decide` once auth state has loaded and
//! performs the resulting navigation. Keeping the decision pure lets the
//! redirect rules be tested without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use url::form_urlencoded;

use crate::config::{DEFAULT_ROUTE, LOGIN_ROUTE, RETURN_URL_PARAM};
use crate::state::session::SessionSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// No session token: go to login, carrying the original location.
    RedirectLogin(String),
    /// Role not allowed or user record unreadable.
    RedirectDefault(String),
}

/// Decide whether the current route may render.
#[must_use]
pub fn decide(session: &SessionSnapshot, allowed: Option<&[&str]>, path_and_query: &str) -> GuardDecision {
    if !session.has_token() {
        return GuardDecision::RedirectLogin(login_redirect(path_and_query));
    }
    let Some(allowed) = allowed else {
        return GuardDecision::Allow;
    };
    match &session.user {
        Some(user) if user.has_role(allowed) => GuardDecision::Allow,
        _ => GuardDecision::RedirectDefault(DEFAULT_ROUTE.to_owned()),
    }
}

/// `/login?returnUrl=<encoded path+query>`.
#[must_use]
pub fn login_redirect(path_and_query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(path_and_query.as_bytes()).collect();
    format!("{LOGIN_ROUTE}?{RETURN_URL_PARAM}={encoded}")
}

/// Join a router pathname and search string into `path?query`.
#[must_use]
pub fn path_and_query(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{query}")
    }
}

/// Where to go after login. Only same-origin relative paths are honored.
#[must_use]
pub fn safe_return_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url)
            if url.starts_with('/')
                && !url.starts_with("//")
                && !url.contains('\\')
                && !url.starts_with(LOGIN_ROUTE) =>
        {
            url.to_owned()
        }
        _ => DEFAULT_ROUTE.to_owned(),
    }
}
