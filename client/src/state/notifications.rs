//! Notification overlay state.
//!
//! DESIGN
//! ======
//! At most one notification is visible; showing a new one replaces the
//! current one (last call wins). Each notification gets a sequence id, and a
//! dismiss timer only clears the notification it was started for, so a timer
//! left over from a replaced notification never hides its successor.
//!
//! `Notifier` is provided through context at the app root and retrieved with
//! `expect_context::<Notifier>()` by any page.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

pub const DEFAULT_DURATION_MS: u32 = 5000;
pub const ERROR_DURATION_MS: u32 = 6000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    #[must_use]
    pub fn default_duration_ms(self) -> u32 {
        match self {
            Self::Error => ERROR_DURATION_MS,
            Self::Success | Self::Warning | Self::Info => DEFAULT_DURATION_MS,
        }
    }

    /// BEM modifier for the overlay root.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notification--success",
            Self::Error => "notification--error",
            Self::Warning => "notification--warning",
            Self::Info => "notification--info",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub current: Option<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Replace whatever is visible with a new notification.
    pub fn show(
        &mut self,
        kind: NotificationKind,
        title: &str,
        message: &str,
        duration_ms: Option<u32>,
    ) -> Notification {
        self.next_id += 1;
        let notification = Notification {
            id: self.next_id,
            kind,
            title: title.to_owned(),
            message: message.to_owned(),
            duration_ms: duration_ms.unwrap_or_else(|| kind.default_duration_ms()),
        };
        self.current = Some(notification.clone());
        notification
    }

    /// Timer expiry for notification `id`. Returns whether anything was hidden.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Explicit close from the overlay's close button.
    pub fn close(&mut self) {
        self.current = None;
    }
}

/// Handle for raising notifications from pages and components.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    state: RwSignal<NotificationState>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(NotificationState::default()) }
    }

    pub fn show(&self, kind: NotificationKind, title: &str, message: &str, duration_ms: Option<u32>) {
        let Some(shown) = self.state.try_update(|s| s.show(kind, title, message, duration_ms)) else {
            return;
        };
        schedule_expiry(self.state, shown.id, shown.duration_ms);
    }

    pub fn success(&self, title: &str, message: &str) {
        self.show(NotificationKind::Success, title, message, None);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.show(NotificationKind::Error, title, message, None);
    }

    pub fn warning(&self, title: &str, message: &str) {
        self.show(NotificationKind::Warning, title, message, None);
    }

    pub fn info(&self, title: &str, message: &str) {
        self.show(NotificationKind::Info, title, message, None);
    }

    pub fn close(&self) {
        self.state.update(NotificationState::close);
    }

    /// Currently visible notification (tracked).
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.state.with(|s| s.current.clone())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait `duration_ms` with `sleep`, then expire notification `id`.
///
/// Returns whether the notification was still showing and got hidden.
pub async fn dismiss_after<Sleep, Fut, Expire>(
    sleep: Sleep,
    id: u64,
    duration_ms: u32,
    expire: Expire,
) -> bool
where
    Sleep: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
    Expire: FnOnce(u64) -> bool,
{
    sleep(Duration::from_millis(u64::from(duration_ms))).await;
    expire(id)
}

fn schedule_expiry(state: RwSignal<NotificationState>, id: u64, duration_ms: u32) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        dismiss_after(gloo_timers::future::sleep, id, duration_ms, |id| {
            state.try_update(|s| s.expire(id)).unwrap_or(false)
        })
        .await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, id, duration_ms);
    }
}
