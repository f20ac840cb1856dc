use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use futures::future::ready;

use super::*;

#[test]
fn error_defaults_to_six_seconds() {
    let mut state = NotificationState::default();
    let shown = state.show(NotificationKind::Error, "Error", "No se pudo guardar", None);
    assert_eq!(shown.duration_ms, 6000);
}

#[test]
fn other_kinds_default_to_five_seconds() {
    let mut state = NotificationState::default();
    for kind in [NotificationKind::Success, NotificationKind::Warning, NotificationKind::Info] {
        assert_eq!(state.show(kind, "t", "m", None).duration_ms, 5000);
    }
}

#[test]
fn explicit_duration_wins() {
    let mut state = NotificationState::default();
    assert_eq!(state.show(NotificationKind::Error, "t", "m", Some(1500)).duration_ms, 1500);
}

#[test]
fn second_show_replaces_first() {
    let mut state = NotificationState::default();
    let first = state.show(NotificationKind::Error, "Primero", "uno", None);
    let second = state.show(NotificationKind::Error, "Segundo", "dos", None);
    assert_ne!(first.id, second.id);
    assert_eq!(state.current.as_ref().map(|n| n.title.as_str()), Some("Segundo"));
}

#[test]
fn stale_timer_does_not_hide_successor() {
    let mut state = NotificationState::default();
    let first = state.show(NotificationKind::Info, "a", "a", None);
    let second = state.show(NotificationKind::Info, "b", "b", None);
    assert!(!state.expire(first.id));
    assert_eq!(state.current.as_ref().map(|n| n.id), Some(second.id));
    assert!(state.expire(second.id));
    assert!(state.current.is_none());
}

#[test]
fn close_hides_current_and_later_expiry_is_noop() {
    let mut state = NotificationState::default();
    let shown = state.show(NotificationKind::Success, "ok", "guardado", None);
    state.close();
    assert!(state.current.is_none());
    assert!(!state.expire(shown.id));
}

#[test]
fn kinds_have_distinct_modifiers() {
    let modifiers = [
        NotificationKind::Success.css_modifier(),
        NotificationKind::Error.css_modifier(),
        NotificationKind::Warning.css_modifier(),
        NotificationKind::Info.css_modifier(),
    ];
    for (i, a) in modifiers.iter().enumerate() {
        for b in &modifiers[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn notifier_keeps_only_last_notification() {
    let owner = Owner::new();
    owner.with(|| {
        let notifier = Notifier::new();
        notifier.error("Error", "primero");
        notifier.error("Error", "segundo");
        let current = notifier.current().expect("visible notification");
        assert_eq!(current.message, "segundo");
        assert_eq!(current.duration_ms, ERROR_DURATION_MS);
        notifier.close();
        assert!(notifier.current().is_none());
    });
}

#[test]
fn error_is_dismissed_after_six_seconds() {
    let state = RefCell::new(NotificationState::default());
    let shown = state.borrow_mut().show(NotificationKind::Error, "Error", "No se pudo guardar", None);
    let slept = Cell::new(None);
    let hidden = block_on(dismiss_after(
        |d| {
            slept.set(Some(d));
            ready(())
        },
        shown.id,
        shown.duration_ms,
        |id| state.borrow_mut().expire(id),
    ));
    assert!(hidden);
    assert_eq!(slept.get(), Some(Duration::from_millis(6000)));
    assert_eq!(state.borrow().current, None);
}

#[test]
fn stale_timer_leaves_the_replacement_visible() {
    let state = RefCell::new(NotificationState::default());
    let first = state.borrow_mut().show(NotificationKind::Info, "Primero", "uno", None);
    state.borrow_mut().show(NotificationKind::Success, "Segundo", "dos", None);
    let hidden = block_on(dismiss_after(|_| ready(()), first.id, first.duration_ms, |id| {
        state.borrow_mut().expire(id)
    }));
    assert!(!hidden);
    assert_eq!(state.borrow().current.as_ref().map(|n| n.title.as_str()), Some("Segundo"));
}
