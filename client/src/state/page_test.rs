use std::cell::RefCell;

use futures::executor::block_on;
use futures::future::{ready, try_join, try_join3};

use super::*;

#[derive(Default)]
struct Recorder {
    errors: RefCell<Vec<(String, String)>>,
    navigations: RefCell<Vec<String>>,
    expired: RefCell<usize>,
}

impl PageEffects for Recorder {
    fn notify_error(&self, title: &str, message: &str) {
        self.errors.borrow_mut().push((title.to_owned(), message.to_owned()));
    }

    fn navigate(&self, to: &str) {
        self.navigations.borrow_mut().push(to.to_owned());
    }

    fn expire_session(&self) {
        *self.expired.borrow_mut() += 1;
    }
}

fn server_error(message: &str) -> ApiError {
    ApiError::Status { status: 500, message: message.to_owned() }
}

#[test]
fn successful_load_renders_without_effects() {
    let effects = Recorder::default();
    let data = finish_load(Ok::<_, ApiError>(vec![1, 2]), &Lifetime::new(), Some("/assets"), &effects);
    assert_eq!(data, Some(vec![1, 2]));
    assert!(effects.errors.borrow().is_empty());
    assert!(effects.navigations.borrow().is_empty());
}

#[test]
fn joined_load_with_one_failure_notifies_once_and_leaves() {
    let effects = Recorder::default();
    let joined = block_on(try_join(
        ready(Ok::<_, ApiError>("asset")),
        ready(Err::<Vec<u32>, _>(server_error("historial no disponible"))),
    ));
    let data = finish_load(joined, &Lifetime::new(), Some("/assets"), &effects);
    assert!(data.is_none());
    assert_eq!(
        *effects.errors.borrow(),
        vec![(LOAD_ERROR_TITLE.to_owned(), "historial no disponible".to_owned())]
    );
    assert_eq!(*effects.navigations.borrow(), vec!["/assets".to_owned()]);
}

#[test]
fn joined_load_with_every_request_failing_still_notifies_once() {
    let effects = Recorder::default();
    let joined = block_on(try_join3(
        ready(Err::<u8, _>(server_error("uno"))),
        ready(Err::<u8, _>(server_error("dos"))),
        ready(Err::<u8, _>(server_error("tres"))),
    ));
    assert!(finish_load(joined, &Lifetime::new(), Some("/"), &effects).is_none());
    assert_eq!(effects.errors.borrow().len(), 1);
    assert_eq!(effects.navigations.borrow().len(), 1);
}

#[test]
fn unauthorized_load_redirects_without_notification() {
    let effects = Recorder::default();
    let data = finish_load(Err::<(), _>(ApiError::Unauthorized), &Lifetime::new(), Some("/assets"), &effects);
    assert!(data.is_none());
    assert_eq!(*effects.expired.borrow(), 1);
    assert!(effects.errors.borrow().is_empty());
    assert!(effects.navigations.borrow().is_empty());
}

#[test]
fn result_after_unmount_is_discarded_silently() {
    let effects = Recorder::default();
    let lifetime = Lifetime::new();
    lifetime.end();
    assert!(finish_load(Err::<(), _>(server_error("tarde")), &lifetime, Some("/"), &effects).is_none());
    assert!(finish_load(Ok::<_, ApiError>(1), &lifetime, Some("/"), &effects).is_none());
    assert!(effects.errors.borrow().is_empty());
    assert!(effects.navigations.borrow().is_empty());
}

#[test]
fn failed_submit_notifies_and_stays() {
    let effects = Recorder::default();
    let saved = finish_submit(Err::<(), _>(server_error("El código ya existe")), &Lifetime::new(), &effects);
    assert!(saved.is_none());
    assert_eq!(
        *effects.errors.borrow(),
        vec![(SAVE_ERROR_TITLE.to_owned(), "El código ya existe".to_owned())]
    );
    assert!(effects.navigations.borrow().is_empty());
}

#[test]
fn successful_submit_returns_saved_entity() {
    let effects = Recorder::default();
    assert_eq!(finish_submit(Ok::<_, ApiError>("a1"), &Lifetime::new(), &effects), Some("a1"));
}

#[test]
fn unauthorized_submit_expires_session() {
    let effects = Recorder::default();
    assert!(finish_submit(Err::<(), _>(ApiError::Unauthorized), &Lifetime::new(), &effects).is_none());
    assert_eq!(*effects.expired.borrow(), 1);
    assert!(effects.errors.borrow().is_empty());
}

#[test]
fn failure_without_leave_target_stays_put() {
    let effects = Recorder::default();
    assert!(finish_load(Err::<(), _>(server_error("caído")), &Lifetime::new(), None, &effects).is_none());
    assert_eq!(effects.errors.borrow().len(), 1);
    assert!(effects.navigations.borrow().is_empty());
}

#[test]
fn load_state_accessors() {
    let loading: LoadState<u8> = LoadState::default();
    assert!(loading.is_loading());
    assert_eq!(loading.ready(), None);
    assert_eq!(LoadState::Ready(3).ready(), Some(&3));
    assert!(!LoadState::<u8>::Failed.is_loading());
}

#[test]
fn lifetime_clones_share_state() {
    let lifetime = Lifetime::new();
    let clone = lifetime.clone();
    assert!(clone.is_alive());
    lifetime.end();
    assert!(!clone.is_alive());
}
