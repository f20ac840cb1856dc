//! Confirmation overlay state.
//!
//! DESIGN
//! ======
//! `Confirmer::confirm` suspends the caller until the user answers. Requests
//! are queued FIFO: overlapping calls never drop an earlier caller, and each
//! call resolves exactly once. The modal always shows the head of the queue.
//! A request whose responder is dropped (overlay torn down) resolves `false`.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use futures::channel::oneshot;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Render the confirm button with the danger style.
    pub danger: bool,
}

impl ConfirmOptions {
    #[must_use]
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_owned(),
            message: message.to_owned(),
            confirm_label: "Confirmar".to_owned(),
            cancel_label: "Cancelar".to_owned(),
            danger: false,
        }
    }

    #[must_use]
    pub fn confirm_label(mut self, label: &str) -> Self {
        label.clone_into(&mut self.confirm_label);
        self
    }

    #[must_use]
    pub fn cancel_label(mut self, label: &str) -> Self {
        label.clone_into(&mut self.cancel_label);
        self
    }

    #[must_use]
    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

/// A queued request as shown by the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub id: u64,
    pub options: ConfirmOptions,
}

#[derive(Debug, Default)]
pub struct ConfirmQueue {
    pending: VecDeque<(ConfirmRequest, oneshot::Sender<bool>)>,
    next_id: u64,
}

impl ConfirmQueue {
    /// Enqueue a request; the receiver resolves with the user's answer.
    pub fn push(&mut self, options: ConfirmOptions) -> (ConfirmRequest, oneshot::Receiver<bool>) {
        self.next_id += 1;
        let request = ConfirmRequest { id: self.next_id, options };
        let (tx, rx) = oneshot::channel();
        self.pending.push_back((request.clone(), tx));
        (request, rx)
    }

    #[must_use]
    pub fn head(&self) -> Option<ConfirmRequest> {
        self.pending.front().map(|(request, _)| request.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Answer the head request. Answers for anything but the head are ignored
    /// so a double click cannot resolve the next caller.
    pub fn resolve(&mut self, id: u64, answer: bool) -> bool {
        if self.pending.front().is_none_or(|(request, _)| request.id != id) {
            return false;
        }
        let Some((_, tx)) = self.pending.pop_front() else {
            return false;
        };
        // The caller may have gone away; nothing left to notify then.
        let _ = tx.send(answer);
        true
    }

    /// Resolve every pending request with `false`.
    pub fn cancel_all(&mut self) {
        for (_, tx) in self.pending.drain(..) {
            let _ = tx.send(false);
        }
    }
}

/// Wait for an answer; a dropped responder counts as "cancel".
pub async fn await_answer(rx: oneshot::Receiver<bool>) -> bool {
    rx.await.unwrap_or(false)
}

/// Context handle for asking the user to confirm an action.
#[derive(Clone, Debug)]
pub struct Confirmer {
    queue: Arc<Mutex<ConfirmQueue>>,
    visible: RwSignal<Option<ConfirmRequest>>,
}

impl Confirmer {
    #[must_use]
    pub fn new() -> Self {
        Self { queue: Arc::new(Mutex::new(ConfirmQueue::default())), visible: RwSignal::new(None) }
    }

    /// Open the modal (or queue behind the one already open) and wait.
    pub async fn confirm(&self, options: ConfirmOptions) -> bool {
        let rx = {
            let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
            let (_, rx) = queue.push(options);
            self.visible.set(queue.head());
            rx
        };
        await_answer(rx).await
    }

    /// Answer request `id` from the overlay buttons.
    pub fn respond(&self, id: u64, answer: bool) {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        if queue.resolve(id, answer) {
            self.visible.set(queue.head());
        }
    }

    /// Cancel everything pending, e.g. when the overlay unmounts.
    pub fn cancel_all(&self) {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.cancel_all();
        self.visible.try_set(None);
    }

    /// Request currently shown by the modal (tracked).
    #[must_use]
    pub fn visible(&self) -> Option<ConfirmRequest> {
        self.visible.get()
    }
}

impl Default for Confirmer {
    fn default() -> Self {
        Self::new()
    }
}
