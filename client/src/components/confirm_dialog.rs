//! Modal for `Confirmer` requests.
//!
//! The dialog takes focus when it opens so Escape cancels without the user
//! clicking into it first.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;

use crate::state::confirm::Confirmer;

/// Keys that answer the open request with "cancel".
#[must_use]
pub fn is_cancel_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Mounted once at the app root; shows the head of the confirmation queue.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let confirmer = expect_context::<Confirmer>();
    let on_unmount = confirmer.clone();
    on_cleanup(move || on_unmount.cancel_all());

    let render = move || {
        let confirmer = confirmer.clone();
        confirmer.visible().map(|request| {
            let id = request.id;
            let options = request.options;
            let on_accept = {
                let confirmer = confirmer.clone();
                move |_| confirmer.respond(id, true)
            };
            let on_cancel = {
                let confirmer = confirmer.clone();
                move |_| confirmer.respond(id, false)
            };
            let on_backdrop = {
                let confirmer = confirmer.clone();
                move |_| confirmer.respond(id, false)
            };
            let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
                if is_cancel_key(&ev.key()) {
                    ev.prevent_default();
                    confirmer.respond(id, false);
                }
            };
            let dialog_ref = NodeRef::<leptos::html::Div>::new();
            Effect::new(move || {
                let Some(dialog) = dialog_ref.get() else {
                    return;
                };
                let _ = dialog.focus();
            });
            let confirm_class = if options.danger { "btn btn--danger" } else { "btn btn--primary" };

            view! {
                <div class="dialog-backdrop" on:click=on_backdrop>
                    <div
                        class="dialog"
                        role="alertdialog"
                        aria-modal="true"
                        tabindex="-1"
                        node_ref=dialog_ref
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                    >
                        <h2>{options.title}</h2>
                        <p class="dialog__message">{options.message}</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=on_cancel>
                                {options.cancel_label}
                            </button>
                            <button class=confirm_class on:click=on_accept>
                                {options.confirm_label}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! { <div class="confirm-root">{render}</div> }
}
