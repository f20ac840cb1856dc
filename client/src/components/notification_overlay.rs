//! Toast overlay showing the current notification.

use leptos::prelude::*;

use crate::state::notifications::Notifier;

/// Mounted once at the app root; renders whatever `Notifier` holds.
#[component]
pub fn NotificationOverlay() -> impl IntoView {
    let notifier = expect_context::<Notifier>();

    view! {
        <div class="notification-region" aria-live="assertive">
            {move || {
                notifier
                    .current()
                    .map(|n| {
                        let class = format!("notification {}", n.kind.css_modifier());
                        view! {
                            <div class=class role="alert">
                                <span class="notification__icon" aria-hidden="true">{n.kind.icon()}</span>
                                <div class="notification__body">
                                    <strong class="notification__title">{n.title}</strong>
                                    <p class="notification__message">{n.message}</p>
                                </div>
                                <button
                                    class="notification__close"
                                    title="Cerrar"
                                    aria-label="Cerrar"
                                    on:click=move |_| notifier.close()
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
