//! Badges for asset status and assignment state.

use leptos::prelude::*;

use crate::net::types::AssetStatus;

#[must_use]
pub fn status_modifier(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Active => "badge--success",
        AssetStatus::UnderMaintenance => "badge--warning",
        AssetStatus::Retired => "badge--muted",
        AssetStatus::Lost => "badge--danger",
    }
}

#[component]
pub fn StatusBadge(status: AssetStatus) -> impl IntoView {
    view! { <span class=format!("badge {}", status_modifier(status))>{status.label()}</span> }
}

#[component]
pub fn AssignmentBadge(active: bool) -> impl IntoView {
    view! {
        <span class="badge" class:badge--info=active class:badge--muted=!active>
            {if active { "Vigente" } else { "Devuelto" }}
        </span>
    }
}
