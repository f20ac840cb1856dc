//! Dashboard page: inventory summary for the session company.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads assets and employees in
//! one joined request and renders status counts and the total current value.
//! A failed load notifies once and moves on to the asset list.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::loading::{EmptyState, Loading};
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::{Asset, AssetStatus, Employee};
use crate::pages::common::session_company;
use crate::state::page::{LoadState, load_on_mount};
use crate::util::format::format_currency;

const RECENT_LIMIT: usize = 5;

/// Where a failed summary load sends the user.
pub const LOAD_FAILURE_ROUTE: &str = "/assets";

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
    pub total_assets: usize,
    /// One entry per status, in `AssetStatus::ALL` order, zeros included.
    pub by_status: Vec<(AssetStatus, usize)>,
    /// Sum of current values; assets without one count as zero.
    pub total_value: f64,
    pub employee_count: usize,
}

#[must_use]
pub fn summarize(assets: &[Asset], employees: &[Employee]) -> DashboardSummary {
    let by_status = AssetStatus::ALL
        .iter()
        .map(|status| (*status, assets.iter().filter(|a| a.status == *status).count()))
        .collect();
    DashboardSummary {
        total_assets: assets.len(),
        by_status,
        total_value: assets.iter().filter_map(|a| a.current_value).sum(),
        employee_count: employees.len(),
    }
}

/// The `limit` assets with the latest purchase date; undated assets go last.
#[must_use]
pub fn recent_assets(assets: Vec<Asset>, limit: usize) -> Vec<Asset> {
    let mut sorted = assets;
    // ISO dates compare correctly as strings; `None` sorts below any date.
    sorted.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
    sorted.truncate(limit);
    sorted
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<(Vec<Asset>, Vec<Employee>)>::Loading);
    let company = session_company();

    load_on_mount(state, Some(LOAD_FAILURE_ROUTE), move || async move {
        let company = company?;
        futures::future::try_join(api::list_assets(&company), api::list_employees(&company)).await
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Panel"</h1>
                <a class="btn btn--primary" href="/assets/new">"Nuevo activo"</a>
            </header>
            {move || match state.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed => view! { <EmptyState message="No se pudo cargar el resumen."/> }.into_any(),
                LoadState::Ready((assets, employees)) => {
                    let summary = summarize(&assets, &employees);
                    let recent = recent_assets(assets, RECENT_LIMIT);
                    view! {
                        <div class="stat-grid">
                            <div class="stat-card">
                                <span class="stat-card__label">"Activos"</span>
                                <span class="stat-card__value">{summary.total_assets}</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-card__label">"Valor actual"</span>
                                <span class="stat-card__value">{format_currency(Some(summary.total_value))}</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-card__label">"Empleados"</span>
                                <span class="stat-card__value">{summary.employee_count}</span>
                            </div>
                        </div>
                        <div class="stat-grid stat-grid--compact">
                            {summary
                                .by_status
                                .into_iter()
                                .map(|(status, count)| {
                                    view! {
                                        <div class="stat-card">
                                            <StatusBadge status=status/>
                                            <span class="stat-card__value">{count}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <h2>"Activos recientes"</h2>
                        <Show
                            when={
                                let empty = recent.is_empty();
                                move || !empty
                            }
                            fallback=|| view! { <EmptyState message="Aún no hay activos registrados."/> }
                        >
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Código"</th>
                                        <th>"Nombre"</th>
                                        <th>"Estado"</th>
                                        <th>"Valor actual"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {recent
                                        .iter()
                                        .map(|asset| {
                                            view! {
                                                <tr>
                                                    <td>
                                                        <a href=format!("/assets/{}", asset.id)>{asset.code.clone()}</a>
                                                    </td>
                                                    <td>{asset.name.clone()}</td>
                                                    <td><StatusBadge status=asset.status/></td>
                                                    <td>{format_currency(asset.current_value)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </Show>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
