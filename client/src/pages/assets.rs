//! Asset pages: filtered list, detail with history and QR payload, and the
//! create/edit form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The detail page is the hub for an asset's lifecycle: it links to the
//! assignment and maintenance forms and records returns in place after a
//! confirmation. The form reloads the area choices whenever the site
//! changes, dropping a stale area selection.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use leptos::prelude::*;

use crate::components::form_field::{FormActions, SelectField, TextArea, TextField};
use crate::components::loading::{EmptyState, Loading};
use crate::components::status_badge::{AssignmentBadge, StatusBadge};
use crate::net::api;
use crate::net::types::{
    Asset, AssetInput, AssetQr, AssetStatus, Assignment, AssignmentReturn, Category, Employee, Maintenance, Site,
};
use crate::pages::common::{
    INVALID_FORM_TITLE, employee_name, employee_options, or_missing, route_param, session_company, session_user_id,
};
use crate::state::confirm::{ConfirmOptions, Confirmer};
use crate::state::page::{LiveEffects, LoadState, PageEffects, load_on_mount, scoped_lifetime, spawn_submit};
use crate::util::format::{format_currency, format_date, today_iso};
use crate::util::forms::{ensure_not_before, money_input_value, optional, optional_money, required, required_date};

const ASSETS_ROUTE: &str = "/assets";

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Assets matching `status` (when set) and a case-insensitive `query` over
/// code and name.
#[must_use]
pub fn filter_assets(assets: &[Asset], status: Option<AssetStatus>, query: &str) -> Vec<Asset> {
    let needle = query.trim().to_lowercase();
    assets
        .iter()
        .filter(|a| status.is_none_or(|s| a.status == s))
        .filter(|a| {
            needle.is_empty() || a.code.to_lowercase().contains(&needle) || a.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[must_use]
pub fn status_options() -> Vec<(String, String)> {
    AssetStatus::ALL.iter().map(|s| (s.as_str().to_owned(), s.label().to_owned())).collect()
}

#[must_use]
pub fn active_assignment(assignments: &[Assignment]) -> Option<&Assignment> {
    assignments.iter().find(|a| a.is_active())
}

/// Body for returning `assignment` on `today`.
///
/// # Errors
///
/// Returns the message to show when the assignment is already closed or
/// `today` precedes its issue date.
pub fn return_request(
    assignment: &Assignment,
    today: &str,
    received_by_id: Option<String>,
) -> Result<AssignmentReturn, String> {
    if !assignment.is_active() {
        return Err("La asignación ya fue devuelta.".to_owned());
    }
    ensure_not_before(&assignment.issue_date, today)?;
    Ok(AssignmentReturn { return_date: today.to_owned(), received_by_id })
}

/// Swap the returned assignment into the loaded history.
pub fn apply_return(assignments: &mut [Assignment], updated: Assignment) {
    if let Some(slot) = assignments.iter_mut().find(|a| a.id == updated.id) {
        *slot = updated;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetDraft {
    pub code: String,
    pub name: String,
    pub status: String,
    pub purchase_value: String,
    pub current_value: String,
    pub purchase_date: String,
    pub category_id: String,
    pub site_id: String,
    pub area_id: String,
    pub owner_id: String,
    pub description: String,
}

impl Default for AssetDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            status: AssetStatus::Active.as_str().to_owned(),
            purchase_value: String::new(),
            current_value: String::new(),
            purchase_date: String::new(),
            category_id: String::new(),
            site_id: String::new(),
            area_id: String::new(),
            owner_id: String::new(),
            description: String::new(),
        }
    }
}

impl AssetDraft {
    #[must_use]
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            code: asset.code.clone(),
            name: asset.name.clone(),
            status: asset.status.as_str().to_owned(),
            purchase_value: money_input_value(asset.purchase_value),
            current_value: money_input_value(asset.current_value),
            purchase_date: asset.purchase_date.as_deref().map(|d| d.chars().take(10).collect()).unwrap_or_default(),
            category_id: asset.category_id.clone().unwrap_or_default(),
            site_id: asset.site_id.clone().unwrap_or_default(),
            area_id: asset.area_id.clone().unwrap_or_default(),
            owner_id: asset.owner_id.clone().unwrap_or_default(),
            description: asset.description.clone().unwrap_or_default(),
        }
    }
}

/// # Errors
///
/// Returns the message to show for a missing code or name, an unknown
/// status, an unparseable amount, or a malformed purchase date.
pub fn asset_input(company_id: &str, draft: &AssetDraft) -> Result<AssetInput, String> {
    let status = AssetStatus::parse(draft.status.trim()).ok_or_else(|| "Seleccione un estado válido.".to_owned())?;
    let purchase_date = match optional(&draft.purchase_date) {
        Some(raw) => Some(required_date(&raw, "Fecha de compra")?),
        None => None,
    };
    // An area only makes sense inside the chosen site.
    let site_id = optional(&draft.site_id);
    let area_id = site_id.as_ref().and_then(|_| optional(&draft.area_id));
    Ok(AssetInput {
        company_id: company_id.to_owned(),
        code: required(&draft.code, "Código")?,
        name: required(&draft.name, "Nombre")?,
        status,
        purchase_value: optional_money(&draft.purchase_value, "Valor de compra")?,
        current_value: optional_money(&draft.current_value, "Valor actual")?,
        purchase_date,
        category_id: optional(&draft.category_id),
        site_id,
        area_id,
        owner_id: optional(&draft.owner_id),
        description: optional(&draft.description),
    })
}

// =============================================================================
// LIST
// =============================================================================

#[component]
pub fn AssetListPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<Asset>>::Loading);
    let query = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let company = session_company();

    load_on_mount(state, Some("/"), move || async move { api::list_assets(&company?).await });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Activos"</h1>
                <a class="btn btn--primary" href="/assets/new">"Nuevo activo"</a>
            </header>
            <div class="filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Buscar por código o nombre"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <SelectField
                    label="Estado"
                    value=status_filter
                    options=Signal::derive(status_options)
                    placeholder="Todos"
                />
            </div>
            {move || match state.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed => ().into_any(),
                LoadState::Ready(assets) => {
                    let visible = filter_assets(&assets, AssetStatus::parse(&status_filter.get()), &query.get());
                    if visible.is_empty() {
                        return view! { <EmptyState message="No se encontraron activos."/> }.into_any();
                    }
                    view! {
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
                                {visible
                                    .into_iter()
                                    .map(|asset| {
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=format!("{ASSETS_ROUTE}/{}", asset.id)>{asset.code}</a>
                                                </td>
                                                <td>{asset.name}</td>
                                                <td><StatusBadge status=asset.status/></td>
                                                <td>{format_currency(asset.current_value)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

// =============================================================================
// DETAIL
// =============================================================================

type AssetDetail = (Asset, Vec<Maintenance>, Vec<Assignment>, Vec<Employee>);

#[component]
pub fn AssetDetailPage() -> impl IntoView {
    let id = route_param("id");
    let company = session_company();
    let effects = LiveEffects::from_context();
    let confirmer = expect_context::<Confirmer>();
    let lifetime = scoped_lifetime();
    let state = RwSignal::new(LoadState::<AssetDetail>::Loading);
    let qr = RwSignal::new(None::<AssetQr>);
    let qr_busy = RwSignal::new(false);
    let returning = RwSignal::new(false);

    let load_id = id.clone();
    load_on_mount(state, Some(ASSETS_ROUTE), move || async move {
        let company = company?;
        futures::future::try_join4(
            api::get_asset(&load_id),
            api::list_asset_maintenance(&load_id),
            api::list_asset_assignments(&load_id),
            api::list_employees(&company),
        )
        .await
    });

    // The QR payload is only fetched on request.
    let qr_effects = effects.clone();
    let qr_lifetime = lifetime.clone();
    let qr_id = id.clone();
    let on_show_qr = move |_: leptos::ev::MouseEvent| {
        if qr_busy.get_untracked() {
            return;
        }
        qr_busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let effects = qr_effects.clone();
            let lifetime = qr_lifetime.clone();
            let id = qr_id.clone();
            leptos::task::spawn_local(async move {
                let result = api::get_asset_qr(&id).await;
                if let Some(payload) = crate::state::page::finish_load(result, &lifetime, None, &effects) {
                    qr.set(Some(payload));
                }
                qr_busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&qr_effects, &qr_lifetime, &qr_id, qr);
            qr_busy.set(false);
        }
    };

    let on_return = move |assignment: Assignment| {
        let request = match return_request(&assignment, &today_iso(), session_user_id()) {
            Ok(request) => request,
            Err(message) => {
                effects.notifier.warning(INVALID_FORM_TITLE, &message);
                return;
            }
        };
        let confirmer = confirmer.clone();
        let done = effects.clone();
        let assignment_id = assignment.id.clone();
        let message = format!("Se registrará la devolución con fecha {}.", format_date(Some(&request.return_date)));
        spawn_submit(
            returning,
            effects.clone(),
            lifetime.clone(),
            async move {
                let options =
                    ConfirmOptions::new("Registrar devolución", &message).confirm_label("Registrar devolución");
                if !confirmer.confirm(options).await {
                    return Ok(None);
                }
                api::return_assignment(&assignment_id, &request).await.map(Some)
            },
            move |updated: Option<Assignment>| {
                let Some(updated) = updated else {
                    return;
                };
                state.update(|s| {
                    if let LoadState::Ready((_, _, assignments, _)) = s {
                        apply_return(assignments, updated);
                    }
                });
                done.notifier.success("Devolución registrada", "El activo quedó disponible.");
            },
        );
    };

    view! {
        <section class="page">
            {move || match state.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed => ().into_any(),
                LoadState::Ready((asset, maintenance, assignments, employees)) => {
                    let can_assign = asset.status == AssetStatus::Active && active_assignment(&assignments).is_none();
                    let holder = active_assignment(&assignments)
                        .map(|a| employee_name(&employees, Some(&a.employee_id)));
                    let on_return = on_return.clone();
                    let on_show_qr = on_show_qr.clone();
                    view! {
                        <header class="page__header">
                            <h1>{format!("{} · {}", asset.code, asset.name)}</h1>
                            <div class="page__actions">
                                <a class="btn" href=format!("{ASSETS_ROUTE}/{}/edit", asset.id)>"Editar"</a>
                                {can_assign
                                    .then(|| {
                                        view! {
                                            <a class="btn btn--primary" href=format!("/assignments/new?assetId={}", asset.id)>
                                                "Asignar"
                                            </a>
                                        }
                                    })}
                                <a class="btn" href=format!("/maintenance/new?assetId={}", asset.id)>
                                    "Registrar mantenimiento"
                                </a>
                            </div>
                        </header>
                        <dl class="detail-list">
                            <dt>"Estado"</dt>
                            <dd><StatusBadge status=asset.status/></dd>
                            <dt>"Valor de compra"</dt>
                            <dd>{format_currency(asset.purchase_value)}</dd>
                            <dt>"Valor actual"</dt>
                            <dd>{format_currency(asset.current_value)}</dd>
                            <dt>"Fecha de compra"</dt>
                            <dd>{format_date(asset.purchase_date.as_deref())}</dd>
                            <dt>"Responsable"</dt>
                            <dd>{employee_name(&employees, asset.owner_id.as_deref())}</dd>
                            <dt>"Asignado a"</dt>
                            <dd>{holder.unwrap_or_else(|| "Sin asignar".to_owned())}</dd>
                            <dt>"Descripción"</dt>
                            <dd>{or_missing(asset.description.as_deref())}</dd>
                        </dl>

                        <div class="section__header">
                            <h2>"Código QR"</h2>
                            <button class="btn btn--small" disabled=move || qr_busy.get() on:click=on_show_qr>
                                "Generar código QR"
                            </button>
                        </div>
                        {move || {
                            qr.get()
                                .map(|qr| {
                                    view! {
                                        <div class="qr-panel">
                                            <span class="qr-panel__code">{qr.code}</span>
                                            <pre class="qr-panel__payload">{qr.payload}</pre>
                                        </div>
                                    }
                                })
                        }}

                        <h2>"Asignaciones"</h2>
                        {if assignments.is_empty() {
                            view! { <EmptyState message="Este activo nunca ha sido asignado."/> }.into_any()
                        } else {
                            view! {
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Empleado"</th>
                                            <th>"Entrega"</th>
                                            <th>"Devolución"</th>
                                            <th>"Estado"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {assignments
                                            .iter()
                                            .map(|assignment| {
                                                let active = assignment.is_active();
                                                let on_return = on_return.clone();
                                                let target = assignment.clone();
                                                view! {
                                                    <tr>
                                                        <td>{employee_name(&employees, Some(&assignment.employee_id))}</td>
                                                        <td>{format_date(Some(&assignment.issue_date))}</td>
                                                        <td>{format_date(assignment.return_date.as_deref())}</td>
                                                        <td><AssignmentBadge active=active/></td>
                                                        <td>
                                                            {active
                                                                .then(|| {
                                                                    view! {
                                                                        <button
                                                                            class="btn btn--small"
                                                                            disabled=move || returning.get()
                                                                            on:click=move |_| on_return(target.clone())
                                                                        >
                                                                            "Registrar devolución"
                                                                        </button>
                                                                    }
                                                                })}
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }}

                        <h2>"Mantenimientos"</h2>
                        {if maintenance.is_empty() {
                            view! { <EmptyState message="Sin mantenimientos registrados."/> }.into_any()
                        } else {
                            view! {
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Fecha"</th>
                                            <th>"Tipo"</th>
                                            <th>"Técnico"</th>
                                            <th>"Costo"</th>
                                            <th>"Notas"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {maintenance
                                            .iter()
                                            .map(|record| {
                                                view! {
                                                    <tr>
                                                        <td>{format_date(Some(&record.date))}</td>
                                                        <td>{record.kind.label()}</td>
                                                        <td>{employee_name(&employees, record.technician_id.as_deref())}</td>
                                                        <td>{format_currency(record.cost)}</td>
                                                        <td>{or_missing(record.notes.as_deref())}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }}
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

// =============================================================================
// FORM
// =============================================================================

type AssetFormData = (Option<Asset>, Vec<Category>, Vec<Site>, Vec<Employee>);

#[component]
pub fn AssetFormPage() -> impl IntoView {
    let id = route_param("id");
    let editing = !id.is_empty();
    let company = session_company();
    let effects = LiveEffects::from_context();
    let lifetime = scoped_lifetime();
    let busy = RwSignal::new(false);

    let code = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let status = RwSignal::new(AssetStatus::Active.as_str().to_owned());
    let purchase_value = RwSignal::new(String::new());
    let current_value = RwSignal::new(String::new());
    let purchase_date = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let site_id = RwSignal::new(String::new());
    let area_id = RwSignal::new(String::new());
    let owner_id = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let categories = RwSignal::new(Vec::<(String, String)>::new());
    let sites = RwSignal::new(Vec::<(String, String)>::new());
    let owners = RwSignal::new(Vec::<(String, String)>::new());
    let areas = RwSignal::new(Vec::<(String, String)>::new());

    let state = RwSignal::new(LoadState::<AssetFormData>::Loading);
    let load_company = company.clone();
    let load_id = id.clone();
    load_on_mount(state, Some(ASSETS_ROUTE), move || async move {
        let company = load_company?;
        let lists = futures::future::try_join3(
            api::list_categories(&company),
            api::list_sites(&company),
            api::list_employees(&company),
        );
        if load_id.is_empty() {
            let (categories, sites, employees) = lists.await?;
            return Ok((None, categories, sites, employees));
        }
        let (asset, (categories, sites, employees)) = futures::future::try_join(api::get_asset(&load_id), lists).await?;
        Ok((Some(asset), categories, sites, employees))
    });

    Effect::new(move || {
        let LoadState::Ready((asset, category_list, site_list, employee_list)) = state.get() else {
            return;
        };
        categories.set(category_list.into_iter().map(|c| (c.id, c.name)).collect());
        sites.set(site_list.into_iter().map(|s| (s.id, s.name)).collect());
        owners.set(employee_options(&employee_list));
        if let Some(asset) = asset {
            let draft = AssetDraft::from_asset(&asset);
            code.set(draft.code);
            name.set(draft.name);
            status.set(draft.status);
            purchase_value.set(draft.purchase_value);
            current_value.set(draft.current_value);
            purchase_date.set(draft.purchase_date);
            category_id.set(draft.category_id);
            area_id.set(draft.area_id);
            owner_id.set(draft.owner_id);
            description.set(draft.description);
            site_id.set(draft.site_id);
        }
    });

    // Reload areas on site change; keep the selection only if it still exists.
    let area_effects = effects.clone();
    let area_lifetime = lifetime.clone();
    Effect::new(move || {
        let site = site_id.get();
        if site.is_empty() {
            areas.set(Vec::new());
            area_id.set(String::new());
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let effects = area_effects.clone();
            let lifetime = area_lifetime.clone();
            leptos::task::spawn_local(async move {
                let result = api::list_areas(&site).await;
                if site_id.get_untracked() != site {
                    return;
                }
                let Some(list) = crate::state::page::finish_load(result, &lifetime, None, &effects) else {
                    return;
                };
                let options: Vec<(String, String)> = list.into_iter().map(|a| (a.id, a.name)).collect();
                let selected = area_id.get_untracked();
                if !options.iter().any(|(id, _)| *id == selected) {
                    area_id.set(String::new());
                }
                areas.set(options);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (site, &area_effects, &area_lifetime);
        }
    });

    let submit_effects = effects.clone();
    let submit_id = id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = AssetDraft {
            code: code.get_untracked(),
            name: name.get_untracked(),
            status: status.get_untracked(),
            purchase_value: purchase_value.get_untracked(),
            current_value: current_value.get_untracked(),
            purchase_date: purchase_date.get_untracked(),
            category_id: category_id.get_untracked(),
            site_id: site_id.get_untracked(),
            area_id: area_id.get_untracked(),
            owner_id: owner_id.get_untracked(),
            description: description.get_untracked(),
        };
        let input = match company.clone().map_err(|e| e.to_string()).and_then(|c| asset_input(&c, &draft)) {
            Ok(input) => input,
            Err(message) => {
                submit_effects.notifier.warning(INVALID_FORM_TITLE, &message);
                return;
            }
        };
        let id = submit_id.clone();
        let done = submit_effects.clone();
        spawn_submit(
            busy,
            submit_effects.clone(),
            lifetime.clone(),
            async move {
                if id.is_empty() {
                    api::create_asset(&input).await
                } else {
                    api::update_asset(&id, &input).await
                }
            },
            move |asset: Asset| {
                done.notifier.success("Activo guardado", &format!("{} · {}", asset.code, asset.name));
                done.navigate(&format!("{ASSETS_ROUTE}/{}", asset.id));
            },
        );
    };

    let cancel_to = if editing { format!("{ASSETS_ROUTE}/{id}") } else { ASSETS_ROUTE.to_owned() };
    let on_cancel = Callback::new(move |()| effects.navigate(&cancel_to));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{if editing { "Editar activo" } else { "Nuevo activo" }}</h1>
            </header>
            <Show when=move || state.with(|s| s.ready().is_some()) fallback=|| view! { <Loading/> }>
                <form class="form form--grid" on:submit=on_submit.clone()>
                    <TextField label="Código" value=code required=true/>
                    <TextField label="Nombre" value=name required=true/>
                    <SelectField label="Estado" value=status options=Signal::derive(status_options) required=true/>
                    <SelectField label="Categoría" value=category_id options=categories placeholder="Sin categoría"/>
                    <TextField label="Valor de compra" value=purchase_value placeholder="1.500.000"/>
                    <TextField label="Valor actual" value=current_value placeholder="1.200.000"/>
                    <TextField label="Fecha de compra" value=purchase_date input_type="date"/>
                    <SelectField label="Responsable" value=owner_id options=owners placeholder="Sin responsable"/>
                    <SelectField label="Sede" value=site_id options=sites placeholder="Sin sede"/>
                    <SelectField label="Área" value=area_id options=areas placeholder="Sin área"/>
                    <TextArea label="Descripción" value=description/>
                    <FormActions busy=busy submit_label="Guardar" on_cancel=on_cancel/>
                </form>
            </Show>
        </section>
    }
}
