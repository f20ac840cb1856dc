//! Maintenance form: log a service event against one asset.

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;

use leptos::prelude::*;

use crate::components::form_field::{FormActions, SelectField, TextArea, TextField};
use crate::components::loading::Loading;
use crate::net::api;
use crate::net::types::{Asset, Employee, Maintenance, MaintenanceInput, MaintenanceType};
use crate::pages::common::{INVALID_FORM_TITLE, employee_options, query_param, session_company};
use crate::state::page::{LiveEffects, LoadState, PageEffects, load_on_mount, scoped_lifetime, spawn_submit};
use crate::util::format::today_iso;
use crate::util::forms::{optional, optional_money, required_date};

#[must_use]
pub fn maintenance_type_options() -> Vec<(String, String)> {
    [MaintenanceType::Preventive, MaintenanceType::Corrective]
        .iter()
        .map(|t| (t.as_str().to_owned(), t.label().to_owned()))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaintenanceDraft {
    pub kind: String,
    pub date: String,
    pub technician_id: String,
    pub cost: String,
    pub notes: String,
}

/// # Errors
///
/// Returns the message to show for an unknown type, a bad date, or an
/// unparseable cost.
pub fn maintenance_input(asset_id: &str, draft: &MaintenanceDraft) -> Result<MaintenanceInput, String> {
    let kind = MaintenanceType::parse(&draft.kind).ok_or_else(|| "Seleccione el tipo de mantenimiento.".to_owned())?;
    Ok(MaintenanceInput {
        asset_id: asset_id.to_owned(),
        technician_id: optional(&draft.technician_id),
        kind,
        date: required_date(&draft.date, "Fecha")?,
        cost: optional_money(&draft.cost, "Costo")?,
        notes: optional(&draft.notes),
    })
}

#[component]
pub fn MaintenanceFormPage() -> impl IntoView {
    let asset_id = query_param("assetId").unwrap_or_default();
    let company = session_company();
    let effects = LiveEffects::from_context();
    let lifetime = scoped_lifetime();
    let busy = RwSignal::new(false);

    let kind = RwSignal::new(MaintenanceType::Preventive.as_str().to_owned());
    let date = RwSignal::new(today_iso());
    let technician_id = RwSignal::new(String::new());
    let cost = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let technicians = RwSignal::new(Vec::<(String, String)>::new());

    let state = RwSignal::new(LoadState::<(Asset, Vec<Employee>)>::Loading);
    let load_asset = asset_id.clone();
    load_on_mount(state, Some("/assets"), move || async move {
        let company = company?;
        futures::future::try_join(api::get_asset(&load_asset), api::list_employees(&company)).await
    });

    Effect::new(move || {
        if let LoadState::Ready((_, employees)) = state.get() {
            technicians.set(employee_options(&employees));
        }
    });

    let submit_effects = effects.clone();
    let submit_asset = asset_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = MaintenanceDraft {
            kind: kind.get_untracked(),
            date: date.get_untracked(),
            technician_id: technician_id.get_untracked(),
            cost: cost.get_untracked(),
            notes: notes.get_untracked(),
        };
        let input = match maintenance_input(&submit_asset, &draft) {
            Ok(input) => input,
            Err(message) => {
                submit_effects.notifier.warning(INVALID_FORM_TITLE, &message);
                return;
            }
        };
        let done = submit_effects.clone();
        spawn_submit(
            busy,
            submit_effects.clone(),
            lifetime.clone(),
            async move { api::create_maintenance(&input).await },
            move |record: Maintenance| {
                done.notifier.success("Mantenimiento registrado", record.kind.label());
                done.navigate(&format!("/assets/{}", record.asset_id));
            },
        );
    };

    let cancel_to = format!("/assets/{asset_id}");
    let on_cancel = Callback::new(move |()| effects.navigate(&cancel_to));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Registrar mantenimiento"</h1>
            </header>
            {move || {
                state
                    .with(|s| s.ready().map(|(asset, _)| format!("{} · {}", asset.code, asset.name)))
                    .map(|label| view! { <p class="page__subtitle">{label}</p> })
            }}
            <Show when=move || state.with(|s| s.ready().is_some()) fallback=|| view! { <Loading/> }>
                <form class="form" on:submit=on_submit.clone()>
                    <SelectField
                        label="Tipo"
                        value=kind
                        options=Signal::derive(maintenance_type_options)
                        required=true
                    />
                    <TextField label="Fecha" value=date input_type="date" required=true/>
                    <SelectField label="Técnico" value=technician_id options=technicians placeholder="Sin técnico"/>
                    <TextField label="Costo" value=cost placeholder="150.000"/>
                    <TextArea label="Notas" value=notes/>
                    <FormActions busy=busy submit_label="Registrar" on_cancel=on_cancel/>
                </form>
            </Show>
        </section>
    }
}
