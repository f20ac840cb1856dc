//! Assignment form: hand an asset to an employee.

#[cfg(test)]
#[path = "assignments_test.rs"]
mod assignments_test;

use leptos::prelude::*;

use crate::components::form_field::{FormActions, SelectField, TextArea, TextField};
use crate::components::loading::Loading;
use crate::net::api;
use crate::net::types::{Asset, AssetStatus, Assignment, AssignmentInput, Employee};
use crate::pages::common::{
    INVALID_FORM_TITLE, asset_label, employee_options, query_param, session_company, session_user_id,
};
use crate::state::page::{LiveEffects, LoadState, PageEffects, load_on_mount, scoped_lifetime, spawn_submit};
use crate::util::format::today_iso;
use crate::util::forms::{optional, required, required_date};

/// Assets that can be handed out: active ones, plus the preselected asset so
/// a deep link never shows an empty choice.
#[must_use]
pub fn assignable_assets(assets: &[Asset], preselected: Option<&str>) -> Vec<(String, String)> {
    assets
        .iter()
        .filter(|a| a.status == AssetStatus::Active || preselected == Some(a.id.as_str()))
        .map(|a| (a.id.clone(), asset_label(assets, &a.id)))
        .collect()
}

/// # Errors
///
/// Returns the message to show when the asset, employee, or date is missing.
pub fn assignment_input(
    asset_id: &str,
    employee_id: &str,
    issue_date: &str,
    notes: &str,
    issued_by_id: Option<String>,
) -> Result<AssignmentInput, String> {
    Ok(AssignmentInput {
        asset_id: required(asset_id, "Activo")?,
        employee_id: required(employee_id, "Empleado")?,
        issued_by_id,
        issue_date: required_date(issue_date, "Fecha de entrega")?,
        notes: optional(notes),
    })
}

#[component]
pub fn AssignmentFormPage() -> impl IntoView {
    let preselected = query_param("assetId");
    let company = session_company();
    let effects = LiveEffects::from_context();
    let lifetime = scoped_lifetime();
    let busy = RwSignal::new(false);

    let asset_id = RwSignal::new(preselected.clone().unwrap_or_default());
    let employee_id = RwSignal::new(String::new());
    let issue_date = RwSignal::new(today_iso());
    let notes = RwSignal::new(String::new());
    let asset_choices = RwSignal::new(Vec::<(String, String)>::new());
    let employee_choices = RwSignal::new(Vec::<(String, String)>::new());

    let state = RwSignal::new(LoadState::<(Vec<Asset>, Vec<Employee>)>::Loading);
    load_on_mount(state, Some("/assets"), move || async move {
        let company = company?;
        futures::future::try_join(api::list_assets(&company), api::list_employees(&company)).await
    });

    let filter_selected = preselected.clone();
    Effect::new(move || {
        if let LoadState::Ready((assets, employees)) = state.get() {
            asset_choices.set(assignable_assets(&assets, filter_selected.as_deref()));
            employee_choices.set(employee_options(&employees));
        }
    });

    let submit_effects = effects.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = match assignment_input(
            &asset_id.get_untracked(),
            &employee_id.get_untracked(),
            &issue_date.get_untracked(),
            &notes.get_untracked(),
            session_user_id(),
        ) {
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
            async move { api::create_assignment(&input).await },
            move |assignment: Assignment| {
                done.notifier.success("Asignación registrada", "El activo fue entregado al empleado.");
                done.navigate(&format!("/assets/{}", assignment.asset_id));
            },
        );
    };

    let cancel_to = preselected.map_or_else(|| "/assets".to_owned(), |id| format!("/assets/{id}"));
    let on_cancel = Callback::new(move |()| effects.navigate(&cancel_to));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Nueva asignación"</h1>
            </header>
            <Show when=move || state.with(|s| s.ready().is_some()) fallback=|| view! { <Loading/> }>
                <form class="form" on:submit=on_submit.clone()>
                    <SelectField
                        label="Activo"
                        value=asset_id
                        options=asset_choices
                        placeholder="Seleccione un activo"
                        required=true
                    />
                    <SelectField
                        label="Empleado"
                        value=employee_id
                        options=employee_choices
                        placeholder="Seleccione un empleado"
                        required=true
                    />
                    <TextField label="Fecha de entrega" value=issue_date input_type="date" required=true/>
                    <TextArea label="Notas" value=notes/>
                    <FormActions busy=busy submit_label="Asignar" on_cancel=on_cancel/>
                </form>
            </Show>
        </section>
    }
}
