//! Employee pages: searchable list, detail with assignment history, and the
//! create/edit form.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use leptos::prelude::*;

use crate::components::form_field::{FormActions, SelectField, TextField};
use crate::components::loading::{EmptyState, Loading};
use crate::components::status_badge::AssignmentBadge;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Area, Asset, Assignment, Employee, EmployeeInput, Site};
use crate::pages::common::{INVALID_FORM_TITLE, asset_label, or_missing, route_param, session_company};
use crate::state::page::{LiveEffects, LoadState, PageEffects, load_on_mount, scoped_lifetime, spawn_submit};
use crate::util::format::format_date;
use crate::util::forms::{optional, required};

const EMPLOYEES_ROUTE: &str = "/employees";

/// Case-insensitive match on name, role, or email.
#[must_use]
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.trim().to_lowercase();
    employees
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.name.to_lowercase().contains(&needle)
                || e.role.as_deref().is_some_and(|r| r.to_lowercase().contains(&needle))
                || e.email.as_deref().is_some_and(|m| m.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// `(area id, "Site · Area")` options across every site of the company.
#[must_use]
pub fn area_options(sites: &[Site], areas: &[Area]) -> Vec<(String, String)> {
    areas
        .iter()
        .map(|area| {
            let text = sites
                .iter()
                .find(|s| s.id == area.site_id)
                .map_or_else(|| area.name.clone(), |s| format!("{} · {}", s.name, area.name));
            (area.id.clone(), text)
        })
        .collect()
}

/// Areas of every site, fetched concurrently. Fails if any request fails.
async fn load_area_options(company_id: &str) -> Result<Vec<(String, String)>, ApiError> {
    let sites = api::list_sites(company_id).await?;
    let per_site = futures::future::try_join_all(sites.iter().map(|s| api::list_areas(&s.id))).await?;
    let areas: Vec<Area> = per_site.into_iter().flatten().collect();
    Ok(area_options(&sites, &areas))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub area_id: String,
}

impl EmployeeDraft {
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            role: employee.role.clone().unwrap_or_default(),
            email: employee.email.clone().unwrap_or_default(),
            phone: employee.phone.clone().unwrap_or_default(),
            area_id: employee.area_id.clone().unwrap_or_default(),
        }
    }
}

/// # Errors
///
/// Returns the message to show when the name is blank.
pub fn employee_input(company_id: &str, draft: &EmployeeDraft) -> Result<EmployeeInput, String> {
    Ok(EmployeeInput {
        company_id: company_id.to_owned(),
        area_id: optional(&draft.area_id),
        name: required(&draft.name, "Nombre")?,
        role: optional(&draft.role),
        email: optional(&draft.email),
        phone: optional(&draft.phone),
    })
}

#[component]
pub fn EmployeeListPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<Employee>>::Loading);
    let query = RwSignal::new(String::new());
    let company = session_company();

    load_on_mount(state, Some("/"), move || async move { api::list_employees(&company?).await });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Empleados"</h1>
                <a class="btn btn--primary" href="/employees/new">"Nuevo empleado"</a>
            </header>
            <input
                class="search-input"
                type="search"
                placeholder="Buscar por nombre, cargo o correo"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            {move || match state.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed => ().into_any(),
                LoadState::Ready(employees) => {
                    let visible = filter_employees(&employees, &query.get());
                    if visible.is_empty() {
                        return view! { <EmptyState message="No se encontraron empleados."/> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Nombre"</th>
                                    <th>"Cargo"</th>
                                    <th>"Correo"</th>
                                    <th>"Teléfono"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {visible
                                    .into_iter()
                                    .map(|employee| {
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=format!("{EMPLOYEES_ROUTE}/{}", employee.id)>{employee.name}</a>
                                                </td>
                                                <td>{or_missing(employee.role.as_deref())}</td>
                                                <td>{or_missing(employee.email.as_deref())}</td>
                                                <td>{or_missing(employee.phone.as_deref())}</td>
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

#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    let id = route_param("id");
    let company = session_company();
    let state = RwSignal::new(LoadState::<(Employee, Vec<Assignment>, Vec<Asset>)>::Loading);

    load_on_mount(state, Some(EMPLOYEES_ROUTE), move || async move {
        let company = company?;
        futures::future::try_join3(
            api::get_employee(&id),
            api::list_employee_assignments(&id),
            api::list_assets(&company),
        )
        .await
    });

    view! {
        <section class="page">
            {move || match state.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed => ().into_any(),
                LoadState::Ready((employee, assignments, assets)) => {
                    view! {
                        <header class="page__header">
                            <h1>{employee.name.clone()}</h1>
                            <a class="btn" href=format!("{EMPLOYEES_ROUTE}/{}/edit", employee.id)>"Editar"</a>
                        </header>
                        <dl class="detail-list">
                            <dt>"Cargo"</dt>
                            <dd>{or_missing(employee.role.as_deref())}</dd>
                            <dt>"Correo"</dt>
                            <dd>{or_missing(employee.email.as_deref())}</dd>
                            <dt>"Teléfono"</dt>
                            <dd>{or_missing(employee.phone.as_deref())}</dd>
                        </dl>
                        <h2>"Historial de asignaciones"</h2>
                        {if assignments.is_empty() {
                            view! { <EmptyState message="Este empleado no tiene asignaciones."/> }.into_any()
                        } else {
                            view! {
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Activo"</th>
                                            <th>"Entrega"</th>
                                            <th>"Devolución"</th>
                                            <th>"Estado"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {assignments
                                            .iter()
                                            .map(|assignment| {
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <a href=format!("/assets/{}", assignment.asset_id)>
                                                                {asset_label(&assets, &assignment.asset_id)}
                                                            </a>
                                                        </td>
                                                        <td>{format_date(Some(&assignment.issue_date))}</td>
                                                        <td>{format_date(assignment.return_date.as_deref())}</td>
                                                        <td><AssignmentBadge active=assignment.is_active()/></td>
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

#[component]
pub fn EmployeeFormPage() -> impl IntoView {
    let id = route_param("id");
    let editing = !id.is_empty();
    let company = session_company();
    let effects = LiveEffects::from_context();
    let lifetime = scoped_lifetime();
    let busy = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let area_id = RwSignal::new(String::new());
    let areas = RwSignal::new(Vec::<(String, String)>::new());

    let state = RwSignal::new(LoadState::<(Option<Employee>, Vec<(String, String)>)>::Loading);
    let load_company = company.clone();
    let load_id = id.clone();
    load_on_mount(state, Some(EMPLOYEES_ROUTE), move || async move {
        let company = load_company?;
        if load_id.is_empty() {
            return Ok((None, load_area_options(&company).await?));
        }
        let (employee, options) =
            futures::future::try_join(api::get_employee(&load_id), load_area_options(&company)).await?;
        Ok((Some(employee), options))
    });

    Effect::new(move || {
        if let LoadState::Ready((employee, options)) = state.get() {
            areas.set(options);
            if let Some(employee) = employee {
                let draft = EmployeeDraft::from_employee(&employee);
                name.set(draft.name);
                role.set(draft.role);
                email.set(draft.email);
                phone.set(draft.phone);
                area_id.set(draft.area_id);
            }
        }
    });

    let submit_effects = effects.clone();
    let submit_id = id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = EmployeeDraft {
            name: name.get_untracked(),
            role: role.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            area_id: area_id.get_untracked(),
        };
        let input = match company.clone().map_err(|e| e.to_string()).and_then(|c| employee_input(&c, &draft)) {
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
                    api::create_employee(&input).await
                } else {
                    api::update_employee(&id, &input).await
                }
            },
            move |employee: Employee| {
                done.notifier.success("Empleado guardado", &employee.name);
                done.navigate(&format!("{EMPLOYEES_ROUTE}/{}", employee.id));
            },
        );
    };

    let cancel_to = if editing { format!("{EMPLOYEES_ROUTE}/{id}") } else { EMPLOYEES_ROUTE.to_owned() };
    let on_cancel = Callback::new(move |()| effects.navigate(&cancel_to));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{if editing { "Editar empleado" } else { "Nuevo empleado" }}</h1>
            </header>
            <Show when=move || state.with(|s| s.ready().is_some()) fallback=|| view! { <Loading/> }>
                <form class="form" on:submit=on_submit.clone()>
                    <TextField label="Nombre" value=name required=true/>
                    <TextField label="Cargo" value=role/>
                    <TextField label="Correo" value=email input_type="email"/>
                    <TextField label="Teléfono" value=phone input_type="tel"/>
                    <SelectField label="Área" value=area_id options=areas placeholder="Sin área"/>
                    <FormActions busy=busy submit_label="Guardar" on_cancel=on_cancel/>
                </form>
            </Show>
        </section>
    }
}
