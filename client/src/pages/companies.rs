//! Company pages: list (admin), detail with sites and categories, and the
//! create/edit form.

#[cfg(test)]
#[path = "companies_test.rs"]
mod companies_test;

use leptos::prelude::*;

use crate::components::form_field::{FormActions, TextField};
use crate::components::loading::{EmptyState, Loading};
use crate::net::api;
use crate::net::types::{Category, Company, CompanyInput, Site};
use crate::pages::common::{INVALID_FORM_TITLE, or_missing, route_param};
use crate::state::page::{LiveEffects, LoadState, PageEffects, load_on_mount, scoped_lifetime, spawn_submit};
use crate::util::forms::{optional, required};

const COMPANIES_ROUTE: &str = "/companies";

/// Raw form text for a company.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyDraft {
    pub name: String,
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CompanyDraft {
    #[must_use]
    pub fn from_company(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            tax_id: company.tax_id.clone().unwrap_or_default(),
            email: company.email.clone().unwrap_or_default(),
            phone: company.phone.clone().unwrap_or_default(),
            address: company.address.clone().unwrap_or_default(),
        }
    }
}

/// Validate a draft into a request body.
///
/// # Errors
///
/// Returns the message to show when the name is blank.
pub fn company_input(draft: &CompanyDraft) -> Result<CompanyInput, String> {
    Ok(CompanyInput {
        name: required(&draft.name, "Nombre")?,
        tax_id: optional(&draft.tax_id),
        email: optional(&draft.email),
        phone: optional(&draft.phone),
        address: optional(&draft.address),
    })
}

#[component]
pub fn CompanyListPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<Company>>::Loading);
    load_on_mount(state, Some("/"), api::list_companies);

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Empresas"</h1>
                <a class="btn btn--primary" href="/companies/new">"Nueva empresa"</a>
            </header>
            {move || match state.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed => ().into_any(),
                LoadState::Ready(companies) if companies.is_empty() => {
                    view! { <EmptyState message="No hay empresas registradas."/> }.into_any()
                }
                LoadState::Ready(companies) => {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Nombre"</th>
                                    <th>"NIT"</th>
                                    <th>"Correo"</th>
                                    <th>"Teléfono"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {companies
                                    .into_iter()
                                    .map(|company| {
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=format!("/companies/{}", company.id)>{company.name}</a>
                                                </td>
                                                <td>{or_missing(company.tax_id.as_deref())}</td>
                                                <td>{or_missing(company.email.as_deref())}</td>
                                                <td>{or_missing(company.phone.as_deref())}</td>
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
pub fn CompanyDetailPage() -> impl IntoView {
    let id = route_param("id");
    let state = RwSignal::new(LoadState::<(Company, Vec<Site>, Vec<Category>)>::Loading);

    load_on_mount(state, Some(COMPANIES_ROUTE), move || async move {
        futures::future::try_join3(api::get_company(&id), api::list_sites(&id), api::list_categories(&id)).await
    });

    view! {
        <section class="page">
            {move || match state.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed => ().into_any(),
                LoadState::Ready((company, sites, categories)) => {
                    let company_id = company.id.clone();
                    view! {
                        <header class="page__header">
                            <h1>{company.name.clone()}</h1>
                            <a class="btn" href=format!("/companies/{company_id}/edit")>"Editar"</a>
                        </header>
                        <dl class="detail-list">
                            <dt>"NIT"</dt>
                            <dd>{or_missing(company.tax_id.as_deref())}</dd>
                            <dt>"Correo"</dt>
                            <dd>{or_missing(company.email.as_deref())}</dd>
                            <dt>"Teléfono"</dt>
                            <dd>{or_missing(company.phone.as_deref())}</dd>
                            <dt>"Dirección"</dt>
                            <dd>{or_missing(company.address.as_deref())}</dd>
                        </dl>

                        <div class="section__header">
                            <h2>"Sedes"</h2>
                            <a class="btn btn--small" href=format!("/sites/new?companyId={company_id}")>
                                "Nueva sede"
                            </a>
                        </div>
                        {if sites.is_empty() {
                            view! { <EmptyState message="Esta empresa no tiene sedes."/> }.into_any()
                        } else {
                            view! {
                                <ul class="link-list">
                                    {sites
                                        .into_iter()
                                        .map(|site| {
                                            view! {
                                                <li>
                                                    <a href=format!("/sites/{}", site.id)>{site.name}</a>
                                                    <span class="muted">{or_missing(site.address.as_deref())}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }}

                        <div class="section__header">
                            <h2>"Categorías"</h2>
                            <a class="btn btn--small" href=format!("/categories/new?companyId={company_id}")>
                                "Nueva categoría"
                            </a>
                        </div>
                        {if categories.is_empty() {
                            view! { <EmptyState message="Esta empresa no tiene categorías."/> }.into_any()
                        } else {
                            view! {
                                <ul class="link-list">
                                    {categories
                                        .into_iter()
                                        .map(|category| {
                                            view! {
                                                <li>
                                                    <strong>{category.name}</strong>
                                                    <span class="muted">{or_missing(category.description.as_deref())}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
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
pub fn CompanyFormPage() -> impl IntoView {
    let id = route_param("id");
    let editing = !id.is_empty();
    let effects = LiveEffects::from_context();
    let lifetime = scoped_lifetime();
    let busy = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let tax_id = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());

    let state = RwSignal::new(if editing { LoadState::Loading } else { LoadState::<Option<Company>>::Ready(None) });
    if editing {
        let id = id.clone();
        load_on_mount(state, Some(COMPANIES_ROUTE), move || async move { api::get_company(&id).await.map(Some) });
    }

    // Prefill once the company arrives.
    Effect::new(move || {
        if let LoadState::Ready(Some(company)) = state.get() {
            let draft = CompanyDraft::from_company(&company);
            name.set(draft.name);
            tax_id.set(draft.tax_id);
            email.set(draft.email);
            phone.set(draft.phone);
            address.set(draft.address);
        }
    });

    let submit_effects = effects.clone();
    let submit_id = id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = CompanyDraft {
            name: name.get_untracked(),
            tax_id: tax_id.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
        };
        let input = match company_input(&draft) {
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
                    api::create_company(&input).await
                } else {
                    api::update_company(&id, &input).await
                }
            },
            move |company: Company| {
                done.notifier.success("Empresa guardada", &company.name);
                done.navigate(&format!("{COMPANIES_ROUTE}/{}", company.id));
            },
        );
    };

    let cancel_to = if editing { format!("{COMPANIES_ROUTE}/{id}") } else { COMPANIES_ROUTE.to_owned() };
    let on_cancel = Callback::new(move |()| effects.navigate(&cancel_to));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{if editing { "Editar empresa" } else { "Nueva empresa" }}</h1>
            </header>
            <Show when=move || !state.with(LoadState::is_loading) fallback=|| view! { <Loading/> }>
                <form class="form" on:submit=on_submit.clone()>
                    <TextField label="Nombre" value=name required=true/>
                    <TextField label="NIT" value=tax_id/>
                    <TextField label="Correo" value=email input_type="email"/>
                    <TextField label="Teléfono" value=phone input_type="tel"/>
                    <TextField label="Dirección" value=address/>
                    <FormActions busy=busy submit_label="Guardar" on_cancel=on_cancel/>
                </form>
            </Show>
        </section>
    }
}
