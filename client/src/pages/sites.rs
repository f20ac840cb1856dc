//! Site pages: detail with its areas, and the create form.

#[cfg(test)]
#[path = "sites_test.rs"]
mod sites_test;

use leptos::prelude::*;

use crate::components::form_field::{FormActions, TextField};
use crate::components::loading::{EmptyState, Loading};
use crate::net::api;
use crate::net::types::{Area, Site, SiteInput};
use crate::pages::common::{INVALID_FORM_TITLE, or_missing, query_param, route_param, session_company};
use crate::state::page::{LiveEffects, LoadState, PageEffects, load_on_mount, scoped_lifetime, spawn_submit};
use crate::util::forms::{optional, required};

/// Build a site body. The company comes from the query string or the session.
///
/// # Errors
///
/// Returns the message to show when the company or name is missing.
pub fn site_input(company_id: Option<&str>, name: &str, address: &str) -> Result<SiteInput, String> {
    let company_id = company_id
        .and_then(optional)
        .ok_or_else(|| "No se indicó la empresa de la sede.".to_owned())?;
    Ok(SiteInput { company_id, name: required(name, "Nombre")?, address: optional(address) })
}

#[component]
pub fn SiteDetailPage() -> impl IntoView {
    let id = route_param("id");
    let state = RwSignal::new(LoadState::<(Site, Vec<Area>)>::Loading);

    load_on_mount(state, Some("/"), move || async move {
        futures::future::try_join(api::get_site(&id), api::list_areas(&id)).await
    });

    view! {
        <section class="page">
            {move || match state.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed => ().into_any(),
                LoadState::Ready((site, areas)) => {
                    view! {
                        <header class="page__header">
                            <h1>{site.name.clone()}</h1>
                            <a class="btn" href=format!("/companies/{}", site.company_id)>"Ver empresa"</a>
                        </header>
                        <dl class="detail-list">
                            <dt>"Dirección"</dt>
                            <dd>{or_missing(site.address.as_deref())}</dd>
                        </dl>
                        <div class="section__header">
                            <h2>"Áreas"</h2>
                            <a class="btn btn--small" href=format!("/areas/new?siteId={}", site.id)>"Nueva área"</a>
                        </div>
                        {if areas.is_empty() {
                            view! { <EmptyState message="Esta sede no tiene áreas."/> }.into_any()
                        } else {
                            view! {
                                <ul class="link-list">
                                    {areas.into_iter().map(|area| view! { <li>{area.name}</li> }).collect_view()}
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
pub fn SiteFormPage() -> impl IntoView {
    let company_id = query_param("companyId").or_else(|| session_company().ok());
    let effects = LiveEffects::from_context();
    let lifetime = scoped_lifetime();
    let busy = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());

    let submit_effects = effects.clone();
    let submit_company = company_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = match site_input(submit_company.as_deref(), &name.get_untracked(), &address.get_untracked()) {
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
            async move { api::create_site(&input).await },
            move |site: Site| {
                done.notifier.success("Sede creada", &site.name);
                done.navigate(&format!("/sites/{}", site.id));
            },
        );
    };

    let cancel_to = company_id.map_or_else(|| "/".to_owned(), |id| format!("/companies/{id}"));
    let on_cancel = Callback::new(move |()| effects.navigate(&cancel_to));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Nueva sede"</h1>
            </header>
            <form class="form" on:submit=on_submit>
                <TextField label="Nombre" value=name required=true/>
                <TextField label="Dirección" value=address/>
                <FormActions busy=busy submit_label="Crear sede" on_cancel=on_cancel/>
            </form>
        </section>
    }
}
