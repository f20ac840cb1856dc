//! Area create form, reached from a site's detail page.

#[cfg(test)]
#[path = "areas_test.rs"]
mod areas_test;

use leptos::prelude::*;

use crate::components::form_field::{FormActions, TextField};
use crate::net::api;
use crate::net::types::{Area, AreaInput};
use crate::pages::common::{INVALID_FORM_TITLE, query_param};
use crate::state::page::{LiveEffects, PageEffects, scoped_lifetime, spawn_submit};
use crate::util::forms::{optional, required};

/// # Errors
///
/// Returns the message to show when the site or name is missing.
pub fn area_input(site_id: Option<&str>, name: &str) -> Result<AreaInput, String> {
    let site_id = site_id.and_then(optional).ok_or_else(|| "No se indicó la sede del área.".to_owned())?;
    Ok(AreaInput { site_id, name: required(name, "Nombre")? })
}

#[component]
pub fn AreaFormPage() -> impl IntoView {
    let site_id = query_param("siteId");
    let effects = LiveEffects::from_context();
    let lifetime = scoped_lifetime();
    let busy = RwSignal::new(false);
    let name = RwSignal::new(String::new());

    let submit_effects = effects.clone();
    let submit_site = site_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = match area_input(submit_site.as_deref(), &name.get_untracked()) {
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
            async move { api::create_area(&input).await },
            move |area: Area| {
                done.notifier.success("Área creada", &area.name);
                done.navigate(&format!("/sites/{}", area.site_id));
            },
        );
    };

    let cancel_to = site_id.map_or_else(|| "/".to_owned(), |id| format!("/sites/{id}"));
    let on_cancel = Callback::new(move |()| effects.navigate(&cancel_to));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Nueva área"</h1>
            </header>
            <form class="form" on:submit=on_submit>
                <TextField label="Nombre" value=name required=true/>
                <FormActions busy=busy submit_label="Crear área" on_cancel=on_cancel/>
            </form>
        </section>
    }
}
