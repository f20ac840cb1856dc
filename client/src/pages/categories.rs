//! Category create form, reached from a company's detail page.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;

use crate::components::form_field::{FormActions, TextArea, TextField};
use crate::net::api;
use crate::net::types::{Category, CategoryInput};
use crate::pages::common::{INVALID_FORM_TITLE, query_param, session_company};
use crate::state::page::{LiveEffects, PageEffects, scoped_lifetime, spawn_submit};
use crate::util::forms::{optional, required};

/// # Errors
///
/// Returns the message to show when the company or name is missing.
pub fn category_input(company_id: Option<&str>, name: &str, description: &str) -> Result<CategoryInput, String> {
    let company_id = company_id
        .and_then(optional)
        .ok_or_else(|| "No se indicó la empresa de la categoría.".to_owned())?;
    Ok(CategoryInput { company_id, name: required(name, "Nombre")?, description: optional(description) })
}

#[component]
pub fn CategoryFormPage() -> impl IntoView {
    let company_id = query_param("companyId").or_else(|| session_company().ok());
    let effects = LiveEffects::from_context();
    let lifetime = scoped_lifetime();
    let busy = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit_effects = effects.clone();
    let submit_company = company_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input =
            match category_input(submit_company.as_deref(), &name.get_untracked(), &description.get_untracked()) {
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
            async move { api::create_category(&input).await },
            move |category: Category| {
                done.notifier.success("Categoría creada", &category.name);
                done.navigate(&format!("/companies/{}", category.company_id));
            },
        );
    };

    let cancel_to = company_id.map_or_else(|| "/".to_owned(), |id| format!("/companies/{id}"));
    let on_cancel = Callback::new(move |()| effects.navigate(&cancel_to));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Nueva categoría"</h1>
            </header>
            <form class="form" on:submit=on_submit>
                <TextField label="Nombre" value=name required=true/>
                <TextArea label="Descripción" value=description/>
                <FormActions busy=busy submit_label="Crear categoría" on_cancel=on_cancel/>
            </form>
        </section>
    }
}
