//! Attribute editor card: one select per configurable attribute.

use leptos::*;

use merchdesk_catalog::{AttributeAssignment, FormChange};

use crate::form::VariantForm;

#[component]
pub fn VariantAttributesCard(
    /// The variant's assignments; `None` while loading.
    assignments: Option<Vec<AttributeAssignment>>,
    form: VariantForm,
) -> impl IntoView {
    view! {
        <section class="card card--attributes">
            <h2 class="card__title">"Attributes"</h2>
            {match assignments {
                None => view! { <p class="card__text">"Loading..."</p> }.into_view(),
                Some(assignments) => assignments
                    .into_iter()
                    .map(|assignment| {
                        let name = assignment.attribute.name.clone();
                        let values = assignment.attribute.values.clone();
                        let slug = assignment.attribute.slug.clone();
                        let value_slug = assignment.attribute.slug;
                        let data = form.data();
                        view! {
                            <label class="field">
                                <span class="field__label">{name}</span>
                                <select
                                    prop:value=move || {
                                        data.with(|data| {
                                            data.attributes
                                                .get(&value_slug)
                                                .cloned()
                                                .unwrap_or_default()
                                        })
                                    }
                                    on:change=move |ev| {
                                        form.apply(FormChange::Attribute {
                                            slug: slug.clone(),
                                            value: event_target_value(&ev),
                                        })
                                    }
                                >
                                    {values
                                        .into_iter()
                                        .map(|value| {
                                            view! { <option value=value.clone()>{value}</option> }
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                        }
                    })
                    .collect_view(),
            }}
        </section>
    }
}
