//! Sibling-variant navigation card.

use leptos::*;

use merchdesk_catalog::{SiblingVariant, VariantId};

#[component]
pub fn VariantNavigation(
    /// Siblings of the parent product; `None` while loading.
    variants: Option<Vec<SiblingVariant>>,
    current: Option<VariantId>,
    #[prop(into)] on_row_click: Callback<VariantId>,
) -> impl IntoView {
    view! {
        <section class="card card--navigation">
            <h2 class="card__title">"Variants"</h2>
            {match variants {
                None => view! { <p class="card__text">"Loading..."</p> }.into_view(),
                Some(variants) => view! {
                    <ul class="variant-list">
                        {variants
                            .into_iter()
                            .map(|sibling| {
                                let is_current = current.as_ref() == Some(&sibling.id);
                                let id = sibling.id.clone();
                                view! {
                                    <li
                                        class="variant-list__row"
                                        class=("variant-list__row--current", is_current)
                                        on:click=move |_| on_row_click.call(id.clone())
                                    >
                                        {sibling.name}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view(),
            }}
        </section>
    }
}
