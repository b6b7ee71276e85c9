//! Stock and SKU editor card.

use leptos::*;

use merchdesk_catalog::{FormChange, parsed_count};

use crate::form::VariantForm;

#[component]
pub fn VariantStockCard(
    /// Units reserved by open orders; `None` while loading.
    stock_allocated: Option<i64>,
    loading: bool,
    form: VariantForm,
) -> impl IntoView {
    let data = form.data();
    let allocated = stock_allocated
        .map(|count| format!("{count} units allocated"))
        .unwrap_or_default();

    view! {
        <section class="card card--stock">
            <h2 class="card__title">"Stock"</h2>
            <label class="field">
                <span class="field__label">"SKU"</span>
                <input
                    type="text"
                    disabled=loading
                    prop:value=move || data.with(|data| data.sku.clone().unwrap_or_default())
                    on:input=move |ev| form.apply(FormChange::Sku(event_target_value(&ev)))
                />
            </label>
            <label class="field">
                <span class="field__label">"In stock"</span>
                <input
                    type="number"
                    disabled=loading
                    prop:value=move || {
                        data.with(|data| {
                            data.stock.map(|value| value.to_string()).unwrap_or_default()
                        })
                    }
                    on:input=move |ev| {
                        if let Some(value) = parsed_count(&event_target_value(&ev)) {
                            form.apply(FormChange::Stock(value));
                        }
                    }
                />
            </label>
            <p class="card__text card__text--muted">{allocated}</p>
        </section>
    }
}
