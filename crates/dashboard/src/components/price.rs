//! Pricing editor card.

use leptos::*;

use merchdesk_catalog::{FormChange, parsed_amount};

use crate::form::VariantForm;

#[component]
pub fn VariantPriceCard(
    /// Currency code shown next to the field labels; `None` while loading.
    currency: Option<String>,
    loading: bool,
    form: VariantForm,
) -> impl IntoView {
    let data = form.data();
    let suffix = currency.map(|code| format!(" ({code})")).unwrap_or_default();
    let override_label = format!("Price override{suffix}");
    let cost_label = format!("Cost price{suffix}");

    view! {
        <section class="card card--price">
            <h2 class="card__title">"Pricing"</h2>
            <label class="field">
                <span class="field__label">{override_label}</span>
                <input
                    type="number"
                    disabled=loading
                    prop:value=move || {
                        data.with(|data| {
                            data.price_override
                                .map(|value| value.to_string())
                                .unwrap_or_default()
                        })
                    }
                    on:input=move |ev| {
                        if let Some(value) = parsed_amount(&event_target_value(&ev)) {
                            form.apply(FormChange::PriceOverride(value));
                        }
                    }
                />
            </label>
            <label class="field">
                <span class="field__label">{cost_label}</span>
                <input
                    type="number"
                    disabled=loading
                    prop:value=move || {
                        data.with(|data| {
                            data.cost_price
                                .map(|value| value.to_string())
                                .unwrap_or_default()
                        })
                    }
                    on:input=move |ev| {
                        if let Some(value) = parsed_amount(&event_target_value(&ev)) {
                            form.apply(FormChange::CostPrice(value));
                        }
                    }
                />
            </label>
        </section>
    }
}
