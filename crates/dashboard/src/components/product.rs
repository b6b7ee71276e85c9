//! Parent product summary card.

use leptos::*;

use merchdesk_catalog::ProductSummary;

#[component]
pub fn ProductSummaryCard(
    product: Option<ProductSummary>,
    #[prop(optional, into)] placeholder_image: Option<String>,
) -> impl IntoView {
    let thumbnail = product
        .as_ref()
        .and_then(|product| product.thumbnail_url.clone())
        .or(placeholder_image);
    let name = product.as_ref().map(|product| product.name.clone());

    view! {
        <section class="card card--product">
            <h2 class="card__title">"Product"</h2>
            {match thumbnail {
                Some(url) => view! {
                    <img class="card__thumbnail" src=url alt="Product thumbnail"/>
                }
                .into_view(),
                None => view! {
                    <div class="card__thumbnail card__thumbnail--empty"></div>
                }
                .into_view(),
            }}
            <p class="card__text">{name.unwrap_or_else(|| "...".to_owned())}</p>
        </section>
    }
}
