//! Image gallery card for the variant.

use leptos::*;

use merchdesk_catalog::ProductImage;

#[component]
pub fn VariantImagesCard(
    /// Images attached to the variant; `None` while loading.
    images: Option<Vec<ProductImage>>,
    #[prop(optional, into)] placeholder_image: Option<String>,
    loading: bool,
    #[prop(into)] on_image_add: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="card card--images">
            <h2 class="card__title">"Images"</h2>
            <button
                class="card__action"
                disabled=loading
                on:click=move |_| on_image_add.call(())
            >
                "Add image"
            </button>
            {match images {
                None => view! { <p class="card__text">"Loading..."</p> }.into_view(),
                Some(images) if images.is_empty() => {
                    view! { <p class="card__text">"No images attached"</p> }.into_view()
                }
                Some(images) => view! {
                    <div class="image-grid">
                        {images
                            .into_iter()
                            .map(|image| {
                                let src = if image.url.is_empty() {
                                    placeholder_image.clone().unwrap_or_default()
                                } else {
                                    image.url.clone()
                                };
                                view! { <img class="image-grid__item" src=src alt=image.alt.clone()/> }
                            })
                            .collect_view()}
                    </div>
                }
                .into_view(),
            }}
        </section>
    }
}
