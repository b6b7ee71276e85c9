//! Demo shell standing in for the data-fetching container.

use leptos::*;

use merchdesk_catalog::{
    Attribute, AttributeAssignment, ImageId, Money, ProductId, ProductImage, ProductSummary,
    SiblingVariant, Variant, VariantFormData, VariantId,
};

use crate::components::{SaveBarState, VariantPage};

/// Root component: owns the variant signal and the page callbacks.
///
/// A real deployment replaces this with the container that fetches the
/// variant and persists submissions.
#[component]
pub fn App() -> impl IntoView {
    let variant = create_rw_signal(Some(sample_variant()));
    let save_state = create_rw_signal(SaveBarState::Idle);

    let on_back = Callback::from(move |_: ()| {
        tracing::info!("back to product requested");
    });
    let on_delete = Callback::from(move |_: ()| {
        tracing::info!("variant deleted");
        variant.set(None);
    });
    let on_submit = Callback::from(move |data: VariantFormData| {
        tracing::info!(?data, "variant submitted");
    });
    let on_image_select = Callback::from(move |ids: Vec<ImageId>| {
        tracing::info!(count = ids.len(), "image selection received");
    });

    view! {
        <VariantPage
            variant=variant
            save_state=save_state
            placeholder_image="/static/placeholder-60x60.png".to_owned()
            on_back=on_back
            on_delete=on_delete
            on_submit=on_submit
            on_image_select=on_image_select
        />
    }
}

fn sample_variant() -> Variant {
    let image = |id: &str, order: i32| ProductImage {
        id: ImageId::new(id),
        url: format!("/media/products/shirt-{id}.png"),
        alt: format!("Cotton shirt, view {order}"),
        order,
    };
    let assignment = |name: &str, slug: &str, values: &[&str], value: &str| AttributeAssignment {
        attribute: Attribute {
            name: name.to_owned(),
            slug: slug.to_owned(),
            values: values.iter().map(|value| (*value).to_owned()).collect(),
        },
        value: value.to_owned(),
    };

    Variant {
        id: VariantId::new("variant-shirt-m-white"),
        name: "Cotton shirt / M / white".to_owned(),
        attributes: vec![
            assignment("Size", "size", &["S", "M", "L"], "M"),
            assignment("Color", "color", &["white", "black"], "white"),
        ],
        image_ids: vec![ImageId::new("front"), ImageId::new("back")],
        price_override: Some(Money::new("USD", 24.90)),
        product: ProductSummary {
            id: ProductId::new("product-shirt"),
            name: "Cotton shirt".to_owned(),
            thumbnail_url: Some("/media/products/shirt-thumb.png".to_owned()),
            images: vec![image("front", 0), image("back", 1), image("detail", 2)],
            variants: vec![
                SiblingVariant {
                    id: VariantId::new("variant-shirt-m-white"),
                    name: "Cotton shirt / M / white".to_owned(),
                },
                SiblingVariant {
                    id: VariantId::new("variant-shirt-l-white"),
                    name: "Cotton shirt / L / white".to_owned(),
                },
                SiblingVariant {
                    id: VariantId::new("variant-shirt-m-black"),
                    name: "Cotton shirt / M / black".to_owned(),
                },
            ],
        },
        sku: "SHIRT-M-WHITE".to_owned(),
        stock: 18,
        stock_allocated: 4,
    }
}
