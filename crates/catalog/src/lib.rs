//! Read models and pure derivations for the variant-editing page.
//!
//! This crate contains no IO and no framework types: everything here is a
//! deterministic function of the data handed over by the fetching layer.

pub mod form;
pub mod ids;
pub mod money;
pub mod selectors;
pub mod variant;

pub use form::{FormChange, VariantFormData, initial_form_data, parsed_amount, parsed_count};
pub use ids::{ImageId, ProductId, VariantId};
pub use money::Money;
pub use selectors::{
    LOADING_FORM_KEY, flatten_attributes, form_snapshot_key, product_images, variant_images,
};
pub use variant::{
    Attribute, AttributeAssignment, ProductImage, ProductSummary, SiblingVariant, Variant,
};
