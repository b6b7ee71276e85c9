//! Read models for the variant-editing page.
//!
//! These mirror the shapes returned by the fetching layer. The API's nested
//! edge/node lists are flattened into plain vectors before they reach this
//! crate; everything is owned data, immutable from the page's perspective.

use serde::{Deserialize, Serialize};

use crate::ids::{ImageId, ProductId, VariantId};
use crate::money::Money;

/// A single product image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: ImageId,
    pub url: String,
    pub alt: String,
    /// Display position within the product's gallery.
    pub order: i32,
}

/// A configurable attribute definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub slug: String,
    /// Permitted values for this attribute.
    pub values: Vec<String>,
}

/// The selected value of an attribute for a given variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeAssignment {
    pub attribute: Attribute,
    pub value: String,
}

/// Sibling variant reference, used by the navigation card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiblingVariant {
    pub id: VariantId,
    pub name: String,
}

/// Parent product summary embedded in the variant read model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub thumbnail_url: Option<String>,
    /// The product's full image gallery, in API order.
    pub images: Vec<ProductImage>,
    pub variants: Vec<SiblingVariant>,
}

/// A purchasable product variant as displayed by the editing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub name: String,
    pub attributes: Vec<AttributeAssignment>,
    /// Ids of the product images attached to this variant.
    pub image_ids: Vec<ImageId>,
    pub price_override: Option<Money>,
    pub product: ProductSummary,
    pub sku: String,
    pub stock: i64,
    pub stock_allocated: i64,
}
