//! Editable form state for the variant page.
//!
//! The reactive wrapper lives in the dashboard crate; this module owns the
//! plain data: which fields exist, how they are seeded from a variant, and
//! how raw input strings map onto them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::selectors::flatten_attributes;
use crate::variant::Variant;

/// The editable fields tracked by the variant form.
///
/// `None` renders as an empty input. Attribute entries are keyed by slug.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariantFormData {
    pub cost_price: Option<f64>,
    pub price_override: Option<f64>,
    pub stock: Option<i64>,
    pub sku: Option<String>,
    pub attributes: HashMap<String, String>,
}

/// A single field mutation applied to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormChange {
    CostPrice(Option<f64>),
    PriceOverride(Option<f64>),
    Stock(Option<i64>),
    Sku(String),
    Attribute { slug: String, value: String },
}

impl VariantFormData {
    /// Apply a field mutation in place.
    pub fn apply(&mut self, change: FormChange) {
        match change {
            FormChange::CostPrice(value) => self.cost_price = value,
            FormChange::PriceOverride(value) => self.price_override = value,
            FormChange::Stock(value) => self.stock = value,
            FormChange::Sku(value) => self.sku = Some(value),
            FormChange::Attribute { slug, value } => {
                self.attributes.insert(slug, value);
            }
        }
    }
}

/// Seed the form from the displayed variant.
///
/// Both price fields start from the price override, matching the upstream
/// editor. Loading seeds an empty form.
pub fn initial_form_data(variant: Option<&Variant>) -> VariantFormData {
    let override_amount = variant
        .and_then(|variant| variant.price_override.as_ref())
        .map(|money| money.amount);
    VariantFormData {
        cost_price: override_amount,
        price_override: override_amount,
        stock: variant.map(|variant| variant.stock),
        sku: variant.map(|variant| variant.sku.clone()),
        attributes: flatten_attributes(variant),
    }
}

/// Parse a decimal amount field.
///
/// Blank input clears the field (`Some(None)`); anything unparseable leaves
/// it untouched (`None`).
pub fn parsed_amount(raw: &str) -> Option<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    raw.parse::<f64>().ok().map(Some)
}

/// Parse an integer count field, with the same clearing rules as
/// [`parsed_amount`].
pub fn parsed_count(raw: &str) -> Option<Option<i64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    raw.parse::<i64>().ok().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ImageId, ProductId, VariantId};
    use crate::money::Money;
    use crate::variant::{Attribute, AttributeAssignment, ProductImage, ProductSummary};

    fn sample_variant() -> Variant {
        Variant {
            id: VariantId::new("variant-1"),
            name: "Mug / blue".to_owned(),
            attributes: vec![AttributeAssignment {
                attribute: Attribute {
                    name: "Color".to_owned(),
                    slug: "color".to_owned(),
                    values: vec!["blue".to_owned(), "red".to_owned()],
                },
                value: "blue".to_owned(),
            }],
            image_ids: vec![ImageId::new("a")],
            price_override: Some(Money::new("EUR", 7.50)),
            product: ProductSummary {
                id: ProductId::new("product-1"),
                name: "Mug".to_owned(),
                thumbnail_url: None,
                images: vec![ProductImage {
                    id: ImageId::new("a"),
                    url: "/media/a.png".to_owned(),
                    alt: String::new(),
                    order: 0,
                }],
                variants: vec![],
            },
            sku: "MUG-BLUE".to_owned(),
            stock: 4,
            stock_allocated: 1,
        }
    }

    #[test]
    fn loading_seeds_an_empty_form() {
        assert_eq!(initial_form_data(None), VariantFormData::default());
    }

    #[test]
    fn both_price_fields_seed_from_the_override() {
        let variant = sample_variant();
        let data = initial_form_data(Some(&variant));
        assert_eq!(data.cost_price, Some(7.50));
        assert_eq!(data.price_override, Some(7.50));
        assert_eq!(data.stock, Some(4));
        assert_eq!(data.sku.as_deref(), Some("MUG-BLUE"));
        assert_eq!(data.attributes.get("color").map(String::as_str), Some("blue"));
    }

    #[test]
    fn missing_override_leaves_price_fields_empty() {
        let mut variant = sample_variant();
        variant.price_override = None;
        let data = initial_form_data(Some(&variant));
        assert_eq!(data.cost_price, None);
        assert_eq!(data.price_override, None);
    }

    #[test]
    fn apply_updates_a_single_field() {
        let mut data = initial_form_data(Some(&sample_variant()));
        data.apply(FormChange::Stock(Some(9)));
        assert_eq!(data.stock, Some(9));

        data.apply(FormChange::Attribute {
            slug: "color".to_owned(),
            value: "red".to_owned(),
        });
        assert_eq!(data.attributes.get("color").map(String::as_str), Some("red"));

        data.apply(FormChange::Sku("MUG-RED".to_owned()));
        assert_eq!(data.sku.as_deref(), Some("MUG-RED"));
    }

    #[test]
    fn blank_input_clears_numeric_fields() {
        assert_eq!(parsed_amount(""), Some(None));
        assert_eq!(parsed_amount("   "), Some(None));
        assert_eq!(parsed_count(""), Some(None));
    }

    #[test]
    fn garbage_input_is_ignored() {
        assert_eq!(parsed_amount("12,5"), None);
        assert_eq!(parsed_count("many"), None);
    }

    #[test]
    fn valid_input_parses() {
        assert_eq!(parsed_amount("12.5"), Some(Some(12.5)));
        assert_eq!(parsed_amount(" 3 "), Some(Some(3.0)));
        assert_eq!(parsed_count("42"), Some(Some(42)));
    }
}
