//! Pure derivations over the variant read model.
//!
//! Every function here is total and deterministic. The absent (still
//! loading) state short-circuits to a sentinel instead of dereferencing a
//! variant that has not arrived yet.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::variant::{ProductImage, Variant};

/// Snapshot key reported while the variant has not arrived yet.
pub const LOADING_FORM_KEY: &str = "loading";

/// Flatten the variant's attribute assignments into a slug -> value map.
///
/// Later assignments win on duplicate slugs. Loading yields an empty map.
pub fn flatten_attributes(variant: Option<&Variant>) -> HashMap<String, String> {
    let mut flat = HashMap::new();
    if let Some(variant) = variant {
        for assignment in &variant.attributes {
            flat.insert(assignment.attribute.slug.clone(), assignment.value.clone());
        }
    }
    flat
}

/// The product's full image gallery, ascending by `order`.
///
/// `None` while loading. Downstream must treat absence as "still loading",
/// which is distinct from a product with zero images.
pub fn product_images(variant: Option<&Variant>) -> Option<Vec<ProductImage>> {
    let variant = variant?;
    let mut images = variant.product.images.clone();
    images.sort_by_key(|image| image.order);
    Some(images)
}

/// The subset of product images attached to the variant, ascending by
/// `order`.
///
/// Image ids on the variant with no matching product image are silently
/// dropped. `None` while loading.
pub fn variant_images(variant: Option<&Variant>) -> Option<Vec<ProductImage>> {
    let variant = variant?;
    let mut images: Vec<ProductImage> = product_images(Some(variant))?
        .into_iter()
        .filter(|image| variant.image_ids.contains(&image.id))
        .collect();
    images.sort_by_key(|image| image.order);
    Some(images)
}

/// Identity key for the embedded form.
///
/// Equal variant content always yields an equal key, and any present-variant
/// key is distinct from the loading sentinel. The key is a 64-bit hash of
/// the variant's JSON serialization; serde emits struct fields in
/// declaration order, so the serialization is canonical.
pub fn form_snapshot_key(variant: Option<&Variant>) -> String {
    match variant {
        None => LOADING_FORM_KEY.to_owned(),
        Some(variant) => {
            let canonical = serde_json::to_string(variant).unwrap_or_default();
            let mut hasher = DefaultHasher::new();
            canonical.hash(&mut hasher);
            hasher.finish().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ImageId, ProductId, VariantId};
    use crate::money::Money;
    use crate::variant::{Attribute, AttributeAssignment, ProductSummary, SiblingVariant};

    fn image(id: &str, order: i32) -> ProductImage {
        ProductImage {
            id: ImageId::new(id),
            url: format!("/media/{id}.png"),
            alt: format!("image {id}"),
            order,
        }
    }

    fn assignment(slug: &str, value: &str) -> AttributeAssignment {
        AttributeAssignment {
            attribute: Attribute {
                name: slug.to_uppercase(),
                slug: slug.to_owned(),
                values: vec![value.to_owned()],
            },
            value: value.to_owned(),
        }
    }

    fn base_variant() -> Variant {
        Variant {
            id: VariantId::new("variant-1"),
            name: "Cotton shirt / M".to_owned(),
            attributes: vec![assignment("size", "M"), assignment("color", "white")],
            image_ids: vec![ImageId::new("a"), ImageId::new("b")],
            price_override: Some(Money::new("USD", 19.90)),
            product: ProductSummary {
                id: ProductId::new("product-1"),
                name: "Cotton shirt".to_owned(),
                thumbnail_url: Some("/media/thumb.png".to_owned()),
                images: vec![image("a", 2), image("b", 1), image("c", 0)],
                variants: vec![
                    SiblingVariant {
                        id: VariantId::new("variant-1"),
                        name: "Cotton shirt / M".to_owned(),
                    },
                    SiblingVariant {
                        id: VariantId::new("variant-2"),
                        name: "Cotton shirt / L".to_owned(),
                    },
                ],
            },
            sku: "SHIRT-M".to_owned(),
            stock: 12,
            stock_allocated: 3,
        }
    }

    #[test]
    fn flatten_yields_empty_map_while_loading() {
        assert!(flatten_attributes(None).is_empty());
    }

    #[test]
    fn flatten_maps_each_slug_to_its_value() {
        let variant = base_variant();
        let flat = flatten_attributes(Some(&variant));
        assert_eq!(flat.len(), 2);
        assert_eq!(flat.get("size").map(String::as_str), Some("M"));
        assert_eq!(flat.get("color").map(String::as_str), Some("white"));
    }

    #[test]
    fn flatten_last_duplicate_slug_wins() {
        let mut variant = base_variant();
        variant.attributes = vec![
            assignment("size", "M"),
            assignment("color", "white"),
            assignment("size", "L"),
        ];
        let flat = flatten_attributes(Some(&variant));
        assert_eq!(flat.len(), 2);
        assert_eq!(flat.get("size").map(String::as_str), Some("L"));
    }

    #[test]
    fn variant_images_is_absent_while_loading() {
        assert_eq!(variant_images(None), None);
        assert_eq!(product_images(None), None);
    }

    #[test]
    fn variant_images_come_back_ordered() {
        // Product carries [a:2, b:1, c:0]; the variant owns a and b.
        let variant = base_variant();
        let images = variant_images(Some(&variant)).unwrap();
        let ids: Vec<&str> = images.iter().map(|image| image.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(images.windows(2).all(|pair| pair[0].order <= pair[1].order));
    }

    #[test]
    fn variant_images_drop_ids_missing_from_the_product() {
        let mut variant = base_variant();
        variant.image_ids = vec![ImageId::new("z")];
        let images = variant_images(Some(&variant));
        assert_eq!(images, Some(vec![]));
    }

    #[test]
    fn product_images_sorted_ascending_by_order() {
        let variant = base_variant();
        let images = product_images(Some(&variant)).unwrap();
        let ids: Vec<&str> = images.iter().map(|image| image.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn snapshot_key_uses_loading_sentinel_while_absent() {
        assert_eq!(form_snapshot_key(None), LOADING_FORM_KEY);
    }

    #[test]
    fn snapshot_key_is_deterministic() {
        let variant = base_variant();
        assert_eq!(
            form_snapshot_key(Some(&variant)),
            form_snapshot_key(Some(&variant.clone()))
        );
    }

    #[test]
    fn snapshot_key_differs_from_the_sentinel() {
        let variant = base_variant();
        assert_ne!(form_snapshot_key(Some(&variant)), LOADING_FORM_KEY);
    }

    #[test]
    fn snapshot_key_changes_when_content_changes() {
        let variant = base_variant();
        let mut edited = variant.clone();
        edited.sku = "SHIRT-M-2".to_owned();
        assert_ne!(
            form_snapshot_key(Some(&variant)),
            form_snapshot_key(Some(&edited))
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        fn variant_with_assignments(pairs: &[(String, String)]) -> Variant {
            let mut variant = base_variant();
            variant.attributes = pairs
                .iter()
                .map(|(slug, value)| assignment(slug, value))
                .collect();
            variant
        }

        proptest! {
            /// Property: one key per distinct slug, last occurrence wins.
            #[test]
            fn flatten_keeps_one_value_per_slug(
                pairs in prop::collection::vec(("[a-d]", "[a-z]{1,6}"), 0..12)
            ) {
                let variant = variant_with_assignments(&pairs);
                let flat = flatten_attributes(Some(&variant));

                let mut expected = HashMap::new();
                for (slug, value) in &pairs {
                    expected.insert(slug.clone(), value.clone());
                }
                prop_assert_eq!(flat, expected);
            }

            /// Property: intersection output is an ordered subset bounded by
            /// both inputs.
            #[test]
            fn intersection_is_an_ordered_bounded_subset(
                raw_images in prop::collection::vec(("[a-h]", 0..6i32), 0..10),
                picks in prop::collection::vec("[a-h]", 0..6)
            ) {
                let mut variant = base_variant();
                let mut seen = HashSet::new();
                variant.product.images = raw_images
                    .into_iter()
                    .filter(|(id, _)| seen.insert(id.clone()))
                    .map(|(id, order)| ProductImage {
                        id: ImageId::new(id.as_str()),
                        url: format!("/media/{id}.png"),
                        alt: String::new(),
                        order,
                    })
                    .collect();
                variant.image_ids = picks.iter().map(|id| ImageId::new(id.as_str())).collect();

                let images = variant_images(Some(&variant)).unwrap();

                prop_assert!(images.len() <= variant.product.images.len());
                prop_assert!(images.len() <= variant.image_ids.len());
                for image in &images {
                    prop_assert!(variant.image_ids.contains(&image.id));
                }
                prop_assert!(images.windows(2).all(|pair| pair[0].order <= pair[1].order));
            }

            /// Property: equal content yields an equal key, and no key
            /// collides with the loading sentinel.
            #[test]
            fn snapshot_key_is_stable_per_content(
                sku in "[A-Z0-9]{1,20}",
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}"
            ) {
                let mut variant = base_variant();
                variant.sku = sku;
                variant.name = name;

                let key = form_snapshot_key(Some(&variant));
                prop_assert_eq!(&key, &form_snapshot_key(Some(&variant.clone())));
                prop_assert_ne!(key, LOADING_FORM_KEY.to_owned());
            }
        }
    }
}
