//! Strongly-typed identifiers used across the catalog read models.
//!
//! The upstream API hands out opaque ids, so these are string-backed
//! newtypes rather than parsed UUIDs.

use serde::{Deserialize, Serialize};

/// Identifier of a product variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

/// Identifier of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a product image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

macro_rules! impl_str_newtype {
    ($t:ty) => {
        impl $t {
            /// Wrap an id as handed out by the upstream API.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

impl_str_newtype!(VariantId);
impl_str_newtype!(ProductId);
impl_str_newtype!(ImageId);
