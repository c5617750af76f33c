//! Experience and product listing records.

use serde::{Deserialize, Serialize};

/// A single product listing attached to an experience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub name: String,
    pub description: String,
    /// Price in the smallest currency unit (paise).
    pub price: u64,
    pub category: String,
    pub subcategory: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A seller "experience": a curated storefront page with product listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub tagline: String,
    pub seller_id: String,
    #[serde(default)]
    pub products: Vec<ProductListing>,
}

impl Experience {
    #[must_use]
    pub fn new(title: impl Into<String>, seller_id: impl Into<String>) -> Self {
        Self { title: title.into(), seller_id: seller_id.into(), ..Self::default() }
    }
}
