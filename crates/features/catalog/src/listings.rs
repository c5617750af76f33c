//! Seller experience drafts and previews.

use crate::error::CatalogError;
use tsp_domain::catalog::{Experience, ProductListing};
use tsp_store::StoreNamespace;

/// Prefix for draft keys inside the `catalog` namespace.
const DRAFT_KEY_PREFIX: &str = "draft-";

/// Stores a seller's experience drafts.
#[derive(Debug, Clone)]
pub struct Listings {
    catalog: StoreNamespace,
}

impl Listings {
    #[must_use]
    pub const fn new(catalog: StoreNamespace) -> Self {
        Self { catalog }
    }

    /// Saves a draft keyed by its seller id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] if persisting the draft fails.
    pub async fn save_draft(&self, experience: &Experience) -> Result<(), CatalogError> {
        let key = draft_key(&experience.seller_id);
        self.catalog.put(&key, experience).await?;
        Ok(())
    }

    /// Loads a seller's draft, if one exists. Corrupted drafts read as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] on I/O failure.
    pub async fn load_draft(&self, seller_id: &str) -> Result<Option<Experience>, CatalogError> {
        Ok(self.catalog.get(&draft_key(seller_id)).await?)
    }

    /// Removes a seller's draft.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] on I/O failure.
    pub async fn remove_draft(&self, seller_id: &str) -> Result<(), CatalogError> {
        self.catalog.remove(&draft_key(seller_id)).await?;
        Ok(())
    }
}

fn draft_key(seller_id: &str) -> String {
    format!("{DRAFT_KEY_PREFIX}{seller_id}")
}

/// Renders a plain-text preview of an experience, one line per product.
#[must_use]
pub fn preview(experience: &Experience) -> String {
    let mut out = format!("{}\n{}\n", experience.title, experience.tagline);
    for product in &experience.products {
        out.push_str(&preview_line(product));
        out.push('\n');
    }
    out
}

fn preview_line(product: &ProductListing) -> String {
    let rupees = product.price / 100;
    let paise = product.price % 100;
    format!("- {} ({}/{}): \u{20b9}{rupees}.{paise:02}", product.name, product.category, product.subcategory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_lists_products_with_prices() {
        let experience = Experience {
            title: "Asha Organics".to_owned(),
            tagline: "Farm fresh, always".to_owned(),
            seller_id: "asha-organics.ondc.org".to_owned(),
            products: vec![ProductListing {
                name: "Turmeric powder".to_owned(),
                description: "200g pouch".to_owned(),
                price: 14_950,
                category: "grocery".to_owned(),
                subcategory: "spices".to_owned(),
                image_url: None,
            }],
        };

        let text = preview(&experience);
        assert!(text.starts_with("Asha Organics\nFarm fresh, always\n"));
        assert!(text.contains("Turmeric powder"));
        assert!(text.contains("\u{20b9}149.50"));
    }
}
