//! Per-user category and subcategory grants.
//!
//! Grants persist on every mutation. A missing or corrupted record reads as
//! the empty grant set for that user rather than an error, matching the
//! store's discard-on-corruption behavior.

use crate::error::AccessError;
use std::collections::BTreeMap;
use tracing::info;
use tsp_domain::access::{CategorySet, UserPermissions};
use tsp_domain::constants::{CATEGORY_PERMISSIONS, SUBCATEGORY_PRODUCTS};
use tsp_store::StoreNamespace;

/// Product names unlocked per subcategory, shared across the dashboard.
pub type SubcategoryProducts = BTreeMap<String, Vec<String>>;

/// Reads and mutates category grants in the `access` namespace.
#[derive(Debug, Clone)]
pub struct AccessService {
    access: StoreNamespace,
}

impl AccessService {
    #[must_use]
    pub const fn new(access: StoreNamespace) -> Self {
        Self { access }
    }

    /// Loads a user's grants, defaulting to no categories when the record
    /// is absent or was discarded as corrupted.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Store`] on I/O failure.
    pub async fn permissions(&self, user_id: &str) -> Result<UserPermissions, AccessError> {
        let loaded = self.access.get::<UserPermissions>(&permissions_key(user_id)).await?;
        Ok(loaded.unwrap_or_else(|| UserPermissions::new(user_id)))
    }

    /// Flips a category on or off for the user and persists immediately.
    /// Disabling a category also drops its subcategory grants.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Store`] on I/O failure.
    pub async fn toggle_category(
        &self,
        user_id: &str,
        category: CategorySet,
    ) -> Result<UserPermissions, AccessError> {
        let mut grants = self.permissions(user_id).await?;
        grants.categories.toggle(category);

        if !grants.categories.contains(category) {
            grants.subcategories.retain(|name, _| grants.categories.contains(CategorySet::from(name.as_str())));
        }

        self.access.put(&permissions_key(user_id), &grants).await?;
        info!(user = user_id, categories = ?grants.categories, "Category grants updated");
        Ok(grants)
    }

    /// Replaces the subcategory list for one category and persists
    /// immediately. An empty list removes the entry.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Store`] on I/O failure.
    pub async fn set_subcategories(
        &self,
        user_id: &str,
        category: &str,
        subcategories: Vec<String>,
    ) -> Result<UserPermissions, AccessError> {
        let mut grants = self.permissions(user_id).await?;

        if subcategories.is_empty() {
            grants.subcategories.remove(category);
        } else {
            grants.subcategories.insert(category.to_owned(), subcategories);
        }

        self.access.put(&permissions_key(user_id), &grants).await?;
        Ok(grants)
    }

    /// Loads the shared subcategory-to-products map, defaulting to empty.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Store`] on I/O failure.
    pub async fn subcategory_products(&self) -> Result<SubcategoryProducts, AccessError> {
        let loaded = self.access.get::<SubcategoryProducts>(SUBCATEGORY_PRODUCTS).await?;
        Ok(loaded.unwrap_or_default())
    }

    /// Replaces the product list for one subcategory and persists
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Store`] on I/O failure.
    pub async fn set_subcategory_products(
        &self,
        subcategory: &str,
        products: Vec<String>,
    ) -> Result<SubcategoryProducts, AccessError> {
        let mut map = self.subcategory_products().await?;

        if products.is_empty() {
            map.remove(subcategory);
        } else {
            map.insert(subcategory.to_owned(), products);
        }

        self.access.put(SUBCATEGORY_PRODUCTS, &map).await?;
        Ok(map)
    }
}

fn permissions_key(user_id: &str) -> String {
    format!("{CATEGORY_PERMISSIONS}-{user_id}")
}
