//! Category access model for seller accounts.

use crate::constants::{
    BEAUTY, ELECTRONICS, FASHION, FOOD_AND_BEVERAGE, GROCERY, HOME_AND_DECOR,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::Debug;

bitflags! {
    /// Represents a set of enabled ONDC retail categories.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CategorySet: u32 {
        const GROCERY = 1 << 0;
        const FASHION = 1 << 1;
        const ELECTRONICS = 1 << 2;
        const BEAUTY = 1 << 3;
        const HOME_AND_DECOR = 1 << 4;
        const FOOD_AND_BEVERAGE = 1 << 5;

        const ALL = Self::GROCERY.bits()
            | Self::FASHION.bits()
            | Self::ELECTRONICS.bits()
            | Self::BEAUTY.bits()
            | Self::HOME_AND_DECOR.bits()
            | Self::FOOD_AND_BEVERAGE.bits();
    }
}

impl From<&str> for CategorySet {
    fn from(s: &str) -> Self {
        match s {
            GROCERY => Self::GROCERY,
            FASHION => Self::FASHION,
            ELECTRONICS => Self::ELECTRONICS,
            BEAUTY => Self::BEAUTY,
            HOME_AND_DECOR => Self::HOME_AND_DECOR,
            FOOD_AND_BEVERAGE => Self::FOOD_AND_BEVERAGE,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for CategorySet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for CategorySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for CategorySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// Per-user category grants: an enabled category set plus the subcategories
/// unlocked within each category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub user_id: String,
    pub categories: CategorySet,
    /// Subcategory names keyed by category name; sorted for stable output.
    #[serde(default)]
    pub subcategories: BTreeMap<String, Vec<String>>,
}

impl UserPermissions {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), ..Self::default() }
    }

    /// True if `category` is enabled for this user.
    #[must_use]
    pub fn allows(&self, category: CategorySet) -> bool {
        self.categories.contains(category)
    }

    /// True if `subcategory` is unlocked within `category`.
    #[must_use]
    pub fn allows_subcategory(&self, category: &str, subcategory: &str) -> bool {
        self.allows(CategorySet::from(category))
            && self
                .subcategories
                .get(category)
                .is_some_and(|subs| subs.iter().any(|s| s == subcategory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GROCERY;

    #[test]
    fn new_users_start_with_no_grants() {
        let perms = UserPermissions::new("seller-1");
        assert_eq!(CategorySet::default(), CategorySet::empty());
        assert!(perms.categories.is_empty());
        assert!(!perms.allows(CategorySet::GROCERY));
        assert!(!perms.allows_subcategory(GROCERY, "spices"));
    }
}
