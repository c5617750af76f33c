//! Well-known entity and storage key strings shared across slices.

// Store namespaces (one per feature slice).
pub const AUTH: &str = "auth";
pub const SETTINGS: &str = "settings";
pub const ACCESS: &str = "access";
pub const CATALOG: &str = "catalog";
pub const SHARES: &str = "shares";

// Store keys.
pub const MOCK_USER: &str = "mock_user";
pub const CATEGORY_PERMISSIONS: &str = "category_permissions";
pub const SUBCATEGORY_PRODUCTS: &str = "subcategory_products";
pub const APPEARANCE: &str = "appearance";

// ONDC retail category names.
pub const GROCERY: &str = "grocery";
pub const FASHION: &str = "fashion";
pub const ELECTRONICS: &str = "electronics";
pub const BEAUTY: &str = "beauty";
pub const HOME_AND_DECOR: &str = "home_and_decor";
pub const FOOD_AND_BEVERAGE: &str = "food_and_beverage";

/// Prefix for shareable experience identifiers.
pub const SHARE_PREFIX: &str = "exp";

/// Titles of the registration wizard steps, in order.
pub const STEP_TITLES: [&str; 4] =
    ["Personal details", "Business details", "Network subscriber", "Registered address"];

/// Post-submission checklist layout: section title and item labels.
pub const CHECKLIST_SECTIONS: [(&str, &[&str]); 3] = [
    ("Verification", &["PAN verification", "GST verification", "Bank account verification"]),
    ("Catalog setup", &["Category selection", "First product listing"]),
    ("Network activation", &["Subscriber registration", "Payment activation"]),
];
