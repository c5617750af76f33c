//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for IDs and config loading.
//!
//! ## ID generation
//! Use `share_token!` for URL-safe, lowercase share tokens:
//! ```rust
//! # use tsp_kernel::share_token;
//! let token = share_token!();
//! assert_eq!(token.len(), 8);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use tsp_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("app")).unwrap();
//! ```
pub mod config;
pub mod prelude;

pub use tsp_domain as domain;
pub use nanoid::nanoid;

// Lowercase alphabet keeps tokens copy-paste safe inside URLs; visually
// ambiguous characters (l, 0, 1, o) are excluded.
pub const TOKEN_ALPHABET: &[char; 31] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'k', 'm',
    'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Generates an unambiguous lowercase token for share identifiers.
#[macro_export]
macro_rules! share_token {
    () => {
        $crate::nanoid!(8, $crate::TOKEN_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::TOKEN_ALPHABET)
    };
}
