//! Mocked authentication user record.
//!
//! Authentication is entirely simulated: a fake user object is persisted in
//! the store and read back on load. There is no credential verification.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockUser {
    pub id: String,
    pub display_name: String,
    pub email: String,
    /// Unix millisecond timestamp of the simulated sign-in.
    pub signed_in_at: i64,
}
