//! Registration wizard record and its step layout.
//!
//! The form itself is a flat record of scalar fields. Steps are a static
//! grouping over those fields; validation rules live in the onboarding slice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of wizard steps.
pub const STEP_COUNT: usize = 4;

/// Identifier of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Mobile,
    BusinessName,
    GstNumber,
    BankIfsc,
    SubscriberId,
    SubscriberUrl,
    Street,
    City,
    State,
    PostalCode,
}

impl Field {
    /// Stable snake_case name, used for error maps and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Mobile => "mobile",
            Self::BusinessName => "business_name",
            Self::GstNumber => "gst_number",
            Self::BankIfsc => "bank_ifsc",
            Self::SubscriberId => "subscriber_id",
            Self::SubscriberUrl => "subscriber_url",
            Self::Street => "street",
            Self::City => "city",
            Self::State => "state",
            Self::PostalCode => "postal_code",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields that must validate before step `i` can be advanced past.
#[must_use]
pub const fn step_fields(step: usize) -> &'static [Field] {
    match step {
        0 => &[Field::FullName, Field::Email, Field::Mobile],
        1 => &[Field::BusinessName, Field::GstNumber, Field::BankIfsc],
        2 => &[Field::SubscriberId, Field::SubscriberUrl],
        _ => &[Field::Street, Field::City, Field::State, Field::PostalCode],
    }
}

/// The flat registration record collected by the wizard.
///
/// Mutable only through [`RegistrationForm::set`] while the wizard is in
/// progress; the onboarding slice freezes it after submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub business_name: String,
    pub gst_number: String,
    pub bank_ifsc: String,
    pub subscriber_id: String,
    pub subscriber_url: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl RegistrationForm {
    /// Returns the current value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
            Field::BusinessName => &self.business_name,
            Field::GstNumber => &self.gst_number,
            Field::BankIfsc => &self.bank_ifsc,
            Field::SubscriberId => &self.subscriber_id,
            Field::SubscriberUrl => &self.subscriber_url,
            Field::Street => &self.street,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::PostalCode => &self.postal_code,
        }
    }

    /// Overwrites the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Mobile => &mut self.mobile,
            Field::BusinessName => &mut self.business_name,
            Field::GstNumber => &mut self.gst_number,
            Field::BankIfsc => &mut self.bank_ifsc,
            Field::SubscriberId => &mut self.subscriber_id,
            Field::SubscriberUrl => &mut self.subscriber_url,
            Field::Street => &mut self.street,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::PostalCode => &mut self.postal_code,
        };
        *slot = value.into();
    }
}
