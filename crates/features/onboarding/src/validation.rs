//! Field validation rules for the registration record.
//!
//! Rules are character-class checks over trimmed input. Messages are static
//! and user-facing; they end up in the wizard's per-field error map.

use tsp_domain::registration::Field;

/// Validates one field value. `Ok(())` on success, a user-facing message on
/// failure.
///
/// # Errors
///
/// Returns the message describing why `value` is not acceptable for `field`.
pub fn validate_field(field: Field, value: &str) -> Result<(), &'static str> {
    let value = value.trim();

    match field {
        Field::FullName => require_length(value, 2, 100, "Enter your full name"),
        Field::Email => validate_email(value),
        Field::Mobile => validate_mobile(value),
        Field::BusinessName => require_length(value, 2, 120, "Enter your business name"),
        Field::GstNumber => validate_gst(value),
        Field::BankIfsc => validate_ifsc(value),
        Field::SubscriberId => validate_subscriber_id(value),
        Field::SubscriberUrl => validate_url(value),
        Field::Street => require_length(value, 3, 200, "Enter your street address"),
        Field::City => require_length(value, 2, 80, "Enter your city"),
        Field::State => require_length(value, 2, 80, "Enter your state"),
        Field::PostalCode => validate_postal_code(value),
    }
}

fn require_length(
    value: &str,
    min: usize,
    max: usize,
    message: &'static str,
) -> Result<(), &'static str> {
    let len = value.chars().count();
    if len < min || len > max { Err(message) } else { Ok(()) }
}

fn validate_email(value: &str) -> Result<(), &'static str> {
    const MESSAGE: &str = "Enter a valid email address";

    let Some((local, domain)) = value.split_once('@') else {
        return Err(MESSAGE);
    };

    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || value.contains(char::is_whitespace)
    {
        return Err(MESSAGE);
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(MESSAGE);
    };

    if host.is_empty() || tld.len() < 2 {
        return Err(MESSAGE);
    }

    Ok(())
}

/// Indian mobile numbers: exactly 10 digits, starting with 6-9.
fn validate_mobile(value: &str) -> Result<(), &'static str> {
    const MESSAGE: &str = "Enter a valid 10-digit mobile number";

    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return Err(MESSAGE);
    };

    if !matches!(first, '6'..='9') {
        return Err(MESSAGE);
    }

    if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(MESSAGE);
    }

    Ok(())
}

/// GSTIN layout: `NN AAAAA NNNN A X Z X` where `N` is a digit, `A` an
/// uppercase letter, and `X` an uppercase alphanumeric.
fn validate_gst(value: &str) -> Result<(), &'static str> {
    const MESSAGE: &str = "Enter a valid 15-character GST number";

    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 15 {
        return Err(MESSAGE);
    }

    let digit = |c: char| c.is_ascii_digit();
    let upper = |c: char| c.is_ascii_uppercase();
    let upper_alnum = |c: char| c.is_ascii_uppercase() || c.is_ascii_digit();

    let ok = chars[..2].iter().all(|&c| digit(c))
        && chars[2..7].iter().all(|&c| upper(c))
        && chars[7..11].iter().all(|&c| digit(c))
        && upper(chars[11])
        && upper_alnum(chars[12])
        && chars[13] == 'Z'
        && upper_alnum(chars[14]);

    if ok { Ok(()) } else { Err(MESSAGE) }
}

/// IFSC layout: 4 uppercase letters, a literal `0`, 6 uppercase alphanumerics.
fn validate_ifsc(value: &str) -> Result<(), &'static str> {
    const MESSAGE: &str = "Enter a valid IFSC code";

    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 11 {
        return Err(MESSAGE);
    }

    let ok = chars[..4].iter().all(|&c| c.is_ascii_uppercase())
        && chars[4] == '0'
        && chars[5..].iter().all(|&c| c.is_ascii_uppercase() || c.is_ascii_digit());

    if ok { Ok(()) } else { Err(MESSAGE) }
}

/// Network subscriber ids are lowercase dotted labels, e.g. `seller.example.in`.
fn validate_subscriber_id(value: &str) -> Result<(), &'static str> {
    const MESSAGE: &str = "Enter a lowercase dotted subscriber id";

    if !value.contains('.') {
        return Err(MESSAGE);
    }

    let labels_ok = value.split('.').all(|label| {
        !label.is_empty()
            && label.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    });

    if labels_ok { Ok(()) } else { Err(MESSAGE) }
}

fn validate_url(value: &str) -> Result<(), &'static str> {
    const MESSAGE: &str = "Enter a valid http(s) URL";

    let rest = value.strip_prefix("https://").or_else(|| value.strip_prefix("http://"));

    match rest {
        Some(rest) if !rest.is_empty() && !rest.contains(char::is_whitespace) => Ok(()),
        _ => Err(MESSAGE),
    }
}

/// Indian PIN codes: 6 digits, no leading zero.
fn validate_postal_code(value: &str) -> Result<(), &'static str> {
    const MESSAGE: &str = "Enter a valid 6-digit postal code";

    if value.len() == 6
        && !value.starts_with('0')
        && value.chars().all(|c| c.is_ascii_digit())
    {
        Ok(())
    } else {
        Err(MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_rules() {
        assert!(validate_field(Field::Mobile, "9876543210").is_ok());
        assert!(validate_field(Field::Mobile, "6000000000").is_ok());
        assert!(validate_field(Field::Mobile, "5876543210").is_err());
        assert!(validate_field(Field::Mobile, "98765").is_err());
        assert!(validate_field(Field::Mobile, "98765432100").is_err());
        assert!(validate_field(Field::Mobile, "98765o3210").is_err());
    }

    #[test]
    fn gst_rules() {
        assert!(validate_field(Field::GstNumber, "27ABCDE1234F1Z5").is_ok());
        assert!(validate_field(Field::GstNumber, "27abcde1234F1Z5").is_err());
        assert!(validate_field(Field::GstNumber, "27ABCDE1234F1X5").is_err());
        assert!(validate_field(Field::GstNumber, "27ABCDE1234F1Z").is_err());
    }

    #[test]
    fn ifsc_rules() {
        assert!(validate_field(Field::BankIfsc, "HDFC0001234").is_ok());
        assert!(validate_field(Field::BankIfsc, "HDFC1001234").is_err());
        assert!(validate_field(Field::BankIfsc, "HDF00012345").is_err());
        assert!(validate_field(Field::BankIfsc, "HDFC000123").is_err());
    }

    #[test]
    fn postal_code_rules() {
        assert!(validate_field(Field::PostalCode, "560001").is_ok());
        assert!(validate_field(Field::PostalCode, "060001").is_err());
        assert!(validate_field(Field::PostalCode, "56001").is_err());
        assert!(validate_field(Field::PostalCode, "56000a").is_err());
    }

    #[test]
    fn subscriber_id_rules() {
        assert!(validate_field(Field::SubscriberId, "seller.example.in").is_ok());
        assert!(validate_field(Field::SubscriberId, "seller-1.ondc.org").is_ok());
        assert!(validate_field(Field::SubscriberId, "Seller.example").is_err());
        assert!(validate_field(Field::SubscriberId, "nodots").is_err());
        assert!(validate_field(Field::SubscriberId, "double..dot").is_err());
    }

    #[test]
    fn email_rules() {
        assert!(validate_field(Field::Email, "asha@example.com").is_ok());
        assert!(validate_field(Field::Email, "no-at-sign").is_err());
        assert!(validate_field(Field::Email, "a@b").is_err());
        assert!(validate_field(Field::Email, "a b@example.com").is_err());
    }

    #[test]
    fn url_rules() {
        assert!(validate_field(Field::SubscriberUrl, "https://seller.example.in").is_ok());
        assert!(validate_field(Field::SubscriberUrl, "http://localhost:8080").is_ok());
        assert!(validate_field(Field::SubscriberUrl, "ftp://seller.example.in").is_err());
        assert!(validate_field(Field::SubscriberUrl, "https://").is_err());
    }

    #[test]
    fn values_are_trimmed_before_validation() {
        assert!(validate_field(Field::Mobile, " 9876543210 ").is_ok());
        assert!(validate_field(Field::FullName, "   ").is_err());
    }
}
