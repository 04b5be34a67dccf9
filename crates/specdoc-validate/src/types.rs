//! Built-in value formats.

use crate::error::{FieldError, ValidationError};
use crate::message::ValidationMessage;
use crate::validation_messages;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::trace;

validation_messages! {
    /// Formats a string value can be checked against
    pub enum ValidationTypes {
        Numeric => "The value must be a number",
        PositiveNumber => "The value must be a positive number",
        NegativeNumber => "The value must be a negative number",
        Integer => "The value must be a whole number",
        Decimal => "The value must be a decimal number",
        Alphabet => "The value may only contain letters",
        Alphanumeric => "The value may only contain letters and digits",
        EmailAddress => "The value must be an email address",
        Url => "The value must be an http, https or ftp URL",
        Ipv4 => "The value must be an IPv4 address",
    }
}

static COMPILED: OnceLock<HashMap<ValidationTypes, Regex>> = OnceLock::new();

impl ValidationTypes {
    /// Regular expression a value must match
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Numeric => r"^-?\d+(\.\d+)?$",
            Self::PositiveNumber => r"^(0*[1-9]\d*(\.\d+)?|0+\.\d*[1-9]\d*)$",
            Self::NegativeNumber => r"^-(0*[1-9]\d*(\.\d+)?|0+\.\d*[1-9]\d*)$",
            Self::Integer => r"^-?\d+$",
            Self::Decimal => r"^-?\d+\.\d+$",
            Self::Alphabet => r"^[A-Za-z]+$",
            Self::Alphanumeric => r"^[A-Za-z0-9]+$",
            Self::EmailAddress => {
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
            }
            Self::Url => r"^(https?|ftp)://[^\s/$.?#].[^\s]*$",
            Self::Ipv4 => {
                r"^((25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)$"
            }
        }
    }

    fn regex(self) -> &'static Regex {
        let compiled = COMPILED.get_or_init(|| {
            Self::variants()
                .map(|kind| {
                    let regex = Regex::new(kind.pattern()).expect("built-in pattern is valid");
                    (kind, regex)
                })
                .collect()
        });
        &compiled[&self]
    }

    /// Whether `value` has this format.
    pub fn is_match(self, value: &str) -> bool {
        self.regex().is_match(value)
    }

    /// Check `value`, for use as a `validator` custom function body.
    pub fn check(self, value: &str) -> Result<(), validator::ValidationError> {
        if self.is_match(value) {
            Ok(())
        } else {
            Err(self.to_validator_error())
        }
    }
}

/// Check `value` against every format in `types`.
///
/// One field error is reported per format the value does not match.
pub fn validate_value(
    field: &str,
    value: &str,
    types: &[ValidationTypes],
) -> Result<(), ValidationError> {
    let fields: Vec<FieldError> = types
        .iter()
        .filter(|kind| !kind.is_match(value))
        .map(|kind| {
            trace!(field, code = kind.code(), "Value rejected");
            kind.field_error(field)
        })
        .collect();

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn every_format_has_a_message() {
        for kind in ValidationTypes::variants() {
            assert!(kind.message().is_some(), "{:?} has no message", kind);
        }
    }

    #[test]
    fn numbers() {
        assert!(ValidationTypes::Numeric.is_match("-12.5"));
        assert!(!ValidationTypes::Numeric.is_match("12."));
        assert!(ValidationTypes::PositiveNumber.is_match("0.5"));
        assert!(!ValidationTypes::PositiveNumber.is_match("0"));
        assert!(ValidationTypes::NegativeNumber.is_match("-3"));
        assert!(!ValidationTypes::NegativeNumber.is_match("3"));
        assert!(ValidationTypes::Integer.is_match("42"));
        assert!(!ValidationTypes::Integer.is_match("4.2"));
        assert!(ValidationTypes::Decimal.is_match("4.2"));
        assert!(!ValidationTypes::Decimal.is_match("42"));
    }

    #[test]
    fn text_formats() {
        assert!(ValidationTypes::Alphabet.is_match("abcXYZ"));
        assert!(!ValidationTypes::Alphabet.is_match("abc1"));
        assert!(ValidationTypes::Alphanumeric.is_match("abc1"));
        assert!(!ValidationTypes::Alphanumeric.is_match("abc 1"));
        assert!(ValidationTypes::EmailAddress.is_match("user@example.com"));
        assert!(!ValidationTypes::EmailAddress.is_match("user@"));
        assert!(ValidationTypes::Url.is_match("https://example.com/docs"));
        assert!(!ValidationTypes::Url.is_match("example.com"));
        assert!(ValidationTypes::Ipv4.is_match("192.168.0.1"));
        assert!(!ValidationTypes::Ipv4.is_match("256.1.1.1"));
    }

    #[test]
    fn validate_value_reports_each_failed_format() {
        let result = validate_value(
            "code",
            "ab-1",
            &[ValidationTypes::Alphanumeric, ValidationTypes::Integer],
        );
        let error = result.unwrap_err();

        assert_eq!(error.len(), 2);
        assert_eq!(error.fields[0].code, "Alphanumeric");
        assert_eq!(
            error.fields[0].message,
            "The value may only contain letters and digits"
        );
        assert_eq!(error.fields[1].field, "code");
    }

    #[test]
    fn validate_value_accepts_matching_value() {
        assert!(validate_value("age", "30", &[ValidationTypes::Integer]).is_ok());
        assert!(validate_value("anything", "", &[]).is_ok());
    }

    #[test]
    fn check_bridges_to_validator() {
        assert!(ValidationTypes::EmailAddress.check("a@b.io").is_ok());

        let error = ValidationTypes::EmailAddress.check("nope").unwrap_err();
        assert_eq!(error.code, "EmailAddress");
        assert_eq!(
            error.message.as_deref(),
            Some("The value must be an email address")
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_integers_match_integer_and_numeric(n in any::<i64>()) {
            let value = n.to_string();
            prop_assert!(ValidationTypes::Integer.is_match(&value));
            prop_assert!(ValidationTypes::Numeric.is_match(&value));
            prop_assert!(!ValidationTypes::Decimal.is_match(&value));
        }

        #[test]
        fn prop_sign_formats_agree_with_value(n in 1u32..1_000_000) {
            let positive = n.to_string();
            let negative = format!("-{}", n);
            prop_assert!(ValidationTypes::PositiveNumber.is_match(&positive));
            prop_assert!(!ValidationTypes::NegativeNumber.is_match(&positive));
            prop_assert!(ValidationTypes::NegativeNumber.is_match(&negative));
            prop_assert!(!ValidationTypes::PositiveNumber.is_match(&negative));
        }
    }
}
