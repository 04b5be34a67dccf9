//! # SpecDoc Validation
//!
//! Validation messages for SpecDoc. A validation-kind enum declares the
//! message for each of its variants with [`validation_messages!`]; the
//! messages are then used when reporting failures of that kind, in place of a
//! generic "validation failed" text.
//!
//! ## Example
//!
//! ```rust,ignore
//! use specdoc_validate::prelude::*;
//!
//! validation_messages! {
//!     pub enum AccountRule {
//!         Username => "Usernames are 3 to 20 letters or digits",
//!         Referral,
//!     }
//! }
//!
//! let error = AccountRule::Username.field_error("username");
//! assert_eq!(error.message, "Usernames are 3 to 20 letters or digits");
//!
//! validate_value("age", "thirty", &[ValidationTypes::Integer])?;
//! ```
//!
//! ## Error Format
//!
//! ```json
//! {
//!   "error": {
//!     "type": "validation_error",
//!     "message": "Validation failed",
//!     "fields": [
//!       {"field": "age", "code": "Integer", "message": "The value must be a whole number"}
//!     ]
//!   }
//! }
//! ```

mod error;
mod message;
mod types;

pub use error::{FieldError, ValidationError};
pub use message::ValidationMessage;
pub use types::{validate_value, ValidationTypes};

/// Prelude module for validation
pub mod prelude {
    pub use crate::error::{FieldError, ValidationError};
    pub use crate::message::ValidationMessage;
    pub use crate::types::{validate_value, ValidationTypes};
    pub use crate::validation_messages;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_to_json() {
        let error = validate_value("age", "thirty", &[ValidationTypes::Integer]).unwrap_err();

        let json = serde_json::to_string_pretty(&error).unwrap();
        assert!(json.contains("validation_error"));
        assert!(json.contains("The value must be a whole number"));

        let parsed: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, error);
    }
}
