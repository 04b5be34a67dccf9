//! Validation messages attached to enum variants.
//!
//! Each variant of a validation-kind enum may carry the message shown to
//! users when that kind of validation fails. The messages live in a static
//! table generated next to the enum by [`validation_messages!`], so reading
//! them needs no runtime lookup machinery.
//!
//! ```rust,ignore
//! use specdoc_validate::{validation_messages, ValidationMessage};
//!
//! validation_messages! {
//!     pub enum OrderRule {
//!         Quantity => "Quantity must be a positive whole number",
//!         Coupon,
//!     }
//! }
//!
//! assert_eq!(
//!     OrderRule::Quantity.message(),
//!     Some("Quantity must be a positive whole number")
//! );
//! assert_eq!(OrderRule::Coupon.message(), None);
//! ```

use crate::error::{generic_message, FieldError};
use std::borrow::Cow;

/// Static variant-to-message table for a validation-kind enum.
///
/// Implemented by [`validation_messages!`]; implementing it by hand is
/// possible but the table must list every variant.
pub trait ValidationMessage: Copy + PartialEq + 'static {
    /// Every variant with its code and optional message, in declaration order
    const TABLE: &'static [(Self, &'static str, Option<&'static str>)];

    /// Code of this variant (its name)
    fn code(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(variant, _, _)| *variant == self)
            .map(|(_, code, _)| *code)
            .unwrap_or("invalid")
    }

    /// Message declared for this variant, if any
    fn message(self) -> Option<&'static str> {
        Self::TABLE
            .iter()
            .find(|(variant, _, _)| *variant == self)
            .and_then(|(_, _, message)| *message)
    }

    /// Declared message, or the generic one naming `field`
    fn message_or_default(self, field: &str) -> String {
        self.message()
            .map(str::to_string)
            .unwrap_or_else(|| generic_message(field))
    }

    /// All variants in declaration order
    fn variants() -> impl Iterator<Item = Self> {
        Self::TABLE.iter().map(|(variant, _, _)| *variant)
    }

    /// Field error for a failure of this kind on `field`
    fn field_error(self, field: &str) -> FieldError {
        FieldError::new(field, self.code(), self.message_or_default(field))
    }

    /// Error for use inside `validator` custom functions.
    ///
    /// The message is left unset when none is declared, so `validator`
    /// falls back to its own text.
    fn to_validator_error(self) -> validator::ValidationError {
        let mut error = validator::ValidationError::new(self.code());
        error.message = self.message().map(Cow::Borrowed);
        error
    }
}

/// Declare a validation-kind enum together with its message table.
///
/// Variants are unit variants, optionally followed by `=> "message"`. The
/// enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`;
/// other derives may be added as attributes.
#[macro_export]
macro_rules! validation_messages {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $message:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $crate::ValidationMessage for $name {
            const TABLE: &'static [(
                Self,
                &'static str,
                ::core::option::Option<&'static str>,
            )] = &[
                $(
                    (
                        $name::$variant,
                        ::core::stringify!($variant),
                        $crate::__validation_message!($($message)?),
                    ),
                )*
            ];
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __validation_message {
    () => {
        ::core::option::Option::None
    };
    ($message:literal) => {
        ::core::option::Option::Some($message)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation_messages;

    validation_messages! {
        /// Rules used by the order form
        pub enum OrderRule {
            /// Whole number above zero
            Quantity => "Quantity must be a positive whole number",
            Coupon,
            Postcode => "Unknown postcode",
        }
    }

    #[test]
    fn declared_message_is_exposed() {
        assert_eq!(
            OrderRule::Quantity.message(),
            Some("Quantity must be a positive whole number")
        );
        assert_eq!(OrderRule::Postcode.message(), Some("Unknown postcode"));
    }

    #[test]
    fn undeclared_message_falls_back() {
        assert_eq!(OrderRule::Coupon.message(), None);
        assert_eq!(
            OrderRule::Coupon.message_or_default("coupon"),
            "Validation failed for field 'coupon'"
        );
    }

    #[test]
    fn codes_follow_variant_names() {
        assert_eq!(OrderRule::Quantity.code(), "Quantity");
        assert_eq!(
            OrderRule::variants().collect::<Vec<_>>(),
            vec![OrderRule::Quantity, OrderRule::Coupon, OrderRule::Postcode]
        );
    }

    #[test]
    fn field_error_uses_table() {
        let error = OrderRule::Postcode.field_error("zip");
        assert_eq!(error.field, "zip");
        assert_eq!(error.code, "Postcode");
        assert_eq!(error.message, "Unknown postcode");
    }

    #[test]
    fn validator_error_carries_message() {
        let error = OrderRule::Quantity.to_validator_error();
        assert_eq!(error.code, "Quantity");
        assert_eq!(
            error.message.as_deref(),
            Some("Quantity must be a positive whole number")
        );

        assert!(OrderRule::Coupon.to_validator_error().message.is_none());
    }
}
