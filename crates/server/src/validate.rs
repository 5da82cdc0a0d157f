//! Field validation rule engine shared by all entity kinds.
//!
//! Each entity kind declares an ordered table of [`Rule`]s that is evaluated
//! against the raw submitted field values. Rules run in table order and the
//! first failure determines the reported [`ValidationError`] - errors are
//! never aggregated. Numeric rules are a two-stage pipeline: parse the raw
//! string (failure is a format error) then range-check the value (failure is
//! a range error).
//!
//! Validation always operates on the raw string representation; builders
//! normalize to typed values only after their rule table passes.

use rust_decimal::Decimal;
use thiserror::Error;

use shopdesk_core::{AccessCode, Email, Phone};

/// A field-level validation failure.
///
/// The reason text is surfaced to the client verbatim in the 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationError {
    /// Name of the field that failed.
    pub field: &'static str,
    /// Why the field was rejected.
    pub reason: &'static str,
}

impl ValidationError {
    #[must_use]
    pub const fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// Raw string view over a submitted entity.
///
/// Implemented by the request-body structs so one engine can validate every
/// entity kind. `None` means the field was absent from the submission.
pub trait Fields {
    /// Look up a submitted field by name.
    fn field(&self, name: &str) -> Option<&str>;
}

/// Parse stage of a numeric rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Whole number (`i32`).
    Integer,
    /// Fixed-point decimal.
    Decimal,
}

/// Range stage of a numeric rule, applied after a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberRange {
    /// Value must be >= 0.
    NonNegative,
    /// Value must be > 0.
    Positive,
    /// Value must be within [0, 100].
    Percent,
}

/// A single validation rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Every named field must be present and non-empty.
    Required {
        fields: &'static [&'static str],
        reason: &'static str,
    },
    /// `field` and `confirm` must hold identical values (two absent fields
    /// compare equal; the required-fields rule catches that case later).
    Matching {
        field: &'static str,
        confirm: &'static str,
        reason: &'static str,
    },
    /// Field must be an RFC-lite email address.
    EmailFormat {
        field: &'static str,
        reason: &'static str,
    },
    /// Field must start with an ASCII digit.
    StartsWithDigit {
        field: &'static str,
        reason: &'static str,
    },
    /// Field must contain at least `min` characters.
    MinLength {
        field: &'static str,
        min: usize,
        reason: &'static str,
    },
    /// Field must be exactly ten ASCII digits.
    TenDigits {
        field: &'static str,
        reason: &'static str,
    },
    /// Two-stage numeric check: parse, then range. Optional rules are
    /// skipped when the field is absent or empty.
    Number {
        field: &'static str,
        kind: NumberKind,
        range: NumberRange,
        optional: bool,
        format_reason: &'static str,
        range_reason: &'static str,
    },
}

/// Evaluate a rule table against a submitted entity.
///
/// # Errors
///
/// Returns the error from the first rule that fails.
pub fn check<F: Fields + ?Sized>(rules: &[Rule], entity: &F) -> Result<(), ValidationError> {
    for rule in rules {
        apply(rule, entity)?;
    }
    Ok(())
}

fn apply<F: Fields + ?Sized>(rule: &Rule, entity: &F) -> Result<(), ValidationError> {
    match rule {
        Rule::Required { fields, reason } => {
            for name in fields.iter().copied() {
                if entity.field(name).is_none_or(str::is_empty) {
                    return Err(ValidationError::new(name, reason));
                }
            }
            Ok(())
        }
        Rule::Matching {
            field,
            confirm,
            reason,
        } => {
            if entity.field(field) == entity.field(confirm) {
                Ok(())
            } else {
                Err(ValidationError::new(field, reason))
            }
        }
        Rule::EmailFormat { field, reason } => {
            let raw = entity.field(field).unwrap_or_default();
            Email::parse(raw)
                .map(drop)
                .map_err(|_| ValidationError::new(field, reason))
        }
        Rule::StartsWithDigit { field, reason } => {
            let raw = entity.field(field).unwrap_or_default();
            AccessCode::parse(raw)
                .map(drop)
                .map_err(|_| ValidationError::new(field, reason))
        }
        Rule::MinLength { field, min, reason } => {
            let raw = entity.field(field).unwrap_or_default();
            if raw.chars().count() < *min {
                Err(ValidationError::new(field, reason))
            } else {
                Ok(())
            }
        }
        Rule::TenDigits { field, reason } => {
            let raw = entity.field(field).unwrap_or_default();
            Phone::parse(raw)
                .map(drop)
                .map_err(|_| ValidationError::new(field, reason))
        }
        Rule::Number {
            field,
            kind,
            range,
            optional,
            format_reason,
            range_reason,
        } => {
            let raw = match entity.field(field) {
                Some(raw) if !raw.is_empty() => raw,
                _ if *optional => return Ok(()),
                _ => return Err(ValidationError::new(field, format_reason)),
            };
            let in_range = match kind {
                NumberKind::Integer => {
                    integer_in_range(*range, parse_integer(field, raw, format_reason)?)
                }
                NumberKind::Decimal => {
                    decimal_in_range(*range, parse_decimal(field, raw, format_reason)?)
                }
            };
            if in_range {
                Ok(())
            } else {
                Err(ValidationError::new(field, range_reason))
            }
        }
    }
}

/// Parse a raw field as a decimal.
///
/// Also used by builders to normalize values after their rule table passes,
/// so format errors carry the same reason either way.
///
/// # Errors
///
/// Returns a `ValidationError` with `format_reason` if the value does not
/// parse.
pub fn parse_decimal(
    field: &'static str,
    raw: &str,
    format_reason: &'static str,
) -> Result<Decimal, ValidationError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::new(field, format_reason))
}

/// Parse a raw field as a whole number.
///
/// # Errors
///
/// Returns a `ValidationError` with `format_reason` if the value does not
/// parse.
pub fn parse_integer(
    field: &'static str,
    raw: &str,
    format_reason: &'static str,
) -> Result<i32, ValidationError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::new(field, format_reason))
}

const fn integer_in_range(range: NumberRange, value: i32) -> bool {
    match range {
        NumberRange::NonNegative => value >= 0,
        NumberRange::Positive => value > 0,
        NumberRange::Percent => value >= 0 && value <= 100,
    }
}

fn decimal_in_range(range: NumberRange, value: Decimal) -> bool {
    match range {
        NumberRange::NonNegative => value >= Decimal::ZERO,
        NumberRange::Positive => value > Decimal::ZERO,
        NumberRange::Percent => value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED,
    }
}

// =============================================================================
// Rule tables
// =============================================================================

/// Inventory item creation rules.
pub const INVENTORY_RULES: &[Rule] = &[
    Rule::Required {
        fields: &["item_name", "price", "stock"],
        reason: "Item name, price, and stock are required",
    },
    Rule::Number {
        field: "price",
        kind: NumberKind::Decimal,
        range: NumberRange::NonNegative,
        optional: false,
        format_reason: "Invalid price format",
        range_reason: "Price must be a positive number",
    },
    Rule::Number {
        field: "stock",
        kind: NumberKind::Integer,
        range: NumberRange::NonNegative,
        optional: false,
        format_reason: "Invalid stock format",
        range_reason: "Stock must be a positive number",
    },
    Rule::Number {
        field: "discount",
        kind: NumberKind::Decimal,
        range: NumberRange::Percent,
        optional: true,
        format_reason: "Invalid discount format",
        range_reason: "Discount must be between 0 and 100",
    },
];

/// Inventory partial-update rules: the creation numeric checks, applied only
/// to the fields actually present in the submission.
pub const INVENTORY_UPDATE_RULES: &[Rule] = &[
    Rule::Number {
        field: "price",
        kind: NumberKind::Decimal,
        range: NumberRange::NonNegative,
        optional: true,
        format_reason: "Invalid price format",
        range_reason: "Price must be a positive number",
    },
    Rule::Number {
        field: "stock",
        kind: NumberKind::Integer,
        range: NumberRange::NonNegative,
        optional: true,
        format_reason: "Invalid stock format",
        range_reason: "Stock must be a positive number",
    },
    Rule::Number {
        field: "discount",
        kind: NumberKind::Decimal,
        range: NumberRange::Percent,
        optional: true,
        format_reason: "Invalid discount format",
        range_reason: "Discount must be between 0 and 100",
    },
];

/// Order placement rules.
pub const ORDER_RULES: &[Rule] = &[
    Rule::Required {
        fields: &[
            "item_id",
            "item_name",
            "quantity",
            "total_price",
            "customer_name",
            "customer_phone",
        ],
        reason: "Missing required fields",
    },
    Rule::Number {
        field: "quantity",
        kind: NumberKind::Integer,
        range: NumberRange::Positive,
        optional: false,
        format_reason: "Invalid quantity format",
        range_reason: "Quantity must be positive",
    },
    Rule::Number {
        field: "total_price",
        kind: NumberKind::Decimal,
        range: NumberRange::Positive,
        optional: false,
        format_reason: "Invalid price format",
        range_reason: "Total price must be positive",
    },
    Rule::TenDigits {
        field: "customer_phone",
        reason: "Phone number must be exactly 10 digits",
    },
];

/// Admin registration rules.
pub const ADMIN_RULES: &[Rule] = &[
    Rule::Matching {
        field: "password",
        confirm: "confirm_password",
        reason: "Passwords do not match",
    },
    Rule::EmailFormat {
        field: "email",
        reason: "Invalid email format",
    },
    Rule::StartsWithDigit {
        field: "access_code",
        reason: "Access code must start with a number",
    },
    Rule::Required {
        fields: &[
            "full_name",
            "organization_name",
            "email",
            "password",
            "access_code",
        ],
        reason: "All fields are required",
    },
    Rule::MinLength {
        field: "password",
        min: 6,
        reason: "Password must be at least 6 characters long",
    },
];

/// User registration rules.
pub const USER_RULES: &[Rule] = &[
    Rule::Matching {
        field: "password",
        confirm: "confirm_password",
        reason: "Passwords do not match",
    },
    Rule::EmailFormat {
        field: "email",
        reason: "Invalid email format",
    },
    Rule::Required {
        fields: &["full_name", "email", "password"],
        reason: "All fields are required",
    },
    Rule::MinLength {
        field: "password",
        min: 6,
        reason: "Password must be at least 6 characters long",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFields(Vec<(&'static str, &'static str)>);

    impl Fields for TestFields {
        fn field(&self, name: &str) -> Option<&str> {
            self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
        }
    }

    fn inventory(price: &'static str, stock: &'static str) -> TestFields {
        TestFields(vec![
            ("item_name", "Widget"),
            ("price", price),
            ("stock", stock),
        ])
    }

    #[test]
    fn test_zero_passes_presence_and_range() {
        // A literal "0" is non-empty, so it passes the required check, and
        // zero satisfies the non-negative range.
        assert!(check(INVENTORY_RULES, &inventory("0", "0")).is_ok());
    }

    #[test]
    fn test_missing_required_field_reported_first() {
        let entity = TestFields(vec![("item_name", "Widget"), ("stock", "bad")]);
        let err = check(INVENTORY_RULES, &entity).unwrap_err();
        assert_eq!(err.field, "price");
        assert_eq!(err.reason, "Item name, price, and stock are required");
    }

    #[test]
    fn test_format_error_distinct_from_range_error() {
        let err = check(INVENTORY_RULES, &inventory("abc", "5")).unwrap_err();
        assert_eq!(err.reason, "Invalid price format");

        let err = check(INVENTORY_RULES, &inventory("-1", "5")).unwrap_err();
        assert_eq!(err.reason, "Price must be a positive number");
    }

    #[test]
    fn test_stock_must_be_whole_number() {
        let err = check(INVENTORY_RULES, &inventory("1.50", "2.5")).unwrap_err();
        assert_eq!(err.reason, "Invalid stock format");
    }

    #[test]
    fn test_discount_skipped_when_absent_or_empty() {
        assert!(check(INVENTORY_RULES, &inventory("1", "1")).is_ok());

        let mut fields = inventory("1", "1");
        fields.0.push(("discount", ""));
        assert!(check(INVENTORY_RULES, &fields).is_ok());
    }

    #[test]
    fn test_discount_validated_when_present() {
        let mut fields = inventory("1", "1");
        fields.0.push(("discount", "101"));
        let err = check(INVENTORY_RULES, &fields).unwrap_err();
        assert_eq!(err.reason, "Discount must be between 0 and 100");
    }

    #[test]
    fn test_update_rules_ignore_missing_fields() {
        let entity = TestFields(vec![("stock", "7")]);
        assert!(check(INVENTORY_UPDATE_RULES, &entity).is_ok());

        let entity = TestFields(vec![("stock", "-7")]);
        let err = check(INVENTORY_UPDATE_RULES, &entity).unwrap_err();
        assert_eq!(err.reason, "Stock must be a positive number");
    }

    fn order(phone: &'static str) -> TestFields {
        TestFields(vec![
            ("item_id", "abc"),
            ("item_name", "Widget"),
            ("quantity", "2"),
            ("total_price", "19.99"),
            ("customer_name", "Jo"),
            ("customer_phone", phone),
        ])
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        assert!(check(ORDER_RULES, &order("0123456789")).is_ok());

        for bad in ["123456789", "12345678901", "12345abcde", ""] {
            let err = check(ORDER_RULES, &order(bad)).unwrap_err();
            assert_eq!(err.reason, "Phone number must be exactly 10 digits");
        }
    }

    #[test]
    fn test_quantity_must_be_strictly_positive() {
        let mut fields = order("0123456789");
        fields.0[2] = ("quantity", "0");
        let err = check(ORDER_RULES, &fields).unwrap_err();
        assert_eq!(err.reason, "Quantity must be positive");
    }

    fn admin() -> TestFields {
        TestFields(vec![
            ("full_name", "Ada"),
            ("organization_name", "Acme"),
            ("email", "ada@acme.com"),
            ("password", "hunter22"),
            ("confirm_password", "hunter22"),
            ("access_code", "42-acme"),
        ])
    }

    #[test]
    fn test_admin_rules_pass() {
        assert!(check(ADMIN_RULES, &admin()).is_ok());
    }

    #[test]
    fn test_password_mismatch_reported_before_anything_else() {
        // Even with every other field invalid, the mismatch wins.
        let entity = TestFields(vec![
            ("email", "not-an-email"),
            ("password", "a"),
            ("confirm_password", "b"),
        ]);
        let err = check(ADMIN_RULES, &entity).unwrap_err();
        assert_eq!(err.reason, "Passwords do not match");
    }

    #[test]
    fn test_admin_email_checked_before_required() {
        let mut entity = admin();
        entity.0[2] = ("email", "bad-email");
        entity.0[0] = ("full_name", "");
        let err = check(ADMIN_RULES, &entity).unwrap_err();
        assert_eq!(err.reason, "Invalid email format");
    }

    #[test]
    fn test_access_code_must_start_with_digit() {
        let mut entity = admin();
        entity.0[5] = ("access_code", "acme-42");
        let err = check(ADMIN_RULES, &entity).unwrap_err();
        assert_eq!(err.reason, "Access code must start with a number");
    }

    #[test]
    fn test_short_password_rejected() {
        let mut entity = admin();
        entity.0[3] = ("password", "abc12");
        entity.0[4] = ("confirm_password", "abc12");
        let err = check(ADMIN_RULES, &entity).unwrap_err();
        assert_eq!(err.reason, "Password must be at least 6 characters long");
    }

    #[test]
    fn test_user_rules() {
        let entity = TestFields(vec![
            ("full_name", "Sam"),
            ("email", "sam@example.com"),
            ("password", "secret1"),
            ("confirm_password", "secret1"),
        ]);
        assert!(check(USER_RULES, &entity).is_ok());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("price", "Invalid price format");
        assert_eq!(err.to_string(), "Invalid price format");
    }
}
