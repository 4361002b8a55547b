//! Declarative form validation with sanitization.
//!
//! A [`ValidationRule`] describes one field. [`validate_field`] applies it in
//! a fixed order and stops at the first failing check:
//!
//! 1. sanitize (when the rule names a [`SanitizeKind`]); every later check and
//!    the returned value use the sanitized text
//! 2. `required`
//! 3. empty optional fields pass immediately
//! 4. `min_length` / `max_length`
//! 5. `pattern`
//! 6. `custom`
//!
//! Validation failures are values, never errors: callers render them inline.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::{CheckoutForm, CustomerInfo};
use crate::security::{self, SanitizeKind};

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("Invalid regex"));

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9\s\-]*$").expect("Invalid regex"));

/// Extra check run last; returns an error message on failure.
pub type CustomCheck = fn(&str) -> Option<String>;

/// Rules for one form field.
#[derive(Debug, Clone, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub custom: Option<CustomCheck>,
    pub sanitize: Option<SanitizeKind>,
}

impl ValidationRule {
    /// A rule that accepts anything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    #[must_use]
    pub fn custom(mut self, check: CustomCheck) -> Self {
        self.custom = Some(check);
        self
    }

    #[must_use]
    pub fn sanitize(mut self, kind: SanitizeKind) -> Self {
        self.sanitize = Some(kind);
        self
    }
}

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    pub is_valid: bool,
    pub error: Option<String>,
    pub sanitized_value: String,
}

impl FieldValidation {
    fn pass(sanitized_value: String) -> Self {
        Self {
            is_valid: true,
            error: None,
            sanitized_value,
        }
    }

    fn fail(error: String, sanitized_value: String) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
            sanitized_value,
        }
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    /// Error message per failing field.
    pub errors: BTreeMap<String, String>,
    /// Sanitized value per submitted field.
    pub sanitized_data: BTreeMap<String, String>,
}

impl ValidationResult {
    /// Error message for a field, if it failed.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Rules keyed by field name.
pub type FormRules = HashMap<&'static str, ValidationRule>;

/// Validate one value against one rule.
#[must_use]
pub fn validate_field(value: &str, rule: &ValidationRule, field_name: &str) -> FieldValidation {
    let sanitized = rule.sanitize.map_or_else(
        || value.to_string(),
        |kind| security::sanitize_user_input(value, kind),
    );

    let is_blank = sanitized.trim().is_empty();
    if rule.required && is_blank {
        return FieldValidation::fail(format!("{field_name} is required"), sanitized);
    }
    if is_blank {
        return FieldValidation::pass(sanitized);
    }

    let length = sanitized.chars().count();
    if let Some(min) = rule.min_length
        && length < min
    {
        return FieldValidation::fail(
            format!("{field_name} must be at least {min} characters"),
            sanitized,
        );
    }
    if let Some(max) = rule.max_length
        && length > max
    {
        return FieldValidation::fail(
            format!("{field_name} must be no more than {max} characters"),
            sanitized,
        );
    }

    if let Some(pattern) = &rule.pattern
        && !pattern.is_match(&sanitized)
    {
        return FieldValidation::fail(format!("{field_name} format is invalid"), sanitized);
    }

    if let Some(check) = rule.custom
        && let Some(error) = check(&sanitized)
    {
        return FieldValidation::fail(error, sanitized);
    }

    FieldValidation::pass(sanitized)
}

/// Validate every submitted field that has a rule.
///
/// Fields without a rule are copied to `sanitized_data` untouched.
#[must_use]
pub fn validate_form<'a>(
    data: impl IntoIterator<Item = (&'a str, &'a str)>,
    rules: &FormRules,
) -> ValidationResult {
    let mut errors = BTreeMap::new();
    let mut sanitized_data = BTreeMap::new();

    for (field, value) in data {
        let Some(rule) = rules.get(field) else {
            sanitized_data.insert(field.to_string(), value.to_string());
            continue;
        };

        let outcome = validate_field(value, rule, field);
        if let Some(error) = outcome.error {
            errors.insert(field.to_string(), error);
        }
        sanitized_data.insert(field.to_string(), outcome.sanitized_value);
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        sanitized_data,
    }
}

// =============================================================================
// Checkout rules
// =============================================================================

fn name_rule(check: CustomCheck) -> ValidationRule {
    ValidationRule::new()
        .required()
        .min_length(1)
        .max_length(security::MAX_NAME_LENGTH)
        .sanitize(SanitizeKind::Name)
        .custom(check)
}

/// Rule for the buyer's first name.
#[must_use]
pub fn first_name_rule() -> ValidationRule {
    name_rule(|value| {
        (!security::validate_name(value)).then(|| {
            "First name can only contain letters, spaces, hyphens, and apostrophes".to_string()
        })
    })
}

/// Rule for the buyer's last name.
#[must_use]
pub fn last_name_rule() -> ValidationRule {
    name_rule(|value| {
        (!security::validate_name(value)).then(|| {
            "Last name can only contain letters, spaces, hyphens, and apostrophes".to_string()
        })
    })
}

/// Rule for the buyer's email.
#[must_use]
pub fn email_rule() -> ValidationRule {
    ValidationRule::new()
        .required()
        .max_length(quickcart_core::Email::MAX_LENGTH)
        .sanitize(SanitizeKind::Email)
        .custom(|value| {
            (!security::validate_email(value))
                .then(|| "Please enter a valid email address".to_string())
        })
}

/// Rule for the buyer's phone number.
#[must_use]
pub fn phone_rule() -> ValidationRule {
    ValidationRule::new()
        .required()
        .min_length(7)
        .max_length(20)
        .sanitize(SanitizeKind::Phone)
        .pattern(PHONE_RE.clone())
}

/// Rule for the street line of the address.
#[must_use]
pub fn street_rule() -> ValidationRule {
    ValidationRule::new()
        .required()
        .max_length(100)
        .sanitize(SanitizeKind::Text)
}

/// Rule for the optional apartment line.
#[must_use]
pub fn apartment_rule() -> ValidationRule {
    ValidationRule::new()
        .max_length(50)
        .sanitize(SanitizeKind::Text)
}

/// Rule for the postal code.
#[must_use]
pub fn zip_code_rule() -> ValidationRule {
    ValidationRule::new()
        .required()
        .min_length(3)
        .max_length(10)
        .sanitize(SanitizeKind::Zip)
        .pattern(ZIP_RE.clone())
}

/// Validate the information step: first name, last name and email.
#[must_use]
pub fn validate_checkout_form(customer: &CustomerInfo) -> ValidationResult {
    let rules = FormRules::from([
        ("firstName", first_name_rule()),
        ("lastName", last_name_rule()),
        ("email", email_rule()),
    ]);

    validate_form(
        [
            ("firstName", customer.first_name.as_str()),
            ("lastName", customer.last_name.as_str()),
            ("email", customer.email.as_str()),
        ],
        &rules,
    )
}

/// Validate phone and address fields of the form.
#[must_use]
pub fn validate_shipping_details(form: &CheckoutForm) -> ValidationResult {
    let rules = FormRules::from([
        ("phone", phone_rule()),
        ("street", street_rule()),
        ("apartment", apartment_rule()),
        ("zipCode", zip_code_rule()),
    ]);

    validate_form(
        [
            ("phone", form.customer_info.phone.as_str()),
            ("street", form.address.street.as_str()),
            ("apartment", form.address.apartment.as_deref().unwrap_or("")),
            ("zipCode", form.address.zip_code.as_str()),
        ],
        &rules,
    )
}
