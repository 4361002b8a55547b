//! Sanitization and validation commands.

use quickcart_checkout::models::CheckoutForm;
use quickcart_checkout::security::{SanitizeKind, sanitize_user_input};
use quickcart_checkout::{ValidationResult, validate_checkout_form, validate_shipping_details};

use super::{CliError, FormInput, print_json};

/// Print `input` as it would be stored for a field of `kind`.
#[allow(clippy::print_stdout)]
pub fn sanitize(kind: SanitizeKind, input: &str) {
    println!("{}", sanitize_user_input(input, kind));
}

/// Validate customer details, plus shipping details when any were given.
#[allow(clippy::print_stdout)]
pub fn validate(input: FormInput, json: bool) -> Result<(), CliError> {
    let check_shipping = input.has_shipping();
    let mut form = CheckoutForm::default();
    input.apply_to(&mut form);

    let mut result = validate_checkout_form(&form.customer_info);
    if check_shipping {
        merge(&mut result, validate_shipping_details(&form));
    }

    if json {
        print_json(&result)?;
    } else if result.is_valid {
        println!("All fields valid");
    } else {
        for (field, error) in &result.errors {
            println!("{field}: {error}");
        }
    }

    if result.is_valid {
        Ok(())
    } else {
        Err(CliError::Invalid(result.errors.len()))
    }
}

fn merge(into: &mut ValidationResult, other: ValidationResult) {
    into.errors.extend(other.errors);
    into.sanitized_data.extend(other.sanitized_data);
    into.is_valid = into.errors.is_empty();
}
