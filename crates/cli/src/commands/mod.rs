//! Subcommand implementations.

pub mod catalog;
pub mod checkout;
pub mod inspect;

use quickcart_checkout::models::{Address, CheckoutForm, CustomerInfo};
use quickcart_checkout::{ApiError, CheckoutError, NavigationError, SelectionError};
use quickcart_core::CityId;
use serde::Serialize;
use thiserror::Error;

/// Errors that can end a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Catalog error: {0}")]
    Api(#[from] ApiError),

    #[error("Unknown city: {0}")]
    UnknownCity(CityId),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Cannot continue: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Checkout failed: {0}")]
    Checkout(#[from] CheckoutError),

    #[error("{0} field(s) failed validation")]
    Invalid(usize),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Customer and address fields as given on the command line.
#[derive(Debug, Default)]
pub struct FormInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub apartment: Option<String>,
    pub zip_code: Option<String>,
}

impl FormInput {
    /// Overlay the given fields on `base`; absent fields keep their value.
    pub fn apply_to(self, base: &mut CheckoutForm) {
        let CustomerInfo {
            first_name,
            last_name,
            email,
            phone,
        } = &mut base.customer_info;
        overlay(first_name, self.first_name);
        overlay(last_name, self.last_name);
        overlay(email, self.email);
        overlay(phone, self.phone);

        let Address {
            street,
            apartment,
            zip_code,
        } = &mut base.address;
        overlay(street, self.street);
        overlay(zip_code, self.zip_code);
        if self.apartment.is_some() {
            *apartment = self.apartment;
        }
    }

    /// Whether any phone or address field was given.
    pub const fn has_shipping(&self) -> bool {
        self.phone.is_some()
            || self.street.is_some()
            || self.apartment.is_some()
            || self.zip_code.is_some()
    }
}

fn overlay(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Print `value` as pretty JSON.
#[allow(clippy::print_stdout)]
pub fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
