//! Error types for the checkout flow.
//!
//! Field validation never produces these: it yields a
//! [`ValidationResult`](crate::validation::ValidationResult). Errors here are
//! refused operations, reported to the caller without changing any state.

use std::collections::BTreeMap;

use quickcart_core::{CheckoutStep, CityId, DeliveryTier};
use thiserror::Error;

use crate::services::ApiError;

/// A delivery selection the store refused to record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The selected city is not in the loaded city list.
    #[error("unknown city {0}")]
    UnknownCity(CityId),

    /// The tier is not offered in the selected city.
    #[error("{tier} delivery is not available in {city}")]
    TierUnavailable {
        /// City name.
        city: String,
        /// Requested tier.
        tier: DeliveryTier,
    },
}

/// A step change the navigation policy refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// An earlier step has not passed its own validation.
    #[error("complete the {blocking} step before opening {requested}")]
    StepIncomplete {
        /// Step the buyer tried to open.
        requested: CheckoutStep,
        /// First step that still fails validation.
        blocking: CheckoutStep,
        /// Per-field errors of the blocking step.
        errors: BTreeMap<String, String>,
    },
}

/// Errors from placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// City or delivery tier not chosen, or the city cannot be resolved.
    #[error("please select a city and delivery option")]
    MissingSelection,

    /// The stored selection is no longer valid.
    #[error("invalid selection: {0}")]
    Selection(#[from] SelectionError),

    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The buyer's details failed validation.
    #[error("invalid checkout form: {} field(s) failed", .0.len())]
    InvalidForm(BTreeMap<String, String>),

    /// Too many placements for this buyer.
    #[error("too many orders, please try again later")]
    RateLimited,

    /// The placement service refused or failed.
    #[error("order placement failed: {0}")]
    Placement(#[from] ApiError),
}
