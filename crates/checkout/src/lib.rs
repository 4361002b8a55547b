//! `QuickCart` checkout engine.
//!
//! Cart, delivery selection and step stores, the validation and sanitization
//! layer, pricing, mock catalog and placement services, and the
//! [`CheckoutSession`] that ties them together.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickcart_checkout::{CheckoutSession, MockApi, load_catalog};
//! use quickcart_checkout::stores::{CartStore, CheckoutSelectionStore, CheckoutStepStore};
//!
//! let api = MockApi::default();
//! let (mut cart, mut selection, mut steps) = Default::default();
//! load_catalog(&api, &mut cart, &mut selection).await?;
//!
//! let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, api);
//! session.select_city(Some(CityId::new(1)));
//! session.select_delivery_tier(Some(DeliveryTier::Regular))?;
//! let order = session.place_order().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod security;
pub mod services;
pub mod session;
pub mod stores;
pub mod validation;

pub use config::{CheckoutConfig, ConfigError, RateLimitConfig, StepNavigation};
pub use error::{CheckoutError, NavigationError, SelectionError};
pub use pricing::{DeliveryOptionView, PriceBreakdown, delivery_option_views};
pub use services::{ApiError, ApiResponse, Catalog, MockApi, OrderPlacement};
pub use session::{CheckoutSession, load_catalog};
pub use validation::{ValidationResult, validate_checkout_form, validate_shipping_details};
