//! Checkout data models.
//!
//! Transient records owned by a checkout session: the draft form, the
//! signed-in user and the order built at placement time.

pub mod form;
pub mod order;
pub mod user;

pub use form::{Address, CheckoutForm, CustomerInfo};
pub use order::Order;
pub use user::UserProfile;
