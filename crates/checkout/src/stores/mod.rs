//! Session state stores.
//!
//! Each store exclusively owns one slice of checkout state. Stores are plain
//! values: create one per session and lend it to whatever needs it.

pub mod cart;
pub mod selection;
pub mod steps;
pub mod user;

pub use cart::CartStore;
pub use selection::CheckoutSelectionStore;
pub use steps::CheckoutStepStore;
pub use user::UserStore;
