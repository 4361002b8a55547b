//! Draft checkout form.

use serde::{Deserialize, Serialize};

use super::user::UserProfile;

/// Buyer contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Delivery address. The city is chosen separately on the delivery step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    pub zip_code: String,
}

/// The form a buyer fills in across the checkout steps.
///
/// Lives only as long as its checkout session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub customer_info: CustomerInfo,
    pub address: Address,
}

impl CheckoutForm {
    /// A blank form with name and email taken from the signed-in user.
    #[must_use]
    pub fn prefilled(user: Option<&UserProfile>) -> Self {
        let customer_info = user.map_or_else(CustomerInfo::default, |user| CustomerInfo {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: String::new(),
        });

        Self {
            customer_info,
            address: Address::default(),
        }
    }
}
