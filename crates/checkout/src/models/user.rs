//! Signed-in user profile.

use serde::{Deserialize, Serialize};

use quickcart_core::UserId;

/// Profile of the signed-in buyer, used to pre-fill the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    /// The user the server renders into every page until real accounts exist.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            id: UserId::new(1),
            name: "Donald McDuck".to_string(),
            email: "donald@mcduck.com".to_string(),
            first_name: "Donald".to_string(),
            last_name: "McDuck".to_string(),
        }
    }
}
