//! Signed-in user.

use crate::models::UserProfile;

/// Holds the signed-in buyer, if any.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    user: Option<UserProfile>,
}

impl UserStore {
    /// A store with nobody signed in.
    #[must_use]
    pub const fn new() -> Self {
        Self { user: None }
    }

    /// A store holding the server-rendered mock user.
    #[must_use]
    pub fn with_mock_user() -> Self {
        Self {
            user: Some(UserProfile::mock()),
        }
    }

    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    pub fn clear_user(&mut self) {
        self.user = None;
    }
}
