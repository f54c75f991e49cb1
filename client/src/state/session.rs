//! Signed-in user session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the layout header and any page that greets the user. Written only
//! by restoring it from storage or through `clear`; issuing or refreshing
//! the token is the API client's concern.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Profile fields shown in the shell chrome.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// The current browser session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    /// Bearer token issued at login.
    pub token: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// "First Last", trimmed; falls back to the email when both names are blank.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        let full = format!("{} {}", user.first_name.trim(), user.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            Some(user.email.clone()).filter(|e| !e.is_empty())
        } else {
            Some(full.to_owned())
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
