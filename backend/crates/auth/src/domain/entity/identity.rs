//! Identity Entity
//!
//! Who an identity source says the caller is. Either field may be missing
//! depending on the source: the wallet knows a username, the hosted provider
//! knows an email.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(username: Option<String>, email: Option<String>) -> Self {
        Self {
            username: non_blank(username),
            email: non_blank(email),
        }
    }

    pub fn from_username(username: impl Into<String>) -> Self {
        Self::new(Some(username.into()), None)
    }

    pub fn from_email(email: impl Into<String>) -> Self {
        Self::new(None, Some(email.into()))
    }

    /// Username first, then email
    pub fn preferred_name(&self) -> Option<&str> {
        self.username.as_deref().or(self.email.as_deref())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
