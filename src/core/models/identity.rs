//! Committer identity

use serde::Serialize;

use crate::error::{Error, Result};

/// The committer, as configured in git
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// `user.name`
    pub name: String,
    /// `user.email`
    pub email: String,
}

impl Identity {
    /// Build an identity, rejecting empty name or email
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();

        if name.is_empty() {
            return Err(Error::IdentityUnset("user.name"));
        }
        if email.is_empty() {
            return Err(Error::IdentityUnset("user.email"));
        }

        Ok(Self { name, email })
    }
}

/// Renders as `name<email>`, no space before `<`
impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}<{}>", self.name, self.email)
    }
}
