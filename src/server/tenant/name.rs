use std::fmt;

use crate::server::error::tenant::ProvisioningError;

const MAX_NAME_LEN: usize = 64;

/// Replaces spaces in a guild display name with `+` to form its database name.
pub fn derive_database_name(guild_name: &str) -> String {
    guild_name.replace(' ', "+")
}

/// A validated logical database name.
///
/// Only ASCII alphanumerics and `+ - _ .` are accepted, so a name can never carry a
/// path separator into the storage directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseName(String);

impl DatabaseName {
    pub fn parse(name: &str) -> Result<Self, ProvisioningError> {
        let invalid = |reason| ProvisioningError::InvalidDatabaseName {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(invalid("name is longer than 64 bytes"));
        }
        if name.starts_with('.') {
            return Err(invalid("name starts with '.'"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '_' | '.'))
        {
            return Err(invalid("name contains a character outside [A-Za-z0-9+-_.]"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
