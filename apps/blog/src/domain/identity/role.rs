use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Author,
    #[default]
    Reader,
}

/// Something a caller may be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Create, edit, publish and delete articles.
    WriteArticles,
    /// Change blog title, subtitle and author line.
    ManageSettings,
    /// Read, like and comment on published articles.
    Interact,
}

impl Role {
    pub fn allows(self, capability: Capability) -> bool {
        match capability {
            Capability::WriteArticles | Capability::ManageSettings => self == Role::Author,
            Capability::Interact => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Author => "author",
            Role::Reader => "reader",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
