use serde::{Deserialize, Serialize};
use std::fmt;

/// Interactions that are recorded at most once per (user, article).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Read,
    Like,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 2] = [InteractionKind::Read, InteractionKind::Like];

    pub fn as_str(self) -> &'static str {
        match self {
            InteractionKind::Read => "read",
            InteractionKind::Like => "like",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
