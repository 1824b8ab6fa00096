use serde::{Deserialize, Serialize};

/// Result of recording an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionOutcome {
    /// `true` when the event already existed and nothing was written.
    pub already_recorded: bool,
    /// Counter value on the article after the call.
    pub new_count: i64,
}

impl InteractionOutcome {
    pub fn recorded(new_count: i64) -> Self {
        Self {
            already_recorded: false,
            new_count,
        }
    }

    pub fn already(count: i64) -> Self {
        Self {
            already_recorded: true,
            new_count: count,
        }
    }
}
