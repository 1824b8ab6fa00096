use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Username {
    #[validate(length(min = 3, max = 30))]
    pub value: String,
}

impl Username {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let username = Self {
            value: value.trim().to_string(),
        };
        username.validate()?;
        Ok(username)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
