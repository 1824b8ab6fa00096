pub mod article;
pub mod identity;
pub mod interaction;
pub mod settings;
pub mod shared;
pub mod social;
