pub mod authoring;
pub mod interaction;
pub mod settings;
