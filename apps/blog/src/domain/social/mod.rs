pub mod comment;
pub mod repository;
