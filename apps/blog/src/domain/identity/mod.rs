pub mod entity;
pub mod repository;
pub mod role;
pub mod value_objects;
