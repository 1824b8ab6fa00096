pub mod errors;
pub mod pool;
pub mod seed;
