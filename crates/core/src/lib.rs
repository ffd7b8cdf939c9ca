pub mod errors;
pub mod instant;
pub mod models;
