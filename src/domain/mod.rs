pub mod bridge;
pub mod models;
