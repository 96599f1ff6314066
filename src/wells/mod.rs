pub mod headers;
pub mod models;
pub mod spots;
pub mod views;
