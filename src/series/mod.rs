pub mod charts;
pub mod models;
pub mod services;
