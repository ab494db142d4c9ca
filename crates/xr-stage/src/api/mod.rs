pub mod app;
pub mod host;
pub mod types;
