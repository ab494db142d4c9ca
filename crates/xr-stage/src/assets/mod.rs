pub mod manifest;
pub mod resolver;
