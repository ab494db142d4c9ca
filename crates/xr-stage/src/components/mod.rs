pub mod descriptor;
pub mod instance;
