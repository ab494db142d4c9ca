pub mod host;
pub mod input;
pub mod library;
pub mod runner;
pub mod stage;

pub use host::{SimHost, DEFAULT_CAPACITY};
pub use input::{HoverEvent, HoverQueue};
pub use library::{AssetLibrary, LibraryEntry};
pub use runner::SessionRunner;
pub use stage::{Stage, StageNode};
