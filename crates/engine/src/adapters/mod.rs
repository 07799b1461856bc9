//! Save store adapters

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileSaveStore;
pub use memory::InMemorySaveStore;
