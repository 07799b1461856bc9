//! Outbound ports consumed by the engine

pub mod save_store;

pub use save_store::{SaveRecord, SaveStoreError, SaveStorePort};

#[cfg(any(test, feature = "testing"))]
pub use save_store::MockSaveStorePort;
