//! In-memory save store
//!
//! Backs tests and sessions that do not want a file on disk. Clones share
//! the same slot, so a test can keep a handle and inspect what a session
//! persisted.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ports::{SaveRecord, SaveStoreError, SaveStorePort};

/// Single-slot save store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySaveStore {
    slot: Rc<RefCell<Option<SaveRecord>>>,
}

impl InMemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current slot contents, if any
    pub fn snapshot(&self) -> Option<SaveRecord> {
        self.slot.borrow().clone()
    }
}

impl SaveStorePort for InMemorySaveStore {
    fn save(&mut self, record: &SaveRecord) -> Result<(), SaveStoreError> {
        *self.slot.borrow_mut() = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SaveRecord>, SaveStoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn clear(&mut self) -> Result<(), SaveStoreError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
