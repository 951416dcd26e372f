//! Persisted-config port.
//!
//! Hosts that remember the last applied selections between dialog
//! openings inject an implementation of [`ConfigStore`]; the library
//! itself never touches storage.

use std::sync::Mutex;

use crate::{error::CoreError, form::FormState};

/// Load/save seam for the last applied form state.
pub trait ConfigStore: Send + Sync {
    /// Return the previously saved state, or `None` on first use.
    fn load(&self) -> Result<Option<FormState>, CoreError>;

    /// Persist the state the user just applied.
    fn save(&self, state: &FormState) -> Result<(), CoreError>;
}

/// In-memory store used by tests and the demo wiring.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<FormState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<Option<FormState>, CoreError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| CoreError::Store(e.to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, state: &FormState) -> Result<(), CoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| CoreError::Store(e.to_string()))?;
        *slot = Some(state.clone());
        Ok(())
    }
}
