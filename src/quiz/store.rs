//! Transient quiz state persistence: a single overwritten slot so an
//! in-progress question survives an app restart.

use super::models::QuizState;
use crate::storage::{KvStore, Result};

const QUIZ_STATE_KEY: &str = "quiz_state_v1";

pub struct QuizStateStore {
    kv: KvStore,
}

impl QuizStateStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Overwrite the slot. Failure is logged, never raised.
    pub fn save_state(&self, state: &QuizState) {
        if let Err(e) = self.write(state) {
            log::warn!("Failed to save quiz state: {}", e);
        }
    }

    /// Read the slot. Absent or corrupt state reads as `None`.
    pub fn get_state(&self) -> Option<QuizState> {
        match self.read() {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Failed to load quiz state: {}", e);
                None
            }
        }
    }

    /// Remove the slot entirely.
    pub fn clear_state(&self) {
        if let Err(e) = self.kv.remove(QUIZ_STATE_KEY) {
            log::error!("Failed to clear quiz state: {}", e);
        }
    }

    fn read(&self) -> Result<Option<QuizState>> {
        match self.kv.get(QUIZ_STATE_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn write(&self, state: &QuizState) -> Result<()> {
        self.kv.set(QUIZ_STATE_KEY, &serde_json::to_string(state)?)
    }
}
