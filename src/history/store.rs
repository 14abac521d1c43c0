//! Exam-correction history on top of the key/value area.
//!
//! Every public operation is best-effort: internal failures are caught,
//! logged and degraded to an empty or unchanged result. Storage trouble
//! never reaches the caller as an error.

use uuid::Uuid;

use super::models::ExamCorrection;
use crate::storage::{KvStore, Result};

const HISTORY_KEY: &str = "history_v1";

/// Newest-first history of exam corrections, persisted as a single JSON
/// array under one logical key.
pub struct HistoryStore {
    kv: KvStore,
}

impl HistoryStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Read the full history, newest first.
    ///
    /// A missing or corrupt value is treated as empty.
    pub fn get_history(&self) -> Vec<ExamCorrection> {
        match self.read() {
            Ok(history) => history,
            Err(e) => {
                log::warn!("Failed to load correction history: {}", e);
                Vec::new()
            }
        }
    }

    /// Prepend a freshly built record and persist.
    ///
    /// If the write exceeds the storage capacity the record is retried once
    /// with the image payload shed; if that retry also fails the record is
    /// lost and only a diagnostic is emitted. Returns the store's contents
    /// after the attempt (re-read, so the caller sees what is durable).
    pub fn save_correction(
        &self,
        analysis: String,
        sources: Vec<String>,
        image_preview: Option<String>,
    ) -> Vec<ExamCorrection> {
        let record = ExamCorrection::new(analysis, sources, image_preview);
        let history = self.get_history();

        let mut updated = Vec::with_capacity(history.len() + 1);
        updated.push(record.clone());
        updated.extend(history.iter().cloned());

        if let Err(e) = self.write(&updated) {
            // Quota pressure: shed the heavy image payload and try once more
            log::warn!("Failed to persist correction, retrying without image: {}", e);

            let mut stripped = Vec::with_capacity(history.len() + 1);
            stripped.push(record.without_image());
            stripped.extend(history.into_iter());

            if let Err(e) = self.write(&stripped) {
                log::error!("Could not persist correction even without image: {}", e);
            }
        }

        self.get_history()
    }

    /// Remove every record matching `id` (expected 0 or 1) and persist the
    /// filtered sequence unconditionally. Idempotent.
    pub fn delete_correction(&self, id: Uuid) -> Vec<ExamCorrection> {
        let mut history = self.get_history();
        history.retain(|item| item.id != id);

        if let Err(e) = self.write(&history) {
            log::error!("Failed to persist history after delete: {}", e);
        }

        history
    }

    /// Drop the history key entirely.
    pub fn clear_history(&self) {
        if let Err(e) = self.kv.remove(HISTORY_KEY) {
            log::error!("Failed to clear correction history: {}", e);
        }
    }

    fn read(&self) -> Result<Vec<ExamCorrection>> {
        match self.kv.get(HISTORY_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&self, history: &[ExamCorrection]) -> Result<()> {
        self.kv.set(HISTORY_KEY, &serde_json::to_string(history)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (HistoryStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let kv = KvStore::new(temp_dir.path().to_path_buf()).unwrap();
        (HistoryStore::new(kv), temp_dir)
    }

    #[test]
    fn test_empty_history() {
        let (store, _temp) = create_test_store();
        assert!(store.get_history().is_empty());
    }

    #[test]
    fn test_saves_are_newest_first_with_unique_ids() {
        let (store, _temp) = create_test_store();

        store.save_correction("primeira".to_string(), vec![], None);
        store.save_correction("segunda".to_string(), vec![], None);
        let history = store.save_correction("terceira".to_string(), vec![], None);

        assert_eq!(history.len(), 3);
        assert_eq!(history[0].analysis, "terceira");
        assert_eq!(history[1].analysis, "segunda");
        assert_eq!(history[2].analysis, "primeira");

        let mut ids: Vec<Uuid> = history.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_delete_removes_exactly_one_and_is_idempotent() {
        let (store, _temp) = create_test_store();

        store.save_correction("a".to_string(), vec![], None);
        let after_b = store.save_correction("b".to_string(), vec![], None);
        store.save_correction("c".to_string(), vec![], None);

        let b_id = after_b[0].id;

        let remaining = store.delete_correction(b_id);
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].analysis, "c");
        assert_eq!(remaining[1].analysis, "a");

        let again = store.delete_correction(b_id);
        assert_eq!(again.len(), 2);
    }

    #[test]
    fn test_clear_removes_the_key() {
        let (store, temp) = create_test_store();
        store.save_correction("a".to_string(), vec![], None);
        store.clear_history();

        assert!(store.get_history().is_empty());
        assert!(!temp.path().join("history_v1.json").exists());
    }

    #[test]
    fn test_corrupt_history_reads_as_empty() {
        let (store, temp) = create_test_store();
        fs::write(temp.path().join("history_v1.json"), "{not json").unwrap();
        assert!(store.get_history().is_empty());
    }

    #[test]
    fn test_quota_failure_sheds_image_and_record_survives() {
        let temp_dir = TempDir::new().unwrap();
        // Room for the record but never for its image payload
        let kv = KvStore::new(temp_dir.path().to_path_buf())
            .unwrap()
            .with_quota(512);
        let store = HistoryStore::new(kv);

        let heavy_image = format!("data:image/png;base64,{}", "A".repeat(4096));
        let history = store.save_correction(
            "análise da prova".to_string(),
            vec!["https://fonte.example".to_string()],
            Some(heavy_image),
        );

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].analysis, "análise da prova");
        assert!(history[0].image_preview.is_none());
    }

    #[test]
    fn test_quota_failure_on_retry_drops_record_without_partial_state() {
        let temp_dir = TempDir::new().unwrap();
        // Not even the stripped record fits
        let kv = KvStore::new(temp_dir.path().to_path_buf())
            .unwrap()
            .with_quota(8);
        let store = HistoryStore::new(kv);

        let history = store.save_correction("longa análise".repeat(10), vec![], None);
        assert!(history.is_empty());
        assert!(store.get_history().is_empty());
    }
}
