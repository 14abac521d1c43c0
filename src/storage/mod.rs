mod kv;

pub use kv::{KvStore, Result, StorageError, DEFAULT_QUOTA_BYTES};
