//! Full-snapshot persistence of the note collection.
//!
//! # Responsibility
//! - Serialize the whole note sequence into one key-value slot.
//! - Rebuild the sequence from that slot on startup.
//!
//! # Invariants
//! - `save` rewrites the entire slot; there are no incremental writes.
//! - `load` never fails: a missing, unreadable or corrupt slot reads as no
//!   notes and is only reported through logging.

use crate::model::note::Note;
use crate::repo::kv_repo::KvRepository;
use crate::repo::RepoResult;
use log::{info, warn};

/// Slot holding the serialized note array.
pub const NOTES_STORAGE_KEY: &str = "quicknotes_v2";

/// Persistence adapter between the note store and a [`KvRepository`].
pub struct NoteSnapshotRepository<K: KvRepository> {
    kv: K,
    key: String,
}

impl<K: KvRepository> NoteSnapshotRepository<K> {
    /// Uses the default [`NOTES_STORAGE_KEY`] slot.
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, NOTES_STORAGE_KEY)
    }

    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying slot storage, shared with other preference slots.
    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Overwrites the slot with the full note sequence.
    pub fn save(&self, notes: &[Note]) -> RepoResult<()> {
        let payload = serde_json::to_string(notes)?;
        if let Err(err) = self.kv.set(&self.key, &payload) {
            warn!(
                "event=notes_save module=repo status=error key={} count={} error={err}",
                self.key,
                notes.len()
            );
            return Err(err);
        }

        info!(
            "event=notes_save module=repo status=ok key={} count={} bytes={}",
            self.key,
            notes.len(),
            payload.len()
        );
        Ok(())
    }

    /// Reads the slot back, degrading to an empty sequence on any failure.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.kv.get(&self.key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                info!(
                    "event=notes_load module=repo status=ok key={} count=0 source=missing",
                    self.key
                );
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=repo status=degraded key={} reason=read_failed error={err}",
                    self.key
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => {
                info!(
                    "event=notes_load module=repo status=ok key={} count={}",
                    self.key,
                    notes.len()
                );
                notes
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=repo status=degraded key={} reason=corrupt line={} column={}",
                    self.key,
                    err.line(),
                    err.column()
                );
                Vec::new()
            }
        }
    }
}
