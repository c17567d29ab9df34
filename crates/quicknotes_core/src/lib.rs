//! Core domain logic for QuickNotes.
//! This crate is the single source of truth for note invariants.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{ChecklistItem, Note, NoteBody, NoteId, NoteKind};
pub use model::theme::Theme;
pub use repo::kv_repo::{KvRepository, MemoryKvRepository, SqliteKvRepository};
pub use repo::note_snapshot::{NoteSnapshotRepository, NOTES_STORAGE_KEY};
pub use repo::preferences::THEME_STORAGE_KEY;
pub use repo::{RepoError, RepoResult};
pub use service::edit_session::{EditDraft, EditSession, ValidationError};
pub use service::notes_service::{NotesService, ServiceError, ServiceResult};
pub use store::NoteStore;
pub use view::{escape_html, render_notes, CardBody, CardItem, NoteCard, NotesView};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
