//! Note board use-case service.
//!
//! # Responsibility
//! - Drive the commit → upsert → save → re-render flow for one session.
//! - Gate deletes behind a caller-supplied confirmation.
//! - Expose the theme preference slot.
//!
//! # Invariants
//! - The in-memory store is written before the snapshot is persisted.
//! - A failed snapshot write leaves the session pointed at the committed note,
//!   so resubmitting updates it instead of creating a duplicate.
//! - Validation failures leave both store and session untouched.

use crate::clock::Clock;
use crate::model::note::{Note, NoteId};
use crate::model::theme::Theme;
use crate::repo::kv_repo::KvRepository;
use crate::repo::note_snapshot::NoteSnapshotRepository;
use crate::repo::preferences::{load_theme, save_theme};
use crate::repo::RepoError;
use crate::service::edit_session::{EditDraft, EditSession, ValidationError};
use crate::store::NoteStore;
use crate::view::{render_notes, NotesView};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for board use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Draft rejected; the session stays open for correction.
    Validation(ValidationError),
    /// Persistence failure; in-memory state already reflects the change.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// One note board session over a persisted snapshot.
pub struct NotesService<K: KvRepository, C: Clock> {
    store: NoteStore,
    session: EditSession,
    snapshots: NoteSnapshotRepository<K>,
    clock: C,
}

impl<K: KvRepository, C: Clock> NotesService<K, C> {
    /// Loads the persisted snapshot and starts with no edit in progress.
    pub fn open(snapshots: NoteSnapshotRepository<K>, clock: C) -> Self {
        let store = NoteStore::from_notes(snapshots.load());
        Self {
            store,
            session: EditSession::new(),
            snapshots,
            clock,
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.store.list()
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn find_note(&self, id: &NoteId) -> Option<&Note> {
        self.store.find_by_id(id)
    }

    /// Rebuilds the full board view from current state.
    pub fn view(&self) -> NotesView {
        render_notes(self.store.list())
    }

    /// Opens the editor for a new note (`None`) or an existing one.
    pub fn begin_edit(&mut self, id: Option<&NoteId>) -> EditDraft {
        self.session.begin(&self.store, id)
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    /// Commits `draft`, stores it and persists the snapshot.
    ///
    /// # Errors
    /// - `ServiceError::Validation` when the draft is rejected; nothing changes.
    /// - `ServiceError::Repo` when the snapshot write fails; the note is kept in
    ///   memory and [`Self::flush`] can retry the write.
    pub fn save_draft(&mut self, draft: &EditDraft) -> ServiceResult<Note> {
        let note = self
            .session
            .commit(&self.store, draft, self.clock.now_ms())?;
        self.store.upsert(note.clone());

        if let Err(err) = self.snapshots.save(self.store.list()) {
            self.session.retarget(note.id.clone());
            return Err(err.into());
        }

        self.session.finish();
        Ok(note)
    }

    /// Re-persists the current store, e.g. after a failed save.
    pub fn flush(&self) -> ServiceResult<()> {
        self.snapshots.save(self.store.list())?;
        Ok(())
    }

    /// Deletes `id` if it exists and `confirm` approves it.
    ///
    /// Returns whether a note was removed. Missing ids and declined prompts
    /// are not errors and persist nothing.
    pub fn delete_note(
        &mut self,
        id: &NoteId,
        confirm: impl FnOnce(&Note) -> bool,
    ) -> ServiceResult<bool> {
        let Some(note) = self.store.find_by_id(id) else {
            info!("event=note_delete module=service status=noop note_id={id} reason=missing_note");
            return Ok(false);
        };

        if !confirm(note) {
            info!("event=note_delete module=service status=declined note_id={id}");
            return Ok(false);
        }

        self.store.remove(id);
        if self.session.editing_id() == Some(id) {
            self.session.cancel();
        }
        info!(
            "event=note_delete module=service status=ok note_id={id} remaining={}",
            self.store.len()
        );

        self.snapshots.save(self.store.list())?;
        Ok(true)
    }

    pub fn theme(&self) -> Theme {
        load_theme(self.snapshots.kv())
    }

    pub fn set_theme(&self, theme: Theme) -> ServiceResult<()> {
        save_theme(self.snapshots.kv(), theme)?;
        Ok(())
    }

    /// Flips and persists the theme, returning the new value.
    pub fn toggle_theme(&self) -> ServiceResult<Theme> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
