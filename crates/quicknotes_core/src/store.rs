//! In-memory note store.
//!
//! # Responsibility
//! - Hold the authoritative ordered sequence of notes for one session.
//! - Provide upsert/remove/lookup keyed by `NoteId`.
//!
//! # Invariants
//! - No two held notes share an id.
//! - New notes are prepended; replacing a note keeps its position.
//! - Missing ids are a normal outcome, never an error.

use crate::model::note::{Note, NoteId};
use std::collections::HashSet;

/// Ordered note collection, newest-created first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a persisted snapshot.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant holds
    /// even for hand-edited or corrupted snapshots.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut seen = HashSet::with_capacity(notes.len());
        let notes = notes
            .into_iter()
            .filter(|note| seen.insert(note.id.clone()))
            .collect();
        Self { notes }
    }

    /// Returns notes in display order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn find_by_id(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Replaces the note with the same id in place, or prepends it.
    pub fn upsert(&mut self, note: Note) {
        match self.position(&note.id) {
            Some(index) => self.notes[index] = note,
            None => self.notes.insert(0, note),
        }
    }

    /// Removes the note with `id`, returning it when present.
    pub fn remove(&mut self, id: &NoteId) -> Option<Note> {
        self.position(id).map(|index| self.notes.remove(index))
    }

    fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|note| &note.id == id)
    }
}
