//! Domain model for notes and user preferences.
//!
//! # Responsibility
//! - Define canonical data structures used by store, persistence and view.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod note;
pub mod theme;
