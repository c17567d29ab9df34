//! Edit session: the transient "composing one note" state.
//!
//! # Responsibility
//! - Track which note, if any, is being edited.
//! - Pre-populate form drafts from the store.
//! - Turn a submitted draft into a finalized `Note`.
//!
//! # Invariants
//! - `commit` never mutates the store or clears the session; the caller ends
//!   the session after the store write succeeds.
//! - Committed checklists hold no blank item labels.
//! - An edit keeps the original `id` and `created_at`, and its `updated_at`
//!   is strictly later than the previous one.

use crate::model::note::{ChecklistItem, Note, NoteBody, NoteId, NoteKind};
use crate::store::NoteStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection raised by [`EditSession::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Checklist with neither a title nor a non-blank item.
    EmptyChecklist,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyChecklist => {
                write!(f, "please add a title or at least one checklist item")
            }
        }
    }
}

impl Error for ValidationError {}

/// Form state captured from the user.
///
/// Both variant payloads are kept so switching `kind` back and forth in a
/// form does not lose input; only the payload matching `kind` is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub title: String,
    pub kind: NoteKind,
    pub content: String,
    pub items: Vec<ChecklistItem>,
}

impl EditDraft {
    /// Empty form for a new note: text kind, one blank checklist row.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            kind: NoteKind::Text,
            content: String::new(),
            items: vec![ChecklistItem::blank()],
        }
    }

    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NoteKind::Text,
            content: content.into(),
            ..Self::blank()
        }
    }

    pub fn checklist(title: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        Self {
            title: title.into(),
            kind: NoteKind::Checklist,
            items,
            ..Self::blank()
        }
    }

    /// Form pre-filled with an existing note's fields.
    pub fn from_note(note: &Note) -> Self {
        match &note.body {
            NoteBody::Text { content } => Self::text(note.title.clone(), content.clone()),
            NoteBody::Checklist { items } if items.is_empty() => {
                Self::checklist(note.title.clone(), vec![ChecklistItem::blank()])
            }
            NoteBody::Checklist { items } => Self::checklist(note.title.clone(), items.clone()),
        }
    }
}

impl Default for EditDraft {
    fn default() -> Self {
        Self::blank()
    }
}

/// Which note is being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    editing_id: Option<NoteId>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while composing a new note.
    pub fn editing_id(&self) -> Option<&NoteId> {
        self.editing_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Starts composing a new note (`id = None`) or editing an existing one.
    ///
    /// An id missing from the store still becomes the target; the returned
    /// draft is blank and a later commit falls back to "now" for `created_at`.
    pub fn begin(&mut self, store: &NoteStore, id: Option<&NoteId>) -> EditDraft {
        self.editing_id = id.cloned();

        let Some(id) = id else {
            info!("event=edit_begin module=service status=ok mode=create");
            return EditDraft::blank();
        };

        match store.find_by_id(id) {
            Some(note) => {
                info!(
                    "event=edit_begin module=service status=ok mode=update note_id={id} kind={}",
                    note.kind().as_str()
                );
                EditDraft::from_note(note)
            }
            None => {
                warn!(
                    "event=edit_begin module=service status=degraded mode=update note_id={id} reason=missing_note"
                );
                EditDraft::blank()
            }
        }
    }

    /// Abandons the session without touching the store.
    pub fn cancel(&mut self) {
        if let Some(id) = self.editing_id.take() {
            info!("event=edit_cancel module=service status=ok note_id={id}");
        } else {
            info!("event=edit_cancel module=service status=ok mode=create");
        }
    }

    /// Ends the session after the committed note has been stored.
    pub fn finish(&mut self) {
        self.editing_id = None;
    }

    /// Points the session at `id`, so resubmitting updates that note.
    pub(crate) fn retarget(&mut self, id: NoteId) {
        self.editing_id = Some(id);
    }

    /// Validates `draft` and builds the finalized note.
    ///
    /// # Errors
    /// - [`ValidationError::EmptyChecklist`] when a checklist draft has a blank
    ///   title and no non-blank item.
    pub fn commit(
        &self,
        store: &NoteStore,
        draft: &EditDraft,
        now_ms: i64,
    ) -> Result<Note, ValidationError> {
        let title = draft.title.trim().to_string();

        let body = match draft.kind {
            NoteKind::Text => NoteBody::text(draft.content.trim()),
            NoteKind::Checklist => {
                let items = normalize_items(&draft.items);
                if items.is_empty() && title.is_empty() {
                    info!(
                        "event=note_commit module=service status=rejected kind=checklist reason=empty_checklist"
                    );
                    return Err(ValidationError::EmptyChecklist);
                }
                NoteBody::checklist(items)
            }
        };

        let note = match &self.editing_id {
            Some(id) => {
                let existing = store.find_by_id(id);
                Note {
                    id: id.clone(),
                    title,
                    body,
                    created_at: existing.map_or(now_ms, |existing| existing.created_at),
                    // Edits always move `updated_at` forward, even if the clock did not.
                    updated_at: existing
                        .map_or(now_ms, |existing| now_ms.max(existing.updated_at + 1)),
                }
            }
            None => Note::new(title, body, now_ms),
        };

        info!(
            "event=note_commit module=service status=ok mode={} kind={} note_id={}",
            if self.is_editing() { "update" } else { "create" },
            note.kind().as_str(),
            note.id
        );
        Ok(note)
    }
}

/// Trims item labels and drops blank rows, keeping order.
fn normalize_items(items: &[ChecklistItem]) -> Vec<ChecklistItem> {
    items
        .iter()
        .filter_map(|item| {
            let text = item.text.trim();
            (!text.is_empty()).then(|| ChecklistItem::new(text, item.checked))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_items;
    use crate::model::note::ChecklistItem;

    #[test]
    fn normalize_items_trims_and_keeps_order() {
        let items = vec![
            ChecklistItem::new("  eggs ", false),
            ChecklistItem::new("\t", true),
            ChecklistItem::new("milk", true),
        ];
        assert_eq!(
            normalize_items(&items),
            vec![
                ChecklistItem::new("eggs", false),
                ChecklistItem::new("milk", true)
            ]
        );
    }
}
