//! View renderer: pure projection from notes to display cards.
//!
//! # Responsibility
//! - Derive card view models from the current note sequence.
//! - Produce HTML and plain-text renderings of those cards.
//!
//! # Invariants
//! - Rendering holds no state; every call rebuilds the whole view.
//! - User text is always escaped in HTML output.

mod html;
mod text;

use crate::model::note::{Note, NoteBody, NoteId};

pub use html::escape_html;

const UNTITLED_TEXT: &str = "Untitled";
const UNTITLED_CHECKLIST: &str = "Untitled Checklist";
pub(crate) const EMPTY_STATE_HEADING: &str = "No notes yet";
pub(crate) const EMPTY_STATE_HINT: &str = "Create your first note to get started!";
pub(crate) const EMPTY_CHECKLIST_HINT: &str = "No items yet";

/// Whole-board view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesView {
    /// No notes exist; show the call to action.
    Empty,
    /// Cards in store order.
    Cards(Vec<NoteCard>),
}

/// One rendered note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    /// Title with the per-kind fallback applied.
    pub title: String,
    pub body: CardBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    Text(String),
    /// Empty vector renders the "No items yet" hint.
    Checklist(Vec<CardItem>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub text: String,
    pub completed: bool,
}

/// Builds the board view for `notes`.
pub fn render_notes(notes: &[Note]) -> NotesView {
    if notes.is_empty() {
        return NotesView::Empty;
    }
    NotesView::Cards(notes.iter().map(render_card).collect())
}

fn render_card(note: &Note) -> NoteCard {
    let (fallback, body) = match &note.body {
        NoteBody::Text { content } => (UNTITLED_TEXT, CardBody::Text(content.clone())),
        NoteBody::Checklist { items } => (
            UNTITLED_CHECKLIST,
            CardBody::Checklist(
                items
                    .iter()
                    .map(|item| CardItem {
                        text: item.text.clone(),
                        completed: item.checked,
                    })
                    .collect(),
            ),
        ),
    };

    let title = if note.title.is_empty() {
        fallback.to_string()
    } else {
        note.title.clone()
    };

    NoteCard {
        id: note.id.clone(),
        title,
        body,
    }
}

impl NotesView {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn cards(&self) -> &[NoteCard] {
        match self {
            Self::Empty => &[],
            Self::Cards(cards) => cards,
        }
    }

    pub fn to_html(&self) -> String {
        html::render(self)
    }

    pub fn to_text(&self) -> String {
        text::render(self)
    }
}
