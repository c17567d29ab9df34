//! Plain-text rendering for terminals.

use super::{CardBody, NotesView, EMPTY_CHECKLIST_HINT, EMPTY_STATE_HEADING, EMPTY_STATE_HINT};
use std::fmt::Write;

pub(super) fn render(view: &NotesView) -> String {
    let cards = match view {
        NotesView::Empty => return format!("{EMPTY_STATE_HEADING}\n{EMPTY_STATE_HINT}\n"),
        NotesView::Cards(cards) => cards,
    };

    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "# {}", card.title);
        match &card.body {
            CardBody::Text(content) if content.is_empty() => {}
            CardBody::Text(content) => {
                let _ = writeln!(out, "{content}");
            }
            CardBody::Checklist(items) if items.is_empty() => {
                let _ = writeln!(out, "  ({EMPTY_CHECKLIST_HINT})");
            }
            CardBody::Checklist(items) => {
                for item in items {
                    let mark = if item.completed { 'x' } else { ' ' };
                    let _ = writeln!(out, "  [{mark}] {}", item.text);
                }
            }
        }
    }
    out
}
