//! HTML card markup.

use super::{
    CardBody, NoteCard, NotesView, EMPTY_CHECKLIST_HINT, EMPTY_STATE_HEADING, EMPTY_STATE_HINT,
};
use std::fmt::Write;

/// Escapes `& < > " '` for safe interpolation into markup and attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub(super) fn render(view: &NotesView) -> String {
    match view {
        NotesView::Empty => format!(
            "<div class=\"empty-state\"><h2>{EMPTY_STATE_HEADING}</h2><p>{EMPTY_STATE_HINT}</p></div>"
        ),
        NotesView::Cards(cards) => cards.iter().map(render_card).collect(),
    }
}

fn render_card(card: &NoteCard) -> String {
    let mut out = String::new();
    let id = escape_html(card.id.as_str());
    let _ = write!(
        out,
        "<div class=\"note-card\" data-id=\"{id}\"><h3 class=\"note-title\">{}</h3>",
        escape_html(&card.title)
    );

    match &card.body {
        CardBody::Text(content) => {
            let _ = write!(
                out,
                "<p class=\"note-content\">{}</p>",
                escape_html(content)
            );
        }
        CardBody::Checklist(items) => {
            out.push_str("<div class=\"note-content checklist-preview\">");
            if items.is_empty() {
                let _ = write!(out, "<p class=\"empty-list\">{EMPTY_CHECKLIST_HINT}</p>");
            }
            for item in items {
                let (class, checked) = if item.completed {
                    (" completed", " checked")
                } else {
                    ("", "")
                };
                let _ = write!(
                    out,
                    "<div class=\"checklist-item{class}\"><input type=\"checkbox\"{checked} disabled><label>{}</label></div>",
                    escape_html(&item.text)
                );
            }
            out.push_str("</div>");
        }
    }

    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;
    use crate::model::note::{ChecklistItem, Note, NoteBody};
    use crate::view::render_notes;

    #[test]
    fn escape_html_covers_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
    }

    #[test]
    fn html_escapes_user_text() {
        let note = Note::new("<script>", NoteBody::text("a & b"), 1);
        let html = render_notes(&[note]).to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn html_marks_completed_items_and_empty_lists() {
        let done = Note::new(
            "t",
            NoteBody::checklist(vec![ChecklistItem::new("milk", true)]),
            1,
        );
        let html = render_notes(&[done]).to_html();
        assert!(html.contains("checklist-item completed"));
        assert!(html.contains(" checked disabled"));

        let empty = Note::new("t", NoteBody::checklist(Vec::new()), 1);
        assert!(render_notes(&[empty]).to_html().contains("No items yet"));
    }

    #[test]
    fn html_empty_state_has_call_to_action() {
        let html = render_notes(&[]).to_html();
        assert!(html.contains("No notes yet"));
        assert!(html.contains("Create your first note to get started!"));
    }
}
