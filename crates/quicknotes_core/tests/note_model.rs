use quicknotes_core::{ChecklistItem, Note, NoteBody, NoteId, NoteKind};
use serde_json::json;

#[test]
fn text_note_serializes_to_wire_shape() {
    let note = Note {
        id: NoteId::from("lq2x9k3abc1234"),
        title: "Todo".to_string(),
        body: NoteBody::text("Buy milk"),
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_360_000,
    };

    let value = serde_json::to_value(&note).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "lq2x9k3abc1234",
            "type": "text",
            "title": "Todo",
            "content": "Buy milk",
            "createdAt": 1_700_000_000_000_i64,
            "updatedAt": 1_700_000_360_000_i64
        })
    );
    assert!(value.get("items").is_none());
}

#[test]
fn checklist_note_serializes_items_in_order() {
    let note = Note {
        id: NoteId::from("n1"),
        title: String::new(),
        body: NoteBody::checklist(vec![
            ChecklistItem::new("Milk", true),
            ChecklistItem::new("Eggs", false),
        ]),
        created_at: 1,
        updated_at: 2,
    };

    let value = serde_json::to_value(&note).unwrap();
    assert_eq!(value["type"], "checklist");
    assert_eq!(
        value["items"],
        json!([{"text": "Milk", "checked": true}, {"text": "Eggs", "checked": false}])
    );
    assert!(value.get("content").is_none());

    let decoded: Note = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn legacy_records_with_missing_fields_decode_as_empty() {
    let value = json!([
        {"id": "a", "type": "text", "createdAt": 1, "updatedAt": 1},
        {"id": "b", "type": "checklist", "title": "Trip", "createdAt": 2, "updatedAt": 3}
    ]);

    let notes: Vec<Note> = serde_json::from_value(value).unwrap();
    assert_eq!(notes[0].title, "");
    assert_eq!(notes[0].body, NoteBody::text(""));
    assert_eq!(notes[1].kind(), NoteKind::Checklist);
    assert_eq!(notes[1].body, NoteBody::checklist(Vec::new()));
}

#[test]
fn null_fields_decode_as_empty() {
    let value = json!([
        {"id": "a", "type": "text", "title": null, "content": null, "createdAt": 1, "updatedAt": 1},
        {"id": "b", "type": "checklist", "title": "Trip", "items": null, "createdAt": 2, "updatedAt": 2},
        {"id": "c", "type": "checklist", "title": "", "items": [{"text": "Milk", "checked": null}], "createdAt": 3, "updatedAt": 3}
    ]);

    let notes: Vec<Note> = serde_json::from_value(value).unwrap();
    assert_eq!(notes[0].title, "");
    assert_eq!(notes[0].body, NoteBody::text(""));
    assert_eq!(notes[1].body, NoteBody::checklist(Vec::new()));
    assert_eq!(
        notes[2].body,
        NoteBody::checklist(vec![ChecklistItem::new("Milk", false)])
    );
}

#[test]
fn missing_or_unknown_type_decodes_as_text() {
    let value = json!([
        {"id": "a", "title": "old", "content": "y", "createdAt": 1, "updatedAt": 1},
        {"id": "b", "type": null, "content": "z", "createdAt": 1, "updatedAt": 1},
        {"id": "c", "type": "drawing", "content": "w", "createdAt": 1, "updatedAt": 1}
    ]);

    let notes: Vec<Note> = serde_json::from_value(value).unwrap();
    assert_eq!(notes[0].kind(), NoteKind::Text);
    assert_eq!(notes[0].title, "old");
    assert_eq!(notes[0].body, NoteBody::text("y"));
    assert_eq!(notes[1].body, NoteBody::text("z"));
    assert_eq!(notes[2].body, NoteBody::text("w"));
}

#[test]
fn record_without_id_is_rejected() {
    let value = json!({"type": "text", "createdAt": 1, "updatedAt": 1});
    assert!(serde_json::from_value::<Note>(value).is_err());
}
