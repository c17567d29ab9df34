use quicknotes_core::{Note, NoteBody, NoteId, NoteStore};
use std::collections::HashSet;

fn text_note(title: &str, at: i64) -> Note {
    Note::new(title, NoteBody::text(""), at)
}

fn titles(store: &NoteStore) -> Vec<&str> {
    store.list().iter().map(|note| note.title.as_str()).collect()
}

#[test]
fn new_notes_are_prepended() {
    let mut store = NoteStore::new();
    store.upsert(text_note("A", 1));
    store.upsert(text_note("B", 2));
    store.upsert(text_note("C", 3));

    assert_eq!(titles(&store), vec!["C", "B", "A"]);
}

#[test]
fn upsert_replaces_in_place() {
    let mut store = NoteStore::new();
    let a = text_note("A", 1);
    let b = text_note("B", 2);
    store.upsert(a);
    store.upsert(b.clone());
    store.upsert(text_note("C", 3));

    let mut edited = b;
    edited.title = "B2".to_string();
    edited.updated_at = 10;
    store.upsert(edited.clone());

    assert_eq!(titles(&store), vec!["C", "B2", "A"]);
    assert_eq!(store.find_by_id(&edited.id), Some(&edited));
}

#[test]
fn repeated_upserts_never_duplicate_ids() {
    let mut store = NoteStore::new();
    let note = text_note("same", 1);
    for at in 0..5 {
        let mut copy = note.clone();
        copy.updated_at = at;
        store.upsert(copy);
        store.upsert(text_note("other", at));
    }

    let ids: HashSet<&NoteId> = store.list().iter().map(|note| &note.id).collect();
    assert_eq!(ids.len(), store.len());
    assert_eq!(store.len(), 6);
}

#[test]
fn remove_missing_id_is_a_noop() {
    let mut store = NoteStore::new();
    store.upsert(text_note("A", 1));
    let before = store.clone();

    assert!(store.remove(&NoteId::from("missing")).is_none());
    assert_eq!(store, before);
}

#[test]
fn remove_existing_id_drops_exactly_one() {
    let mut store = NoteStore::new();
    let a = text_note("A", 1);
    store.upsert(a.clone());
    store.upsert(text_note("B", 2));

    let removed = store.remove(&a.id).unwrap();
    assert_eq!(removed.id, a.id);
    assert_eq!(store.len(), 1);
    assert!(store.find_by_id(&a.id).is_none());
}

#[test]
fn from_notes_keeps_first_occurrence_of_duplicate_ids() {
    let a = text_note("A", 1);
    let mut shadow = a.clone();
    shadow.title = "shadow".to_string();

    let store = NoteStore::from_notes(vec![a.clone(), text_note("B", 2), shadow]);
    assert_eq!(titles(&store), vec!["A", "B"]);
}
