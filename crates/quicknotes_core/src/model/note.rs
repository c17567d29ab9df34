//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, persistence and view.
//! - Own the persisted wire shape (`type`-tagged JSON with camelCase fields).
//! - Generate note identifiers.
//!
//! # Invariants
//! - `id` is opaque and never reused for another note.
//! - `created_at` is set once; `updated_at` moves on every save.
//! - Variant-specific fields live only on their variant (`NoteBody`).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque note identifier.
///
/// Persisted notes may carry ids minted by older clients, so any string is
/// accepted on decode. Fresh ids come from [`NoteId::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Mints a new id from a UUIDv7 (millisecond timestamp + random bits).
    pub fn generate() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Discriminant of [`NoteBody`], used by forms and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Text,
    Checklist,
}

impl NoteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Checklist => "checklist",
        }
    }
}

/// One checklist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Item label. Saved checklists never hold blank labels.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }

    /// Blank row used to seed an empty checklist form.
    pub fn blank() -> Self {
        Self::new("", false)
    }
}

/// Variant payload of a note.
///
/// Serialized inline into [`Note`] with a `type` discriminator. Decoding goes
/// through [`Note`], which tolerates older record shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoteBody {
    /// Free-form text.
    Text { content: String },
    /// Ordered checklist; insertion order is display order.
    Checklist { items: Vec<ChecklistItem> },
}

impl NoteBody {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn checklist(items: Vec<ChecklistItem>) -> Self {
        Self::Checklist { items }
    }

    pub fn kind(&self) -> NoteKind {
        match self {
            Self::Text { .. } => NoteKind::Text,
            Self::Checklist { .. } => NoteKind::Checklist,
        }
    }
}

/// Canonical note record.
///
/// Decoding is lenient the way older clients read their own data: `null` or
/// missing `title`/`content`/`items` read as empty, and any `type` other than
/// `checklist` (including none) reads as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "NoteRecord")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(flatten)]
    pub body: NoteBody,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}

impl Note {
    /// Creates a fresh note with a generated id and both timestamps at `now_ms`.
    pub fn new(title: impl Into<String>, body: NoteBody, now_ms: i64) -> Self {
        Self {
            id: NoteId::generate(),
            title: title.into(),
            body,
            created_at: now_ms,
            updated_at: now_ms,
        }
    }

    pub fn kind(&self) -> NoteKind {
        self.body.kind()
    }
}

/// Persisted record shape accepted on decode.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteRecord {
    id: NoteId,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    items: Vec<ChecklistItem>,
    created_at: i64,
    updated_at: i64,
}

impl From<NoteRecord> for Note {
    fn from(record: NoteRecord) -> Self {
        let body = match record.kind.as_deref() {
            Some("checklist") => NoteBody::Checklist {
                items: record.items,
            },
            _ => NoteBody::Text {
                content: record.content,
            },
        };
        Self {
            id: record.id,
            title: record.title,
            body,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
