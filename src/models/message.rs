// Message domain model - the record held by the message board

//! # Message Models
//!
//! This module defines the message board's data model:
//! - `Message`: a stored record with an opaque, store-assigned id
//! - `MessageDraft`: the id-less content/author pair supplied by callers
//!
//! Both fields of a draft are optional and accepted without validation.
//! Identity is the store's concern only at the mapping level; the id itself
//! is generated here on the domain model, so any storage backend stores the
//! same token format.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied message fields, without an identity
///
/// This is the typed replacement for a shape-free input object: both fields
/// are explicit and optional, and an absent field stays absent when stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    /// Optional message body
    pub content: Option<String>,

    /// Optional author name
    pub author: Option<String>,
}

/// A stored message
///
/// The `id` is assigned once at creation and never changes afterwards;
/// updates replace `content` and `author` wholesale but keep the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque identifier - unique within the store, no semantic meaning
    pub id: String,

    /// Optional message body
    pub content: Option<String>,

    /// Optional author name
    pub author: Option<String>,
}

impl Message {
    /// Create a message from a draft, assigning a fresh opaque id
    pub fn new(draft: MessageDraft) -> Self {
        Self {
            id: generate_id(),
            content: draft.content,
            author: draft.author,
        }
    }

    /// Replace content and author from a draft, keeping the id
    ///
    /// Full replace, not a merge: a field absent from `draft` ends up absent
    /// on the message.
    pub fn replace(&mut self, draft: MessageDraft) {
        self.content = draft.content;
        self.author = draft.author;
    }
}

/// Random 128-bit token rendered as 32 hex characters
///
/// Collision probability is negligible for an in-process store, and the
/// token carries no structure a client could depend on.
fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_carries_draft_fields() {
        let message = Message::new(MessageDraft {
            content: Some("hi".to_string()),
            author: Some("bob".to_string()),
        });

        assert_eq!(message.content.as_deref(), Some("hi"));
        assert_eq!(message.author.as_deref(), Some("bob"));
        assert!(!message.id.is_empty());
    }

    #[test]
    fn empty_draft_is_accepted() {
        let message = Message::new(MessageDraft::default());

        assert_eq!(message.content, None);
        assert_eq!(message.author, None);
        assert!(!message.id.is_empty());
    }

    #[test]
    fn ids_are_distinct_across_creations() {
        let a = Message::new(MessageDraft::default());
        let b = Message::new(MessageDraft::default());

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn ids_are_opaque_hex_tokens() {
        let message = Message::new(MessageDraft::default());

        assert_eq!(message.id.len(), 32);
        assert!(message.id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn replace_overwrites_both_fields_and_keeps_id() {
        let mut message = Message::new(MessageDraft {
            content: Some("hi".to_string()),
            author: Some("bob".to_string()),
        });
        let original_id = message.id.clone();

        message.replace(MessageDraft {
            content: Some("bye".to_string()),
            author: None,
        });

        assert_eq!(message.id, original_id);
        assert_eq!(message.content.as_deref(), Some("bye"));
        // The author was not supplied in the replacement draft, so it is gone
        assert_eq!(message.author, None);
    }
}
