// Storage abstraction for the message board
// This defines the interface for persisting messages

//! # Storage Abstraction Layer
//!
//! The storage layer follows the repository pattern: [`MessageStorage`]
//! defines the interface, [`InMemoryStorage`] is the default implementation,
//! and persistent backends can be substituted without touching the resolvers.
//!
//! All operations are async so network-backed implementations fit the same
//! trait; the in-memory implementation never blocks or suspends.
//!
//! ## Absence Is Not an Error
//!
//! Lookups return `Result<Option<T>>`:
//! - `Ok(Some(message))`: found
//! - `Ok(None)`: no message with that id (the caller decides whether that is
//!   an error)
//! - `Err(error)`: the operation itself failed (storage backend issue)

use std::collections::HashMap;

use crate::models::{Message, MessageDraft};
use crate::Result;

/// Storage trait for message persistence
///
/// Implementations must be thread-safe: resolver invocations run on a
/// concurrent request model, so `Send + Sync` bounds are required to share
/// the storage across async tasks.
#[async_trait::async_trait]
pub trait MessageStorage: Send + Sync {
    /// Create and store a new message built from `draft`
    ///
    /// The id is assigned by the domain model, not the storage layer, and is
    /// returned on the stored message.
    async fn create_message(&self, draft: MessageDraft) -> Result<Message>;

    /// Get a message by id
    ///
    /// Returns `Ok(None)` when no message with that id exists.
    async fn get_message(&self, id: &str) -> Result<Option<Message>>;

    /// Replace the stored message's content and author from `draft`
    ///
    /// Full replace, not a merge: fields absent from `draft` become absent
    /// on the stored message. The id never changes. Returns `Ok(None)` when
    /// no message with that id exists; nothing is stored in that case.
    async fn update_message(&self, id: &str, draft: MessageDraft) -> Result<Option<Message>>;

    /// Whether a message with `id` exists
    async fn contains(&self, id: &str) -> Result<bool>;
}

/// In-memory storage implementation
///
/// The map starts empty and nothing survives a restart. A single `RwLock`
/// around it is enough for this workload - guards are held only across one
/// map operation and never across an await point.
#[derive(Default)]
pub struct InMemoryStorage {
    /// Thread-safe mapping from opaque id to message
    messages: std::sync::RwLock<HashMap<String, Message>>,
}

#[async_trait::async_trait]
impl MessageStorage for InMemoryStorage {
    async fn create_message(&self, draft: MessageDraft) -> Result<Message> {
        let message = Message::new(draft);

        // .unwrap() on the lock: poisoning only occurs if a writer panicked,
        // and these critical sections cannot panic
        let mut messages = self.messages.write().unwrap();
        messages.insert(message.id.clone(), message.clone());

        Ok(message)
    }

    async fn get_message(&self, id: &str) -> Result<Option<Message>> {
        let messages = self.messages.read().unwrap();

        Ok(messages.get(id).cloned())
    }

    async fn update_message(&self, id: &str, draft: MessageDraft) -> Result<Option<Message>> {
        let mut messages = self.messages.write().unwrap();

        match messages.get_mut(id) {
            Some(message) => {
                message.replace(draft);
                Ok(Some(message.clone()))
            }
            None => Ok(None),
        }
    }

    async fn contains(&self, id: &str) -> Result<bool> {
        let messages = self.messages.read().unwrap();

        Ok(messages.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(content: Option<&str>, author: Option<&str>) -> MessageDraft {
        MessageDraft {
            content: content.map(String::from),
            author: author.map(String::from),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let storage = InMemoryStorage::default();

        let created = storage
            .create_message(draft(Some("hi"), Some("bob")))
            .await
            .unwrap();
        let fetched = storage.get_message(&created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.content.as_deref(), Some("hi"));
        assert_eq!(fetched.author.as_deref(), Some("bob"));
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let storage = InMemoryStorage::default();

        let result = storage.get_message("nonexistent-id").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn sequential_creates_assign_distinct_ids() {
        let storage = InMemoryStorage::default();

        let first = storage.create_message(MessageDraft::default()).await.unwrap();
        let second = storage.create_message(MessageDraft::default()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(storage.contains(&first.id).await.unwrap());
        assert!(storage.contains(&second.id).await.unwrap());
    }

    #[tokio::test]
    async fn update_is_a_full_replace() {
        let storage = InMemoryStorage::default();
        let created = storage
            .create_message(draft(Some("hi"), Some("bob")))
            .await
            .unwrap();

        let updated = storage
            .update_message(&created.id, draft(Some("bye"), None))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.content.as_deref(), Some("bye"));
        // author was not in the update draft, so the stored value is gone
        assert_eq!(updated.author, None);

        let fetched = storage.get_message(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none_and_stores_nothing() {
        let storage = InMemoryStorage::default();

        let result = storage
            .update_message("nonexistent-id", draft(Some("bye"), None))
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(!storage.contains("nonexistent-id").await.unwrap());
    }

    #[tokio::test]
    async fn contains_tracks_presence() {
        let storage = InMemoryStorage::default();

        assert!(!storage.contains("missing").await.unwrap());

        let created = storage.create_message(MessageDraft::default()).await.unwrap();
        assert!(storage.contains(&created.id).await.unwrap());
    }
}
