//! Process-wide registry of per-user saved messages.
//!
//! Created once at startup and handed by reference to all handlers; tests
//! construct a fresh registry each. State is volatile and process-scoped.

use chrono::Utc;
use repost_core::{SavedContent, SavedRecord, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// One user's saved messages, in insertion order, plus the id counter.
/// Created lazily on the user's first save; cleared, never deleted.
#[derive(Debug)]
struct UserStore {
    records: Vec<SavedRecord>,
    next_id: u64,
}

impl UserStore {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

type StoreMap = HashMap<UserId, UserStore>;

/// Authoritative per-user ordered collection of [`SavedRecord`].
///
/// Ids start at 1 per user and increase by exactly 1 per save regardless of
/// kind. `clear` keeps the counter, so an id handed out once never denotes a
/// different record later. An unknown user behaves like one with an empty
/// store. The store never evicts.
#[derive(Debug, Clone)]
pub struct MessageRegistry {
    users: Arc<RwLock<StoreMap>>,
}

impl MessageRegistry {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(StoreMap::new())),
        }
    }

    /// Appends pre-classified content to the user's store and assigns the next
    /// id. Callers reject unsupported content before this; save itself is total.
    pub async fn save(&self, user_id: UserId, content: SavedContent) -> SavedRecord {
        let mut users = self.users.write().await;
        let store = users.entry(user_id).or_insert_with(UserStore::new);
        let record = SavedRecord {
            id: store.next_id,
            content,
            created_at: Utc::now(),
        };
        store.next_id += 1;
        store.records.push(record.clone());
        info!(
            user_id = user_id,
            record_id = record.id,
            kind = record.content.kind().label(),
            total = store.records.len(),
            "Saved message to registry"
        );
        record
    }

    /// Empties the user's sequence; the id counter is untouched. Returns
    /// whether any records were removed, so callers can word their reply.
    /// Idempotent; an unknown user reports false like an empty one.
    pub async fn clear(&self, user_id: UserId) -> bool {
        let mut users = self.users.write().await;
        let had_records = match users.get_mut(&user_id) {
            Some(store) => {
                let had = !store.records.is_empty();
                store.records.clear();
                had
            }
            None => false,
        };
        info!(user_id = user_id, had_records, "Cleared user store");
        had_records
    }

    /// Exact-id lookup; a miss is absence, not an error.
    pub async fn get_by_id(&self, user_id: UserId, id: u64) -> Option<SavedRecord> {
        let users = self.users.read().await;
        users
            .get(&user_id)
            .and_then(|store| store.records.iter().find(|r| r.id == id))
            .cloned()
    }

    /// Up to `n` most recent records, ordered by descending id. Fewer when the
    /// store holds fewer; empty for an unknown user or `n == 0`.
    pub async fn get_recent(&self, user_id: UserId, n: usize) -> Vec<SavedRecord> {
        let users = self.users.read().await;
        match users.get(&user_id) {
            Some(store) => store.records.iter().rev().take(n).cloned().collect(),
            None => Vec::new(),
        }
    }
}

impl Default for MessageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(body: &str) -> SavedContent {
        SavedContent::Text {
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_and_get_by_id() {
        let registry = MessageRegistry::new();
        let saved = registry.save(1, text("hello")).await;
        assert_eq!(saved.id, 1);
        let found = registry.get_by_id(1, 1).await;
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_user() {
        let registry = MessageRegistry::new();
        assert!(registry.get_by_id(42, 1).await.is_none());
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let registry = MessageRegistry::new();
        registry.save(1, text("from one")).await;
        let other = registry.save(2, text("from two")).await;
        assert_eq!(other.id, 1);
        assert!(registry.get_by_id(2, 1).await.is_some());
        assert_eq!(registry.get_recent(1, 5).await.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let registry = MessageRegistry::new();
        registry.save(1, text("hello")).await;
        assert!(registry.clear(1).await);
        assert!(!registry.clear(1).await);
        assert!(!registry.clear(99).await);
    }
}
