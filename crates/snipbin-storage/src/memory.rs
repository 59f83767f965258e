use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use snipbin_core::error::StorageError;
use snipbin_core::{NewSnippet, Snippet, SnippetId, SnippetKind, SnippetStore};

type Result<T> = std::result::Result<T, StorageError>;

/// In-memory implementation of [`SnippetStore`] backed by a DashMap.
///
/// Same observable contract as the file store, minus durability. Meant
/// for exercising service logic in tests without filesystem I/O; the
/// sharded locks of DashMap serialize the per-record decrement the way
/// the file store's per-identifier mutex does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: DashMap<String, Snippet>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnippetStore for InMemoryStore {
    async fn create(&self, new: NewSnippet) -> Result<Snippet> {
        let snippet = Snippet {
            id: SnippetId::random(),
            content: new.content,
            name: new.name,
            created_at: Timestamp::now(),
            kind: new.kind,
        };

        self.records
            .insert(snippet.id.as_str().to_owned(), snippet.clone());
        Ok(snippet)
    }

    async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>> {
        // get_mut holds the shard lock across the decrement, so a view
        // cannot be granted twice.
        let Some(mut entry) = self.records.get_mut(id.as_str()) else {
            return Ok(None);
        };

        if !entry.is_live_at(Timestamp::now()) {
            return Ok(None);
        }

        if let SnippetKind::Expiring { views_left, .. } = &mut entry.kind {
            *views_left -= 1;
        }

        Ok(Some(entry.clone()))
    }

    async fn list_latest(&self, n: usize) -> Result<Vec<Snippet>> {
        let now = Timestamp::now();

        let mut snippets: Vec<Snippet> = self
            .records
            .iter()
            .filter(|entry| entry.value().is_live_at(now))
            .map(|entry| entry.value().clone())
            .collect();

        snippets.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        snippets.truncate(n);
        Ok(snippets)
    }

    async fn delete(&self, id: &SnippetId) -> Result<bool> {
        Ok(self.records.remove(id.as_str()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    fn expiring(views_left: i64, ttl: SignedDuration) -> NewSnippet {
        NewSnippet::builder()
            .content("c")
            .kind(SnippetKind::Expiring {
                expires_at: Timestamp::now() + ttl,
                views_left,
            })
            .build()
    }

    #[tokio::test]
    async fn create_and_get() {
        let store = InMemoryStore::new();

        let created = store
            .create(NewSnippet::builder().content("hello").name("greet").build())
            .await
            .unwrap();

        let fetched = store.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn name_defaults_to_sentinel() {
        let store = InMemoryStore::new();

        let created = store
            .create(NewSnippet::builder().content("hello").build())
            .await
            .unwrap();
        assert_eq!(created.name, "N/A");
    }

    #[tokio::test]
    async fn view_budget_is_consumed_by_get() {
        let store = InMemoryStore::new();

        let created = store
            .create(expiring(1, SignedDuration::from_hours(1)))
            .await
            .unwrap();

        assert!(store.get(&created.id).await.unwrap().is_some());
        assert!(store.get(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_record_is_absent() {
        let store = InMemoryStore::new();

        let created = store
            .create(expiring(10, SignedDuration::from_secs(-1)))
            .await
            .unwrap();

        assert!(store.get(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_is_read_only_and_ordered() {
        let store = InMemoryStore::new();

        let fragile = store
            .create(expiring(1, SignedDuration::from_hours(1)))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let newer = store
            .create(NewSnippet::builder().content("newer").build())
            .await
            .unwrap();

        let listed = store.list_latest(10).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, newer.id);

        // Listing never spends the view budget.
        assert!(store.get(&fragile.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryStore::new();

        let created = store
            .create(NewSnippet::builder().content("bye").build())
            .await
            .unwrap();

        assert!(store.delete(&created.id).await.unwrap());
        assert!(!store.delete(&created.id).await.unwrap());
    }
}
