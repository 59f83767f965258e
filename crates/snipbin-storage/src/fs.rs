use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use snipbin_core::error::StorageError;
use snipbin_core::{NewSnippet, Snippet, SnippetId, SnippetKind, SnippetStore};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

type Result<T> = std::result::Result<T, StorageError>;

/// File extension for persisted snippet records.
const RECORD_EXT: &str = "json";

/// File-backed snippet store: one pretty-printed JSON record per
/// snippet, named `{id}.json`, in a single snippets directory.
///
/// No index or manifest exists besides the directory listing, so the
/// store is naturally consistent across process restarts. All record
/// writes go to a unique temporary path in the same directory and are
/// renamed into place, so a concurrent reader never observes a
/// half-written file.
///
/// The read-decrement-write cycle of `get` is serialized per
/// identifier by an in-process async mutex, so within one store handle
/// each physical view of an expiring snippet is granted at most once.
/// Multiple processes sharing a directory do not share these locks;
/// that deployment remains a documented consistency caveat.
pub struct FsSnippetStore {
    dir: PathBuf,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl FsSnippetStore {
    /// Opens a store rooted at `dir`, creating the directory if
    /// it does not exist yet.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StorageError::Write(format!("create snippets dir: {e}")))?;

        Ok(Self {
            dir,
            locks: DashMap::new(),
        })
    }

    /// The snippets directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &SnippetId) -> PathBuf {
        self.dir.join(format!("{}.{}", id, RECORD_EXT))
    }

    fn lock_for(&self, id: &SnippetId) -> Arc<Mutex<()>> {
        self.locks
            .entry(id.as_str().to_owned())
            .or_default()
            .clone()
    }

    /// Drops the lock entry for `id` once no task holds it, so the
    /// table does not grow with every identifier ever requested.
    ///
    /// A strong count of one means only the table itself still refers
    /// to the mutex; `lock_for` and this removal contend on the same
    /// shard lock, so the check-then-remove is atomic with respect to
    /// new clones.
    fn reap_lock(&self, id: &SnippetId) {
        self.locks
            .remove_if(id.as_str(), |_, lock| Arc::strong_count(lock) == 1);
    }

    /// The read-decrement-write cycle of `get`, serialized per
    /// identifier so two concurrent reads cannot both spend the same
    /// view. The lock handle is dropped on return.
    async fn get_under_lock(&self, id: &SnippetId) -> Result<Option<Snippet>> {
        let lock = self.lock_for(id);
        let _guard = lock.lock().await;

        let Some(mut snippet) = self.read_record(id).await? else {
            return Ok(None);
        };

        // A dead record is indistinguishable from an absent one, even
        // though its file may still be on disk.
        if !snippet.is_live_at(Timestamp::now()) {
            return Ok(None);
        }

        if let SnippetKind::Expiring { views_left, .. } = &mut snippet.kind {
            *views_left -= 1;
            let views_left = *views_left;
            self.write_record(&snippet).await?;
            tracing::debug!(id = %id, views_left, "consumed one view");
        }

        Ok(Some(snippet))
    }

    /// Atomically replaces the record file: write to a unique temp
    /// path in the same directory, then rename into place.
    async fn write_record(&self, snippet: &Snippet) -> Result<()> {
        let json = serde_json::to_vec_pretty(snippet)
            .map_err(|e| StorageError::Write(format!("serialize record: {e}")))?;

        let tmp = self
            .dir
            .join(format!(".{}.{}.tmp", snippet.id, Uuid::new_v4()));

        fs::write(&tmp, &json)
            .await
            .map_err(|e| StorageError::Write(format!("write record: {e}")))?;

        if let Err(e) = fs::rename(&tmp, self.record_path(&snippet.id)).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(StorageError::Write(format!("publish record: {e}")));
        }

        Ok(())
    }

    /// Reads and parses a record file, without any liveness handling.
    async fn read_record(&self, id: &SnippetId) -> Result<Option<Snippet>> {
        let bytes = match fs::read(self.record_path(id)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Read(format!("read record: {e}"))),
        };

        let snippet = serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupt {
            id: id.as_str().to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Some(snippet))
    }
}

#[async_trait]
impl SnippetStore for FsSnippetStore {
    async fn create(&self, new: NewSnippet) -> Result<Snippet> {
        // The identifier is generated before any file is touched, so
        // concurrent creates need no coordination.
        let snippet = Snippet {
            id: SnippetId::random(),
            content: new.content,
            name: new.name,
            created_at: Timestamp::now(),
            kind: new.kind,
        };

        self.write_record(&snippet).await?;
        tracing::debug!(id = %snippet.id, "created snippet record");
        Ok(snippet)
    }

    async fn get(&self, id: &SnippetId) -> Result<Option<Snippet>> {
        let result = self.get_under_lock(id).await;
        self.reap_lock(id);
        result
    }

    async fn list_latest(&self, n: usize) -> Result<Vec<Snippet>> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| StorageError::Read(format!("scan snippets dir: {e}")))?;

        let now = Timestamp::now();
        let mut snippets = Vec::new();

        loop {
            let entry = entries
                .next_entry()
                .await
                .map_err(|e| StorageError::Read(format!("scan snippets dir: {e}")))?;
            let Some(entry) = entry else { break };

            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXT) {
                continue;
            }

            let bytes = match fs::read(&path).await {
                Ok(bytes) => bytes,
                // Deleted between the directory scan and the read.
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(StorageError::Read(format!("read record: {e}"))),
            };

            match serde_json::from_slice::<Snippet>(&bytes) {
                // Listing is read-only: dead records are excluded but
                // no view budget is consumed.
                Ok(snippet) if snippet.is_live_at(now) => snippets.push(snippet),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping corrupt snippet record");
                }
            }
        }

        snippets.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        snippets.truncate(n);
        Ok(snippets)
    }

    async fn delete(&self, id: &SnippetId) -> Result<bool> {
        let removed = match fs::remove_file(self.record_path(id)).await {
            Ok(()) => {
                tracing::debug!(id = %id, "deleted snippet record");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Write(format!("delete record: {e}"))),
        };

        self.reap_lock(id);
        removed
    }
}
