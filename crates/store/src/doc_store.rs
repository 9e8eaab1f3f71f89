use std::{collections::HashMap, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};
use uuid::Uuid;

use models::Resource;

use crate::errors::StoreError;

/// JSON file-backed document store for one resource type.
///
/// Persists a `HashMap<id, record>` to a single file and assigns identities
/// on create. Intended for demo-scale collections where a database is
/// overkill. Iteration order of `list` is map order and not guaranteed
/// stable.
#[derive(Clone)]
pub struct DocStore<T> {
    inner: Arc<RwLock<HashMap<String, T>>>,
    file_path: PathBuf,
}

impl<T: Resource> DocStore<T> {
    /// Open the store at a path. Creates the file with an empty collection if
    /// missing; an unreadable or corrupt file loads as empty.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<String, T> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<String, T> = HashMap::new();
                fs::write(&file_path, serde_json::to_vec(&empty)?).await?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    async fn save(&self) -> Result<(), StoreError> {
        let map = self.inner.read().await;
        let data = serde_json::to_vec(&*map)?;
        fs::write(&self.file_path, data).await?;
        Ok(())
    }

    /// All records. An empty collection is a valid, non-error result.
    pub async fn list(&self) -> Vec<T> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Persist a new record built from `draft` with a fresh identity, and
    /// return it. Identity is assigned here and nowhere else.
    pub async fn create(&self, draft: T::Draft) -> Result<T, StoreError> {
        let record = T::from_draft(Uuid::new_v4().to_string(), draft);
        let mut map = self.inner.write().await;
        map.insert(record.id().to_string(), record.clone());
        drop(map);
        self.save().await?;
        Ok(record)
    }

    /// Remove a record by identity and persist; returns whether it existed.
    /// Removing an unknown identity is not an error.
    pub async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut map = self.inner.write().await;
        let existed = map.remove(id).is_some();
        drop(map);
        self.save().await?;
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{User, UserDraft};

    fn temp_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("doc_store_{}.json", Uuid::new_v4()))
    }

    fn draft(name: &str) -> UserDraft {
        UserDraft { name: name.into(), email: format!("{name}@example.com") }
    }

    #[tokio::test]
    async fn create_assigns_unique_identities() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = DocStore::<User>::open(&tmp).await?;

        assert_eq!(store.list().await.len(), 0);

        let a = store.create(draft("ada")).await?;
        let b = store.create(draft("bob")).await?;
        assert!(!a.id().is_empty());
        assert_ne!(a.id(), b.id());
        assert_eq!(store.list().await.len(), 2);

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn remove_is_idempotent() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = DocStore::<User>::open(&tmp).await?;

        let a = store.create(draft("ada")).await?;
        assert!(store.remove(a.id()).await?);
        assert!(!store.remove(a.id()).await?);
        assert!(!store.remove("never-existed").await?);
        assert_eq!(store.list().await.len(), 0);

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn records_survive_reopen() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        let store = DocStore::<User>::open(&tmp).await?;
        let a = store.create(draft("ada")).await?;

        let reloaded = DocStore::<User>::open(&tmp).await?;
        let records = reloaded.list().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], a);

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty() -> Result<(), anyhow::Error> {
        let tmp = temp_path();
        fs::write(&tmp, b"{not json").await?;

        let store = DocStore::<User>::open(&tmp).await?;
        assert_eq!(store.list().await.len(), 0);

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }
}
