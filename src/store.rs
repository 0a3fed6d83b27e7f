use anyhow::{Context, Result, anyhow};
use std::path::Path;

/// Name of the collection holding path-to-URL entries
pub const SHORTS: &str = "shorts";

/// Entries written into a freshly created `shorts` collection
pub const DEFAULT_SHORTS: &[(&str, &str)] = &[
    ("/urlshort", "https://github.com/gophercises/urlshort"),
    (
        "/urlshort-final",
        "https://github.com/gophercises/urlshort/tree/solution",
    ),
];

/// Read access to a durable key-value store organised in named collections
pub trait KeyValueStore: Send + Sync {
    /// Look up `key` in `collection`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Entry found
    /// * `Ok(None)` - Collection exists but has no such key
    /// * `Err(_)` - Collection missing or the read failed
    fn get(&self, collection: &str, key: &str) -> Result<Option<Vec<u8>>>;
}

/// sled-backed store; each collection is a sled tree
#[derive(Clone)]
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Open (or create) the database at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = sled::open(path)
            .with_context(|| format!("Failed to open store at {}", path.display()))?;

        tracing::info!("Opened store at {}", path.display());
        Ok(Self { db })
    }

    /// Open a throwaway database that is removed when dropped
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .context("Failed to open temporary store")?;
        Ok(Self { db })
    }

    fn has_collection(&self, name: &str) -> bool {
        self.db
            .tree_names()
            .iter()
            .any(|existing| existing.as_ref() == name.as_bytes())
    }

    /// Create `name` if it does not exist yet
    ///
    /// Returns `true` when the collection was created by this call.
    pub fn ensure_collection(&self, name: &str) -> Result<bool> {
        if self.has_collection(name) {
            return Ok(false);
        }

        self.db
            .open_tree(name)
            .with_context(|| format!("Failed to create collection {}", name))?;
        tracing::info!("Created collection: {}", name);
        Ok(true)
    }

    /// Insert or overwrite an entry and flush it to disk
    pub fn put(&self, collection: &str, key: &str, value: &str) -> Result<()> {
        let tree = self
            .db
            .open_tree(collection)
            .with_context(|| format!("Failed to open collection {}", collection))?;

        tree.insert(key.as_bytes(), value.as_bytes())
            .with_context(|| format!("Failed to write {} into {}", key, collection))?;
        tree.flush().context("Failed to flush store")?;

        tracing::debug!("Stored {} -> {} in {}", key, value, collection);
        Ok(())
    }

    /// Make sure the `shorts` collection exists
    ///
    /// A collection created by this call is seeded with [`DEFAULT_SHORTS`];
    /// an existing one is left as it is.
    pub fn prepare_shorts(&self) -> Result<()> {
        if !self.ensure_collection(SHORTS)? {
            tracing::info!("Collection already exists: {}", SHORTS);
            return Ok(());
        }

        for (path, url) in DEFAULT_SHORTS {
            self.put(SHORTS, path, url)?;
        }
        tracing::info!("Seeded {} with {} entries", SHORTS, DEFAULT_SHORTS.len());
        Ok(())
    }

    /// Verify the `shorts` collection can be read
    pub fn health_check(&self) -> Result<()> {
        if !self.has_collection(SHORTS) {
            return Err(anyhow!("Collection {} does not exist", SHORTS));
        }

        let tree = self
            .db
            .open_tree(SHORTS)
            .context("Failed to open collection for health check")?;
        tree.first().context("Failed to read from store")?;

        tracing::debug!("Health check read succeeded");
        Ok(())
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, collection: &str, key: &str) -> Result<Option<Vec<u8>>> {
        if !self.has_collection(collection) {
            return Err(anyhow!("Collection {} does not exist", collection));
        }

        let tree = self
            .db
            .open_tree(collection)
            .with_context(|| format!("Failed to open collection {}", collection))?;

        let value = tree
            .get(key.as_bytes())
            .with_context(|| format!("Failed to read {} from {}", key, collection))?;

        Ok(value.map(|v| v.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let store = SledStore::temporary().unwrap();
        store.put(SHORTS, "/go", "https://golang.org").unwrap();

        let value = store.get(SHORTS, "/go").unwrap();
        assert_eq!(value.as_deref(), Some("https://golang.org".as_bytes()));
    }

    #[test]
    fn test_get_missing_key() {
        let store = SledStore::temporary().unwrap();
        store.ensure_collection(SHORTS).unwrap();

        assert_eq!(store.get(SHORTS, "/nothing").unwrap(), None);
    }

    #[test]
    fn test_get_missing_collection_is_error() {
        let store = SledStore::temporary().unwrap();

        let result = store.get(SHORTS, "/go");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(SHORTS));
    }

    #[test]
    fn test_ensure_collection_reports_creation() {
        let store = SledStore::temporary().unwrap();

        assert!(store.ensure_collection(SHORTS).unwrap());
        assert!(!store.ensure_collection(SHORTS).unwrap());
    }

    #[test]
    fn test_prepare_shorts_seeds_new_collection() {
        let store = SledStore::temporary().unwrap();
        store.prepare_shorts().unwrap();

        for (path, url) in DEFAULT_SHORTS {
            let value = store.get(SHORTS, path).unwrap();
            assert_eq!(value.as_deref(), Some(url.as_bytes()));
        }
    }

    #[test]
    fn test_prepare_shorts_keeps_existing_collection() {
        let store = SledStore::temporary().unwrap();
        store.put(SHORTS, "/mine", "https://mine.example").unwrap();

        store.prepare_shorts().unwrap();

        assert_eq!(store.get(SHORTS, "/urlshort").unwrap(), None);
        assert!(store.get(SHORTS, "/mine").unwrap().is_some());
    }

    #[test]
    fn test_health_check() {
        let store = SledStore::temporary().unwrap();
        assert!(store.health_check().is_err());

        store.prepare_shorts().unwrap();
        assert!(store.health_check().is_ok());
    }
}
