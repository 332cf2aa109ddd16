//! Local key/value persistence for cart and wishlist.
//!
//! The browser analog is localStorage: a small string-keyed JSON store
//! that may be unavailable or broken. [`SafeStore`] reproduces the
//! graceful-degradation contract: the first failing operation flips the
//! store into in-memory-only mode instead of surfacing an error.

use std::cell::Cell;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// String-keyed JSON store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Volatile in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One JSON file per key inside a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        std::fs::write(self.path_for(key), bytes)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Wrapper that degrades to in-memory operation when the inner store
/// fails, so cart and wishlist keep working within the session.
///
/// Writes always land in the in-memory mirror first; the inner store is
/// only consulted while it is still [`available`](Self::is_available).
#[derive(Debug)]
pub struct SafeStore<S> {
    inner: S,
    mirror: MemoryStore,
    available: Cell<bool>,
}

impl<S: KeyValueStore> SafeStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            mirror: MemoryStore::new(),
            available: Cell::new(true),
        }
    }

    /// Whether the backing store is still in use.
    pub fn is_available(&self) -> bool {
        self.available.get()
    }

    fn mark_unavailable(&self, err: &StoreError) {
        if self.available.replace(false) {
            tracing::warn!(error = %err, "Local store failed, falling back to memory");
        }
    }
}

impl<S: KeyValueStore> KeyValueStore for SafeStore<S> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        if self.available.get() {
            match self.inner.get(key) {
                Ok(value) => return Ok(value),
                Err(err) => self.mark_unavailable(&err),
            }
        }
        self.mirror.get(key)
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        self.mirror.set(key, value)?;
        if self.available.get() {
            if let Err(err) = self.inner.set(key, value) {
                self.mark_unavailable(&err);
            }
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.mirror.remove(key)?;
        if self.available.get() {
            if let Err(err) = self.inner.remove(key) {
                self.mark_unavailable(&err);
            }
        }
        Ok(())
    }
}
