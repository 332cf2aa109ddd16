//! Wishlist over a [`KeyValueStore`].
//!
//! A deduplicated, order-preserving set of slugs. `toggle` is an
//! involution: toggling the same slug twice restores the original state.

use crate::cart::write_json;
use crate::storage::KeyValueStore;

pub const WISHLIST_KEY: &str = "skynova.wishlist";

#[derive(Debug)]
pub struct Wishlist<S> {
    store: S,
    slugs: Vec<String>,
}

impl<S: KeyValueStore> Wishlist<S> {
    /// Load the wishlist from the store. Missing or malformed data
    /// yields an empty wishlist rather than an error.
    pub fn load(store: S) -> Self {
        let slugs = read_slugs(&store, WISHLIST_KEY);
        Self { store, slugs }
    }

    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    pub fn count(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s == slug)
    }

    /// Add the slug if absent, remove it if present. Returns whether the
    /// slug is a member afterwards. Blank slugs are ignored.
    pub fn toggle(&mut self, slug: &str) -> bool {
        let slug = slug.trim();
        if slug.is_empty() {
            return false;
        }
        let member = if self.contains(slug) {
            self.slugs.retain(|s| s != slug);
            false
        } else {
            self.slugs.push(slug.to_string());
            true
        };
        self.persist();
        member
    }

    /// Remove a slug; no-op when it is not a member.
    pub fn remove(&mut self, slug: &str) {
        let before = self.slugs.len();
        self.slugs.retain(|s| s != slug);
        if self.slugs.len() != before {
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        if !self.slugs.is_empty() {
            self.slugs.clear();
            self.persist();
        }
    }

    /// Re-read the backing store, dropping unpersisted state.
    pub fn reload(&mut self) {
        self.slugs = read_slugs(&self.store, WISHLIST_KEY);
    }

    fn persist(&mut self) {
        write_json(&mut self.store, WISHLIST_KEY, &self.slugs);
    }
}

fn read_slugs<S: KeyValueStore>(store: &S, key: &str) -> Vec<String> {
    let raw: Vec<String> = match store.get(key) {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_default(),
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!(error = %err, key, "Failed to read local store");
            Vec::new()
        }
    };

    // Trim, drop blanks, dedupe preserving first-occurrence order.
    let mut out: Vec<String> = Vec::new();
    for slug in raw {
        let trimmed = slug.trim();
        if trimmed.is_empty() || out.iter().any(|s| s == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}
