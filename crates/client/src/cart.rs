//! Shopping cart over a [`KeyValueStore`].
//!
//! Lines are deduplicated by slug and quantities are floored at one.
//! Stored data is normalized on every load, so a polluted store (blank
//! slugs, zero quantities, duplicate lines) heals itself.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StoreError};

pub const CART_KEY: &str = "skynova.cart";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub slug: String,
    pub qty: u32,
}

#[derive(Debug)]
pub struct Cart<S> {
    store: S,
    lines: Vec<CartLine>,
}

impl<S: KeyValueStore> Cart<S> {
    /// Load the cart from the store. Missing or malformed data yields an
    /// empty cart rather than an error.
    pub fn load(store: S) -> Self {
        let lines = read_lines(&store, CART_KEY);
        Self { store, lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines (the cart badge).
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.lines.iter().any(|l| l.slug == slug)
    }

    /// Add `qty` of a skin, merging with an existing line for the same
    /// slug. Blank slugs are ignored; `qty` is floored at one.
    pub fn add(&mut self, slug: &str, qty: u32) {
        let slug = slug.trim();
        if slug.is_empty() {
            return;
        }
        let qty = qty.max(1);
        match self.lines.iter_mut().find(|l| l.slug == slug) {
            Some(line) => line.qty = line.qty.saturating_add(qty),
            None => self.lines.push(CartLine {
                slug: slug.to_string(),
                qty,
            }),
        }
        self.persist();
    }

    /// Set the quantity of an existing line; no-op for unknown slugs.
    pub fn set_qty(&mut self, slug: &str, qty: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.slug == slug) {
            line.qty = qty.max(1);
            self.persist();
        }
    }

    pub fn remove(&mut self, slug: &str) {
        let before = self.lines.len();
        self.lines.retain(|l| l.slug != slug);
        if self.lines.len() != before {
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            self.lines.clear();
            self.persist();
        }
    }

    /// Re-read the backing store, dropping unpersisted state. This is
    /// the cross-tab sync analog: last write wins.
    pub fn reload(&mut self) {
        self.lines = read_lines(&self.store, CART_KEY);
    }

    fn persist(&mut self) {
        write_json(&mut self.store, CART_KEY, &self.lines);
    }
}

fn read_lines<S: KeyValueStore>(store: &S, key: &str) -> Vec<CartLine> {
    let raw: Vec<CartLine> = match store.get(key) {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_default(),
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!(error = %err, key, "Failed to read local store");
            Vec::new()
        }
    };
    normalize_lines(raw)
}

fn normalize_lines(raw: Vec<CartLine>) -> Vec<CartLine> {
    let mut out: Vec<CartLine> = Vec::new();
    for line in raw {
        let slug = line.slug.trim().to_string();
        if slug.is_empty() {
            continue;
        }
        let qty = line.qty.max(1);
        match out.iter_mut().find(|l| l.slug == slug) {
            Some(existing) => existing.qty = existing.qty.saturating_add(qty),
            None => out.push(CartLine { slug, qty }),
        }
    }
    out
}

pub(crate) fn write_json<S, T>(store: &mut S, key: &str, value: &T)
where
    S: KeyValueStore,
    T: Serialize,
{
    match serde_json::to_value(value) {
        Ok(json) => {
            if let Err(err) = store.set(key, &json) {
                report_write_failure(key, &err);
            }
        }
        Err(err) => report_write_failure(key, &StoreError::Json(err)),
    }
}

fn report_write_failure(key: &str, err: &StoreError) {
    tracing::warn!(error = %err, key, "Failed to persist local store");
}
