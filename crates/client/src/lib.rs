//! Client-side state layer for the Skynova catalog.
//!
//! Mirrors what the storefront UI keeps in the browser: the catalog
//! browser state machine (committed query, draft filters, debounced
//! search, incremental result list), the cart and wishlist backed by a
//! local key/value store, and a reqwest client for the HTTP API.
//!
//! The browser never talks to the network directly; it hands out
//! [`browse::FetchTicket`]s and accepts tagged results back, so request
//! cancellation and stale-response suppression are plain state-machine
//! rules rather than task plumbing.

pub mod api;
pub mod browse;
pub mod cart;
pub mod price;
pub mod storage;
pub mod wishlist;

pub use api::{ApiClient, ClientError, ListRequest, Skin, SkinFetcher, SkinPage};
pub use browse::{CatalogBrowser, FetchTicket, SEARCH_DEBOUNCE};
pub use cart::{Cart, CartLine};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SafeStore, StoreError};
pub use wishlist::Wishlist;
