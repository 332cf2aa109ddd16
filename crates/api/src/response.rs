//! Wire envelope types for the skins API.
//!
//! The catalog endpoints use flat envelopes (`{items, total, limit,
//! offset}` for listings, `{item}` / `{items}` for lookups). Typed
//! structs are used instead of ad-hoc `serde_json::json!` so the wire
//! shape is checked at compile time.

use serde::Serialize;
use skynova_db::models::skin::{Skin, SkinPage};

/// Listing envelope: one page of results plus the filtered total and
/// the clamped pagination window that produced it.
#[derive(Debug, Serialize)]
pub struct SkinListResponse {
    pub items: Vec<Skin>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

impl SkinListResponse {
    /// The degraded envelope returned on backend failure: same shape,
    /// empty result set.
    pub fn empty(limit: i64, offset: i64) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            limit,
            offset,
        }
    }
}

impl From<SkinPage> for SkinListResponse {
    fn from(page: SkinPage) -> Self {
        Self {
            items: page.items,
            total: page.total,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

/// Single lookup envelope. `item` is `null` for unknown slugs and on
/// backend failure; the status code carries the distinction.
#[derive(Debug, Serialize)]
pub struct SkinItemResponse {
    pub item: Option<Skin>,
}

/// Bulk lookup envelope.
#[derive(Debug, Serialize)]
pub struct SkinItemsResponse {
    pub items: Vec<Skin>,
}
