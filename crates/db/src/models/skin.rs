//! Catalog item ("skin") model and query DTOs.
//!
//! Skins are read-only from the application's perspective: rows are
//! seeded by migration and there are no create/update/delete paths.

use serde::Serialize;
use skynova_core::catalog::{Exterior, SortKey};
use skynova_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `skins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skin {
    pub id: DbId,
    /// Natural key for lookup and deduplication.
    pub slug: String,
    pub weapon: String,
    pub skin: String,
    pub collection: String,
    pub category: String,
    pub price: f64,
    /// Percent, negative values are reductions.
    pub discount: i32,
    pub float_value: f64,
    /// One of the labels in [`Exterior::ALL`].
    pub exterior: String,
    pub stattrak: bool,
    pub icon: String,
    pub image: String,
    pub created_at: Timestamp,
}

/// Resolved filter set for a catalog listing query.
///
/// All fields are already validated/normalized by the caller; `None`
/// always means "no filter". Limit and offset are clamped in the
/// repository via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Clone, Default)]
pub struct SkinListQuery {
    /// Free-text search, matched case-insensitively against weapon,
    /// skin, and collection.
    pub search: Option<String>,
    pub category: Option<String>,
    pub stattrak: Option<bool>,
    pub exteriors: Vec<Exterior>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    /// `None` falls back to newest-first.
    pub sort: Option<SortKey>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// One page of catalog results plus the filtered total, with the
/// clamped limit/offset actually applied.
#[derive(Debug, Clone, Serialize)]
pub struct SkinPage {
    pub items: Vec<Skin>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
