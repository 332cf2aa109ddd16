//! Repository for the `skins` table.
//!
//! Implements the catalog filter/sort/pagination pipeline: one filtered,
//! sorted, ranged SELECT plus a COUNT sharing the same WHERE clause so
//! `total` always matches the filter set.

use sqlx::PgPool;

use skynova_core::catalog::{
    build_search_pattern, clamp_limit, clamp_offset, SortKey, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};

use crate::models::skin::{Skin, SkinListQuery, SkinPage};

/// Column list for the `skins` table.
const COLUMNS: &str = "id, slug, weapon, skin, collection, category, price, discount, \
    float_value, exterior, stattrak, icon, image, created_at";

/// Shared WHERE clause for listing and counting. Every filter is bound,
/// with `IS NULL` guards disabling the ones that are absent.
const LIST_WHERE: &str = "\
    ($1::TEXT IS NULL OR weapon ILIKE $1 OR skin ILIKE $1 OR collection ILIKE $1) \
    AND ($2::TEXT IS NULL OR category = $2) \
    AND ($3::BOOLEAN IS NULL OR stattrak = $3) \
    AND ($4::TEXT[] IS NULL OR exterior = ANY($4)) \
    AND ($5::DOUBLE PRECISION IS NULL OR price >= $5) \
    AND ($6::DOUBLE PRECISION IS NULL OR price <= $6)";

/// ORDER BY fragment for a sort key. The row id tiebreaker keeps
/// offset-based pagination deterministic when the sort column ties.
fn order_clause(sort: Option<SortKey>) -> &'static str {
    match sort {
        Some(SortKey::Best) => "discount ASC, id ASC",
        Some(SortKey::PriceLow) => "price ASC, id ASC",
        Some(SortKey::PriceHigh) => "price DESC, id ASC",
        Some(SortKey::Newest) | None => "created_at DESC, id ASC",
    }
}

/// Provides read operations for catalog items.
pub struct SkinRepo;

impl SkinRepo {
    /// Execute a catalog listing query: filtered page plus filtered total.
    pub async fn list(pool: &PgPool, query: &SkinListQuery) -> Result<SkinPage, sqlx::Error> {
        let limit = clamp_limit(query.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(query.offset);

        let pattern = query.search.as_deref().and_then(build_search_pattern);
        let exteriors: Option<Vec<String>> = if query.exteriors.is_empty() {
            None
        } else {
            Some(query.exteriors.iter().map(|e| e.as_str().to_string()).collect())
        };

        let page_sql = format!(
            "SELECT {COLUMNS} FROM skins WHERE {LIST_WHERE} \
             ORDER BY {} LIMIT $7 OFFSET $8",
            order_clause(query.sort)
        );
        let items = sqlx::query_as::<_, Skin>(&page_sql)
            .bind(&pattern)
            .bind(&query.category)
            .bind(query.stattrak)
            .bind(&exteriors)
            .bind(query.price_min)
            .bind(query.price_max)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM skins WHERE {LIST_WHERE}");
        let total = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(&pattern)
            .bind(&query.category)
            .bind(query.stattrak)
            .bind(&exteriors)
            .bind(query.price_min)
            .bind(query.price_max)
            .fetch_one(pool)
            .await?;

        Ok(SkinPage {
            items,
            total,
            limit,
            offset,
        })
    }

    /// Find a skin by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Skin>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM skins WHERE slug = $1");
        sqlx::query_as::<_, Skin>(&sql)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Bulk lookup by slug. Missing slugs are simply absent from the
    /// result; callers normalize and cap the input list beforehand.
    pub async fn find_by_slugs(pool: &PgPool, slugs: &[String]) -> Result<Vec<Skin>, sqlx::Error> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!("SELECT {COLUMNS} FROM skins WHERE slug = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Skin>(&sql)
            .bind(slugs)
            .fetch_all(pool)
            .await
    }
}
