//! Handlers for the `/skins` resource.
//!
//! The catalog is read-only: listing with filter/sort/pagination, single
//! lookup by slug, and bulk lookup for cart/wishlist hydration.
//!
//! Error contract: these endpoints never fail the page. A backend error
//! is logged and surfaced as a 500 carrying the normal envelope with an
//! empty result set, so the client renders an empty grid plus a retry
//! affordance. Unknown slugs get a 404 with `item: null`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::Query;

use skynova_core::catalog::{
    clamp_limit, clamp_offset, normalize_slugs, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
use skynova_db::repositories::SkinRepo;

use crate::query::{BySlugsParams, ListSkinsParams};
use crate::response::{SkinItemResponse, SkinItemsResponse, SkinListResponse};
use crate::state::AppState;

/// GET /api/v1/skins
///
/// Paginated catalog listing. Accepts `q`, `category`, `sort`,
/// `statTrak`, repeatable `exterior`, `priceMin`/`priceMax`, `limit`,
/// `offset`; malformed values are ignored or clamped, never rejected.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListSkinsParams>,
) -> impl IntoResponse {
    let query = params.into_query();

    match SkinRepo::list(&state.pool, &query).await {
        Ok(page) => (StatusCode::OK, Json(SkinListResponse::from(page))),
        Err(err) => {
            tracing::error!(error = %err, "Catalog listing query failed");
            let limit = clamp_limit(query.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
            let offset = clamp_offset(query.offset);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SkinListResponse::empty(limit, offset)),
            )
        }
    }
}

/// GET /api/v1/skins/{slug}
///
/// Single catalog item lookup by its natural key. The envelope always
/// has an `item` key; unknown slugs get a 404 with `item: null` rather
/// than an error body, so clients can unconditionally read `.item`.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    match SkinRepo::find_by_slug(&state.pool, &slug).await {
        Ok(Some(skin)) => (StatusCode::OK, Json(SkinItemResponse { item: Some(skin) })),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(SkinItemResponse { item: None }),
        ),
        Err(err) => {
            tracing::error!(error = %err, %slug, "Single skin lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SkinItemResponse { item: None }),
            )
        }
    }
}

/// GET /api/v1/skins/by-slugs?slug=a&slug=b
///
/// Bulk lookup for cart/wishlist hydration. Slugs are trimmed,
/// deduplicated, and capped; missing slugs are simply absent from the
/// result. Zero usable slugs short-circuits without touching the store.
pub async fn by_slugs(
    State(state): State<AppState>,
    Query(params): Query<BySlugsParams>,
) -> impl IntoResponse {
    let slugs = normalize_slugs(&params.slug);
    if slugs.is_empty() {
        return (
            StatusCode::OK,
            Json(SkinItemsResponse { items: Vec::new() }),
        );
    }

    match SkinRepo::find_by_slugs(&state.pool, &slugs).await {
        Ok(items) => (StatusCode::OK, Json(SkinItemsResponse { items })),
        Err(err) => {
            tracing::error!(error = %err, "Bulk slug lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SkinItemsResponse { items: Vec::new() }),
            )
        }
    }
}
