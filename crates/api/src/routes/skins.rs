//! Route definitions for the skins catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::skins;
use crate::state::AppState;

/// Routes mounted at `/skins`.
///
/// ```text
/// GET /              -> list
/// GET /by-slugs      -> by_slugs
/// GET /{slug}        -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skins::list))
        .route("/by-slugs", get(skins::by_slugs))
        .route("/{slug}", get(skins::get_by_slug))
}
