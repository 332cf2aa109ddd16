pub mod health;
pub mod skins;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /skins                 catalog listing (search/filter/sort/pagination)
/// /skins/by-slugs        bulk lookup by slug
/// /skins/{slug}          single lookup by slug
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/skins", skins::router())
}
