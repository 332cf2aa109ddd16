//! Integration tests for the skin repository.
//!
//! Exercises the catalog filter/sort/pagination pipeline against a real
//! database. The seed migration provides 30 known rows: categories and
//! exteriors cycle, every third row is StatTrak, prices run from 50000
//! upward in 15000 steps, and created_at is staggered per row.

use sqlx::PgPool;

use skynova_core::catalog::{Exterior, SortKey};
use skynova_db::models::skin::SkinListQuery;
use skynova_db::repositories::SkinRepo;

fn query() -> SkinListQuery {
    SkinListQuery::default()
}

// ---------------------------------------------------------------------------
// Seed + defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn default_listing_returns_first_page_of_seed(pool: PgPool) {
    let page = SkinRepo::list(&pool, &query()).await.unwrap();

    assert_eq!(page.total, 30, "seed migration provides 30 skins");
    assert_eq!(page.items.len(), 20, "default limit is 20");
    assert_eq!(page.limit, 20);
    assert_eq!(page.offset, 0);

    // Default ordering is newest first; row 1 has the freshest created_at.
    assert_eq!(page.items[0].slug, "stattrak-ump-45-howl-collection-1");
}

// ---------------------------------------------------------------------------
// Limit / offset clamping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn limit_and_offset_are_clamped(pool: PgPool) {
    let mut q = query();
    q.limit = Some(-5);
    q.offset = Some(-10);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.limit, 1);
    assert_eq!(page.offset, 0);
    assert_eq!(page.items.len(), 1);

    let mut q = query();
    q.limit = Some(500);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.limit, 50, "limit is capped at 50");
    assert_eq!(page.items.len(), 30, "only 30 rows exist");
}

#[sqlx::test(migrations = "./migrations")]
async fn offset_past_the_end_yields_empty_page_with_total(pool: PgPool) {
    let mut q = query();
    q.offset = Some(1000);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 30);
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn search_is_case_insensitive_across_name_fields(pool: PgPool) {
    let mut q = query();
    q.search = Some("hOwL".to_string());
    q.limit = Some(50);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 30, "every seeded row is from the Howl collection");

    let mut q = query();
    q.search = Some("ump-45".to_string());
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 30, "weapon names match too");
}

#[sqlx::test(migrations = "./migrations")]
async fn search_treats_like_metacharacters_literally(pool: PgPool) {
    let mut q = query();
    q.search = Some("100%".to_string());
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 0, "a literal percent sign matches nothing");
    assert!(page.items.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn category_filter_is_exact(pool: PgPool) {
    let mut q = query();
    q.category = Some("Rifles".to_string());
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 3);
    assert!(page.items.iter().all(|s| s.category == "Rifles"));

    let mut q = query();
    q.category = Some("Rifle".to_string());
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 0, "no prefix matching on category");
}

#[sqlx::test(migrations = "./migrations")]
async fn stattrak_tri_state_filters_both_ways(pool: PgPool) {
    let mut q = query();
    q.stattrak = Some(true);
    q.limit = Some(50);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 10, "every third seeded row is StatTrak");
    assert!(page.items.iter().all(|s| s.stattrak));

    q.stattrak = Some(false);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 20);
    assert!(page.items.iter().all(|s| !s.stattrak));
}

#[sqlx::test(migrations = "./migrations")]
async fn exterior_filter_accepts_multiple_values(pool: PgPool) {
    let mut q = query();
    q.exteriors = vec![Exterior::FactoryNew, Exterior::MinimalWear];
    q.limit = Some(50);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 12, "6 rows per exterior in the 30-row seed");
    assert!(page
        .items
        .iter()
        .all(|s| s.exterior == "Factory New" || s.exterior == "Minimal Wear"));
}

#[sqlx::test(migrations = "./migrations")]
async fn price_bounds_are_inclusive(pool: PgPool) {
    let mut q = query();
    q.price_min = Some(50000.0);
    q.price_max = Some(50000.0);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].price, 50000.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn conjunctive_filters_and_empty_result_is_not_an_error(pool: PgPool) {
    // The documented example: Howl + Rifles + price [10, 1000].
    let mut q = query();
    q.search = Some("Howl".to_string());
    q.category = Some("Rifles".to_string());
    q.price_min = Some(10.0);
    q.price_max = Some(1000.0);

    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());

    // Widening the price range brings the three rifles back.
    q.price_max = Some(1_000_000.0);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.total, 3);
}

// ---------------------------------------------------------------------------
// Sorting and pagination determinism
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn best_deal_sorts_by_discount_ascending(pool: PgPool) {
    let mut q = query();
    q.sort = Some(SortKey::Best);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    // Seed discounts run from -1 (row 1) to -30 (row 30).
    assert_eq!(page.items[0].discount, -30);
    assert_eq!(page.items[0].slug, "ump-45-howl-collection-30");
}

#[sqlx::test(migrations = "./migrations")]
async fn price_sorts_run_both_directions(pool: PgPool) {
    let mut q = query();
    q.sort = Some(SortKey::PriceLow);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.items[0].price, 50000.0);

    q.sort = Some(SortKey::PriceHigh);
    let page = SkinRepo::list(&pool, &q).await.unwrap();
    assert_eq!(page.items[0].price, 50000.0 + 29.0 * 15000.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn paging_never_duplicates_or_drops_rows(pool: PgPool) {
    let mut seen = Vec::new();
    for page_index in 0..3 {
        let mut q = query();
        q.sort = Some(SortKey::PriceLow);
        q.limit = Some(10);
        q.offset = Some(page_index * 10);
        let page = SkinRepo::list(&pool, &q).await.unwrap();
        assert_eq!(page.items.len(), 10);
        seen.extend(page.items.into_iter().map(|s| s.slug));
    }

    let unique: std::collections::HashSet<_> = seen.iter().cloned().collect();
    assert_eq!(seen.len(), 30, "three pages of ten cover the whole seed");
    assert_eq!(unique.len(), 30, "no row appears twice across pages");
}

// ---------------------------------------------------------------------------
// Slug lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn find_by_slug_hits_and_misses(pool: PgPool) {
    let skin = SkinRepo::find_by_slug(&pool, "ump-45-howl-collection-2")
        .await
        .unwrap()
        .expect("seeded slug should exist");
    assert_eq!(skin.skin, "Howl");
    assert!(!skin.stattrak);

    let missing = SkinRepo::find_by_slug(&pool, "no-such-skin").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_slugs_returns_existing_rows_only(pool: PgPool) {
    let slugs = vec![
        "ump-45-howl-collection-2".to_string(),
        "no-such-skin".to_string(),
        "stattrak-ump-45-howl-collection-1".to_string(),
    ];
    let skins = SkinRepo::find_by_slugs(&pool, &slugs).await.unwrap();
    assert_eq!(skins.len(), 2);

    // Idempotent: asking again yields the same set.
    let again = SkinRepo::find_by_slugs(&pool, &slugs).await.unwrap();
    let a: Vec<_> = skins.iter().map(|s| &s.slug).collect();
    let b: Vec<_> = again.iter().map(|s| &s.slug).collect();
    assert_eq!(a, b);

    let empty = SkinRepo::find_by_slugs(&pool, &[]).await.unwrap();
    assert!(empty.is_empty());
}
