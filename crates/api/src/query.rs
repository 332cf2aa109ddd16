//! Query parameter types for the skins API.
//!
//! Parameters are accepted as raw strings and converted leniently:
//! malformed numeric values are ignored and out-of-range pagination is
//! clamped downstream, never rejected with a 400. Repeatable keys
//! (`exterior`, `slug`) require `axum_extra::extract::Query`, which
//! collects repeated parameters into a `Vec`.

use serde::Deserialize;
use skynova_core::catalog::{Exterior, SortKey, StatTrakFilter, DEFAULT_CATEGORY};
use skynova_db::models::skin::SkinListQuery;

/// Raw query parameters for `GET /skins`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSkinsParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub stat_trak: Option<String>,
    /// Repeatable: `?exterior=Factory+New&exterior=Minimal+Wear`.
    #[serde(default)]
    pub exterior: Vec<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListSkinsParams {
    /// Resolve the raw parameters into a repository query.
    ///
    /// - blank search means no search filter;
    /// - `All` (or absent) category means no category filter;
    /// - unknown sort keys fall back to newest-first;
    /// - unknown exterior labels are dropped;
    /// - non-numeric prices, limits, and offsets are ignored.
    pub fn into_query(self) -> SkinListQuery {
        let search = self
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        let category = self
            .category
            .filter(|c| !c.is_empty() && c != DEFAULT_CATEGORY);

        let sort = self.sort.as_deref().and_then(SortKey::parse);

        let stattrak = self
            .stat_trak
            .as_deref()
            .map(StatTrakFilter::parse)
            .unwrap_or_default()
            .as_bool();

        let exteriors = self
            .exterior
            .iter()
            .filter_map(|v| Exterior::parse(v.trim()))
            .collect();

        SkinListQuery {
            search,
            category,
            stattrak,
            exteriors,
            price_min: parse_f64(self.price_min.as_deref()),
            price_max: parse_f64(self.price_max.as_deref()),
            sort,
            limit: parse_i64(self.limit.as_deref()),
            offset: parse_i64(self.offset.as_deref()),
        }
    }
}

/// Raw query parameters for `GET /skins/by-slugs`.
#[derive(Debug, Default, Deserialize)]
pub struct BySlugsParams {
    /// Repeatable: `?slug=a&slug=b`.
    #[serde(default)]
    pub slug: Vec<String>,
}

fn parse_f64(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn parse_i64(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_all_inputs_mean_no_filter() {
        let params = ListSkinsParams {
            q: Some("   ".to_string()),
            category: Some("All".to_string()),
            ..Default::default()
        };
        let query = params.into_query();
        assert_eq!(query.search, None);
        assert_eq!(query.category, None);
    }

    #[test]
    fn non_numeric_values_are_ignored_not_rejected() {
        let params = ListSkinsParams {
            price_min: Some("cheap".to_string()),
            price_max: Some("1000".to_string()),
            limit: Some("lots".to_string()),
            offset: Some("-nan".to_string()),
            ..Default::default()
        };
        let query = params.into_query();
        assert_eq!(query.price_min, None);
        assert_eq!(query.price_max, Some(1000.0));
        assert_eq!(query.limit, None);
        assert_eq!(query.offset, None);
    }

    #[test]
    fn infinite_prices_are_dropped() {
        let params = ListSkinsParams {
            price_min: Some("inf".to_string()),
            ..Default::default()
        };
        assert_eq!(params.into_query().price_min, None);
    }

    #[test]
    fn unknown_enum_values_degrade_gracefully() {
        let params = ListSkinsParams {
            sort: Some("cheapest".to_string()),
            stat_trak: Some("definitely".to_string()),
            exterior: vec!["Factory New".to_string(), "Shiny".to_string()],
            ..Default::default()
        };
        let query = params.into_query();
        assert_eq!(query.sort, None, "unknown sort falls back to newest");
        assert_eq!(query.stattrak, None);
        assert_eq!(query.exteriors, vec![Exterior::FactoryNew]);
    }

    #[test]
    fn stattrak_tri_state_maps_to_bool() {
        let only = ListSkinsParams {
            stat_trak: Some("only".to_string()),
            ..Default::default()
        };
        assert_eq!(only.into_query().stattrak, Some(true));

        let without = ListSkinsParams {
            stat_trak: Some("without".to_string()),
            ..Default::default()
        };
        assert_eq!(without.into_query().stattrak, Some(false));
    }

    #[test]
    fn numeric_strings_pass_through() {
        let params = ListSkinsParams {
            limit: Some(" 25 ".to_string()),
            offset: Some("40".to_string()),
            ..Default::default()
        };
        let query = params.into_query();
        assert_eq!(query.limit, Some(25));
        assert_eq!(query.offset, Some(40));
    }
}
