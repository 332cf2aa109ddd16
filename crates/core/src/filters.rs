//! Draft/committed catalog filter snapshots and their URL codec.
//!
//! The browse UI keeps two immutable snapshots: the committed query
//! (reflected in the URL) and a draft edited in the filter panel before
//! being applied. Both directions of the URL mapping are pure functions,
//! so the URL can be rebuilt from a snapshot and vice versa at any time.
//!
//! Keys are deliberately short (`q`, `cat`, `sort`, `st`, `ex`, `min`,
//! `max`, `currency`, `view`) and default values are omitted, keeping
//! shareable URLs minimal.

use url::form_urlencoded;

use crate::catalog::{
    Currency, Exterior, SortKey, StatTrakFilter, ViewMode, DEFAULT_CATEGORY,
};

/// The filter-panel snapshot: price bounds, exteriors, StatTrak tri-state.
///
/// Price bounds are kept as the raw strings the user typed; they are
/// parsed leniently only when building a backend query, so partially
/// typed input never breaks the draft state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilters {
    pub price_min: String,
    pub price_max: String,
    pub exteriors: Vec<Exterior>,
    pub stat_trak: StatTrakFilter,
}

impl CatalogFilters {
    /// Number of active filter groups (price, exterior, StatTrak), used
    /// for the filter-button badge.
    pub fn active_group_count(&self) -> usize {
        let mut count = 0;
        if !self.price_min.trim().is_empty() || !self.price_max.trim().is_empty() {
            count += 1;
        }
        if !self.exteriors.is_empty() {
            count += 1;
        }
        if self.stat_trak != StatTrakFilter::Any {
            count += 1;
        }
        count
    }

    /// Lenient numeric price bounds. Non-numeric input is ignored.
    pub fn price_bounds(&self) -> (Option<f64>, Option<f64>) {
        (parse_price(&self.price_min), parse_price(&self.price_max))
    }

    /// Normalize the price range before committing a draft: trim both
    /// bounds and swap them if both parse and min exceeds max.
    pub fn normalize_price_range(mut self) -> Self {
        self.price_min = self.price_min.trim().to_string();
        self.price_max = self.price_max.trim().to_string();

        if let (Some(min), Some(max)) = self.price_bounds() {
            if min > max {
                std::mem::swap(&mut self.price_min, &mut self.price_max);
            }
        }
        self
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The full committed browse state reflected in the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub search: String,
    pub category: String,
    pub sort: SortKey,
    pub filters: CatalogFilters,
    pub currency: Currency,
    pub view: ViewMode,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            sort: SortKey::default(),
            filters: CatalogFilters::default(),
            currency: Currency::default(),
            view: ViewMode::default(),
        }
    }
}

impl CatalogQuery {
    /// Serialize into a URL query string, omitting default values.
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());

        let q = self.search.trim();
        if !q.is_empty() {
            ser.append_pair("q", q);
        }
        if self.category != DEFAULT_CATEGORY && !self.category.is_empty() {
            ser.append_pair("cat", &self.category);
        }
        if self.sort != SortKey::default() {
            ser.append_pair("sort", self.sort.as_str());
        }
        if self.filters.stat_trak != StatTrakFilter::Any {
            ser.append_pair("st", self.filters.stat_trak.as_str());
        }
        if !self.filters.exteriors.is_empty() {
            let joined = self
                .filters
                .exteriors
                .iter()
                .map(|e| e.as_str())
                .collect::<Vec<_>>()
                .join(",");
            ser.append_pair("ex", &joined);
        }
        if !self.filters.price_min.trim().is_empty() {
            ser.append_pair("min", self.filters.price_min.trim());
        }
        if !self.filters.price_max.trim().is_empty() {
            ser.append_pair("max", self.filters.price_max.trim());
        }
        if self.currency != Currency::default() {
            ser.append_pair("currency", self.currency.as_str());
        }
        if self.view != ViewMode::default() {
            ser.append_pair("view", self.view.as_str());
        }

        ser.finish()
    }

    /// Parse a URL query string. Unknown keys are ignored and malformed
    /// values fall back to their defaults; this never fails.
    pub fn from_query_string(query: &str) -> Self {
        let mut out = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "q" => out.search = value.trim().to_string(),
                "cat" => {
                    if !value.is_empty() {
                        out.category = value.to_string();
                    }
                }
                "sort" => out.sort = SortKey::parse(&value).unwrap_or_default(),
                "st" => out.filters.stat_trak = StatTrakFilter::parse(&value),
                "ex" => {
                    out.filters.exteriors = value
                        .split(',')
                        .filter_map(|v| Exterior::parse(v.trim()))
                        .collect();
                }
                "min" => out.filters.price_min = value.trim().to_string(),
                "max" => out.filters.price_max = value.trim().to_string(),
                "currency" => out.currency = Currency::parse(&value),
                "view" => out.view = ViewMode::parse(&value),
                _ => {}
            }
        }

        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
