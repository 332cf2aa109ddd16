//! Catalog constants and query-input helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API/repository layer and the client state layer.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of catalog items per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum number of catalog items per page.
pub const MAX_PAGE_LIMIT: i64 = 50;

/// Maximum number of slugs accepted by a bulk lookup.
pub const MAX_BULK_SLUGS: usize = 50;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Category meaning "no category filter".
pub const DEFAULT_CATEGORY: &str = "All";

/// Known catalog categories, in display order.
pub const CATEGORIES: &[&str] = &[
    "Rifles",
    "Sniper Rifles",
    "Pistols",
    "Knives",
    "Gloves",
    "Machineguns",
    "SMGs",
    "Shotguns",
    "Agents",
    "Other",
];

// ---------------------------------------------------------------------------
// Exterior
// ---------------------------------------------------------------------------

/// Wear/condition label on a catalog item, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exterior {
    #[serde(rename = "Factory New")]
    FactoryNew,
    #[serde(rename = "Minimal Wear")]
    MinimalWear,
    #[serde(rename = "Field-Tested")]
    FieldTested,
    #[serde(rename = "Well-Worn")]
    WellWorn,
    #[serde(rename = "Battle-Scarred")]
    BattleScarred,
}

impl Exterior {
    /// All exterior labels, best to worst.
    pub const ALL: [Exterior; 5] = [
        Exterior::FactoryNew,
        Exterior::MinimalWear,
        Exterior::FieldTested,
        Exterior::WellWorn,
        Exterior::BattleScarred,
    ];

    /// The label stored in the database and shown in the UI.
    pub fn as_str(self) -> &'static str {
        match self {
            Exterior::FactoryNew => "Factory New",
            Exterior::MinimalWear => "Minimal Wear",
            Exterior::FieldTested => "Field-Tested",
            Exterior::WellWorn => "Well-Worn",
            Exterior::BattleScarred => "Battle-Scarred",
        }
    }

    /// Parse an exterior label. Unknown labels yield `None` and are
    /// silently dropped by callers (graceful degradation over rejection).
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.as_str() == value)
    }
}

// ---------------------------------------------------------------------------
// StatTrak filter
// ---------------------------------------------------------------------------

/// Tri-state filter on the StatTrak variant flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatTrakFilter {
    #[default]
    Any,
    Only,
    Without,
}

impl StatTrakFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatTrakFilter::Any => "any",
            StatTrakFilter::Only => "only",
            StatTrakFilter::Without => "without",
        }
    }

    /// Parse `only` / `without`; anything else means "any".
    pub fn parse(value: &str) -> Self {
        match value {
            "only" => StatTrakFilter::Only,
            "without" => StatTrakFilter::Without,
            _ => StatTrakFilter::Any,
        }
    }

    /// The boolean to match against the `stattrak` column, if any.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            StatTrakFilter::Any => None,
            StatTrakFilter::Only => Some(true),
            StatTrakFilter::Without => Some(false),
        }
    }
}

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Catalog sort key. Every ordering is made deterministic downstream by
/// appending the row id as a tiebreaker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Best deal first (most negative discount).
    #[default]
    Best,
    /// Most recently created first.
    Newest,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Best => "best",
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price_low",
            SortKey::PriceHigh => "price_high",
        }
    }

    /// Parse a sort key. Unknown values yield `None`; the API falls back
    /// to newest-first in that case.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "best" => Some(SortKey::Best),
            "newest" => Some(SortKey::Newest),
            "price_low" => Some(SortKey::PriceLow),
            "price_high" => Some(SortKey::PriceHigh),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Cosmetic display toggles
// ---------------------------------------------------------------------------

/// Display currency. Purely cosmetic: EUR uses a fixed demo rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "eur" => Currency::Eur,
            _ => Currency::Usd,
        }
    }

    /// Fixed demo conversion rate from USD.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => 0.92,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "\u{20ac}",
        }
    }
}

/// Catalog view mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "list" => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }
}

// ---------------------------------------------------------------------------
// Input sanitizing
// ---------------------------------------------------------------------------

/// Escape LIKE metacharacters in user input so a search term is matched
/// literally inside an `ILIKE` pattern.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Build an `ILIKE` pattern from free-text search input.
///
/// Returns `None` for empty or whitespace-only input (meaning: no search
/// filter at all).
pub fn build_search_pattern(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("%{}%", escape_like(trimmed)))
}

/// Normalize a user-supplied slug list for bulk lookup.
///
/// - Trims each slug and drops blanks.
/// - Deduplicates, preserving first-occurrence order.
/// - Caps the result at [`MAX_BULK_SLUGS`].
pub fn normalize_slugs<I, S>(slugs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for slug in slugs {
        let trimmed = slug.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            out.push(trimmed.to_string());
            if out.len() == MAX_BULK_SLUGS {
                break;
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
