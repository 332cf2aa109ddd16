//! HTTP client for the catalog API.
//!
//! [`SkinFetcher`] is the seam between the browse state machine and the
//! network; [`ApiClient`] is the reqwest implementation, tests drive the
//! machine with scripted fakes instead.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use skynova_core::catalog::{normalize_slugs, StatTrakFilter, DEFAULT_CATEGORY};
use skynova_core::filters::CatalogQuery;

/// A catalog item as served by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skin {
    pub id: i64,
    pub slug: String,
    pub weapon: String,
    pub skin: String,
    pub collection: String,
    pub category: String,
    pub price: f64,
    pub discount: i32,
    pub float_value: f64,
    pub exterior: String,
    pub stattrak: bool,
    pub icon: String,
    pub image: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkinPage {
    pub items: Vec<Skin>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct SkinItemEnvelope {
    item: Option<Skin>,
}

#[derive(Debug, Clone, Deserialize)]
struct SkinItemsEnvelope {
    items: Vec<Skin>,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// The listing request a browser snapshot translates to.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    pub query: CatalogQuery,
    pub limit: i64,
    pub offset: i64,
}

impl ListRequest {
    /// Translate into the API's query parameters. Defaults are omitted
    /// the same way the URL codec omits them; `exterior` repeats.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let q = self.query.search.trim();
        if !q.is_empty() {
            params.push(("q", q.to_string()));
        }
        if self.query.category != DEFAULT_CATEGORY && !self.query.category.is_empty() {
            params.push(("category", self.query.category.clone()));
        }
        // Always sent: the server's absent-sort fallback is newest, not
        // the browser default.
        params.push(("sort", self.query.sort.as_str().to_string()));
        if self.query.filters.stat_trak != StatTrakFilter::Any {
            params.push(("statTrak", self.query.filters.stat_trak.as_str().to_string()));
        }
        for exterior in &self.query.filters.exteriors {
            params.push(("exterior", exterior.as_str().to_string()));
        }
        let (min, max) = self.query.filters.price_bounds();
        if let Some(min) = min {
            params.push(("priceMin", min.to_string()));
        }
        if let Some(max) = max {
            params.push(("priceMax", max.to_string()));
        }
        params.push(("limit", self.limit.to_string()));
        params.push(("offset", self.offset.to_string()));

        params
    }
}

/// Fetch seam for the browse state machine.
#[async_trait]
pub trait SkinFetcher: Send + Sync {
    async fn fetch_page(&self, request: &ListRequest) -> Result<SkinPage, ClientError>;

    async fn fetch_by_slug(&self, slug: &str) -> Result<Option<Skin>, ClientError>;

    async fn fetch_by_slugs(&self, slugs: &[String]) -> Result<Vec<Skin>, ClientError>;
}

/// Production [`SkinFetcher`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl SkinFetcher for ApiClient {
    async fn fetch_page(&self, request: &ListRequest) -> Result<SkinPage, ClientError> {
        let response = self
            .http
            .get(self.url("/api/v1/skins"))
            .query(&request.to_params())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn fetch_by_slug(&self, slug: &str) -> Result<Option<Skin>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/api/v1/skins/{slug}")))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        let envelope: SkinItemEnvelope = response.json().await?;
        Ok(envelope.item)
    }

    /// Bulk lookup used to hydrate cart and wishlist entries. Slugs are
    /// normalized client-side too, so a polluted local store never sends
    /// duplicates or blanks over the wire.
    async fn fetch_by_slugs(&self, slugs: &[String]) -> Result<Vec<Skin>, ClientError> {
        let slugs = normalize_slugs(slugs);
        if slugs.is_empty() {
            return Ok(Vec::new());
        }
        let params: Vec<(&str, &str)> = slugs.iter().map(|s| ("slug", s.as_str())).collect();
        let response = self
            .http
            .get(self.url("/api/v1/skins/by-slugs"))
            .query(&params)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        let envelope: SkinItemsEnvelope = response.json().await?;
        Ok(envelope.items)
    }
}
