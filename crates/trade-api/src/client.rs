use async_trait::async_trait;
use reqwest::{Request, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use trade_core::{Page, Region, SearchCondition, Trade};

use crate::envelope;
use crate::error::ApiError;
use crate::params::{DistrictParams, FrequentParams, HistoryParams, SearchParams};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const SEARCH_ENDPOINT: &str = "/api/v1/apt-trades";
const HISTORY_ENDPOINT: &str = "/api/v1/apt-trades/history";
const FREQUENT_ENDPOINT: &str = "/api/v1/apt-trades/risky";
const PROVINCES_ENDPOINT: &str = "/api/v1/lawd/si";
const DISTRICTS_ENDPOINT: &str = "/api/v1/lawd/gu";

/// Everything the client application needs from the backend.
///
/// One call is one GET: no retries, no caching.
#[async_trait]
pub trait TradeApi: Send + Sync {
    /// One page of trades matching `condition`.
    async fn search(&self, condition: &SearchCondition) -> Result<Page<Trade>, ApiError>;

    /// Every recorded trade of one apartment complex.
    async fn history(&self, apartment_name: &str, dong: Option<&str>)
        -> Result<Vec<Trade>, ApiError>;

    /// Apartments traded at least `min_count` times in the last `months`.
    async fn frequent_trades(
        &self,
        region_code: &str,
        months: u32,
        min_count: u32,
    ) -> Result<Vec<Trade>, ApiError>;

    async fn provinces(&self) -> Result<Vec<Region>, ApiError>;

    async fn districts(&self, province_code: &str) -> Result<Vec<Region>, ApiError>;
}

/// `TradeApi` over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTradeApi {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpTradeApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;

        Ok(Self {
            base_url: trimmed.to_string(),
            http_client: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET for `endpoint` with `query` serialized into the URL.
    pub fn build_get<Q>(&self, endpoint: &str, query: &Q) -> Result<Request, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        Ok(self.http_client.get(url).query(query).build()?)
    }

    pub fn search_request(&self, condition: &SearchCondition) -> Result<Request, ApiError> {
        self.build_get(SEARCH_ENDPOINT, &SearchParams::from(condition))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        debug!(url = %request.url(), "GET");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = envelope::error_message(&body);
            warn!(status = status.as_u16(), message = ?message, "request failed");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        envelope::into_data(status.as_u16(), &body)
    }
}

#[async_trait]
impl TradeApi for HttpTradeApi {
    async fn search(&self, condition: &SearchCondition) -> Result<Page<Trade>, ApiError> {
        let request = self.search_request(condition)?;
        let page: Page<Trade> = self.execute(request).await?;
        debug!(
            items = page.items.len(),
            total = page.total_item_count,
            page = page.page_index,
            "search returned"
        );
        Ok(page)
    }

    async fn history(
        &self,
        apartment_name: &str,
        dong: Option<&str>,
    ) -> Result<Vec<Trade>, ApiError> {
        let params = HistoryParams {
            apartment_name,
            dong: dong.filter(|d| !d.is_empty()),
        };
        let request = self.build_get(HISTORY_ENDPOINT, &params)?;
        self.execute(request).await
    }

    async fn frequent_trades(
        &self,
        region_code: &str,
        months: u32,
        min_count: u32,
    ) -> Result<Vec<Trade>, ApiError> {
        let params = FrequentParams {
            lawd_code: region_code,
            months,
            min_transaction_count: min_count,
        };
        let request = self.build_get(FREQUENT_ENDPOINT, &params)?;
        self.execute(request).await
    }

    async fn provinces(&self) -> Result<Vec<Region>, ApiError> {
        let url = format!("{}{}", self.base_url, PROVINCES_ENDPOINT);
        let request = self.http_client.get(url).build()?;
        self.execute(request).await
    }

    async fn districts(&self, province_code: &str) -> Result<Vec<Region>, ApiError> {
        let params = DistrictParams {
            si_code: province_code,
        };
        let request = self.build_get(DISTRICTS_ENDPOINT, &params)?;
        self.execute(request).await
    }
}
