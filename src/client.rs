use crate::config;
use crate::parsing::BandcampParser;
use crate::r#trait::BandcampClient;
use crate::types::{CollectionItem, FanPageData};
use crate::{BandcampError, Result};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use scraper::Html;
use std::sync::Arc;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

/// Concrete [`BandcampClient`] over any HTTP implementation.
///
/// Holds no session state; every Bandcamp page this crate touches is
/// public, so requests differ only in method and body.
///
/// # Examples
///
/// ```rust,no_run
/// use bandcamp_locations::{BandcampClient, BandcampClientImpl};
///
/// # tokio_test::block_on(async {
/// let http_client = http_client::native::NativeClient::new();
/// let client = BandcampClientImpl::new(Box::new(http_client));
///
/// let page = client.fetch_fan_page("somefan").await?;
/// println!("fan id: {}", page.fan_data.fan_id);
/// # Ok::<(), bandcamp_locations::BandcampError>(())
/// # });
/// ```
pub struct BandcampClientImpl {
    client: Arc<dyn HttpClient + Send + Sync>,
    base_url: String,
    parser: BandcampParser,
}

impl BandcampClientImpl {
    /// Create a new [`BandcampClientImpl`] against the public site.
    ///
    /// # Arguments
    ///
    /// * `client` - Any HTTP client implementation that implements [`HttpClient`]
    pub fn new(client: Box<dyn HttpClient + Send + Sync>) -> Self {
        Self::with_base_url(client, config::BASE_URL.to_string())
    }

    /// Create a new [`BandcampClientImpl`] with a custom base URL.
    ///
    /// This is useful for testing against a local server.
    pub fn with_base_url(client: Box<dyn HttpClient + Send + Sync>, base_url: String) -> Self {
        Self {
            client: Arc::from(client),
            base_url,
            parser: BandcampParser::new(),
        }
    }

    /// The base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str) -> Result<String> {
        let parsed = url
            .parse::<Url>()
            .map_err(|e| BandcampError::Http(format!("invalid URL {url}: {e}")))?;

        let mut request = Request::new(Method::Get, parsed);
        request.insert_header("User-Agent", USER_AGENT);
        request.insert_header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        );
        request.insert_header("Accept-Language", "en-US,en;q=0.9");

        self.send(url, request).await
    }

    async fn post_json(&self, url: &str, payload: &serde_json::Value) -> Result<String> {
        let parsed = url
            .parse::<Url>()
            .map_err(|e| BandcampError::Http(format!("invalid URL {url}: {e}")))?;

        let mut request = Request::new(Method::Post, parsed);
        request.insert_header("User-Agent", USER_AGENT);
        request.insert_header("Accept", "application/json");
        request.insert_header("Content-Type", "application/json");
        request.set_body(payload.to_string());

        self.send(url, request).await
    }

    async fn send(&self, url: &str, request: Request) -> Result<String> {
        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| BandcampError::Http(e.to_string()))?;

        log::debug!("{} -> {}", url, response.status());

        if !response.status().is_success() {
            return Err(BandcampError::Http(format!(
                "unexpected status {} for {url}",
                response.status()
            )));
        }

        response
            .body_string()
            .await
            .map_err(|e| BandcampError::Http(e.to_string()))
    }
}

#[async_trait(?Send)]
impl BandcampClient for BandcampClientImpl {
    async fn fetch_fan_page(&self, username: &str) -> Result<FanPageData> {
        let url = config::profile_url(&self.base_url, username);
        log::debug!("Fetching fan page {url}");

        let html = self.get(&url).await?;
        let document = Html::parse_document(&html);

        let blob = self.parser.extract_page_data(&document)?;
        self.parser.parse_fan_page(&blob)
    }

    async fn fetch_collection_items(
        &self,
        fan_id: u64,
        older_than_token: &str,
        count: u32,
    ) -> Result<Vec<CollectionItem>> {
        let url = config::collection_api_url(&self.base_url);
        let payload = serde_json::json!({
            "fan_id": fan_id,
            "older_than_token": older_than_token,
            "count": count,
        });

        log::debug!("Requesting up to {count} collection items older than {older_than_token}");
        let body = self.post_json(&url, &payload).await?;
        self.parser.parse_collection_response(&body)
    }

    async fn fetch_band_location(&self, band_url: &str) -> Option<String> {
        let html = match self.get(band_url).await {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Failed to fetch band page {band_url}: {e}");
                return None;
            }
        };

        let document = Html::parse_document(&html);
        let location = self.parser.parse_band_location(&document);
        if location.is_none() {
            log::debug!("No location element on {band_url}");
        }
        location
    }
}
