use crate::types::{CollectionItem, FanPageData};
use crate::Result;
use async_trait::async_trait;

/// Trait for the Bandcamp network operations, mockable for testing.
///
/// This abstracts the three requests the pipeline makes so the whole
/// flow can be exercised without the network.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides
/// `MockBandcampClient` that implements this trait using the `mockall`
/// library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait BandcampClient {
    /// Fetch a fan's profile page and parse its embedded bootstrap state.
    ///
    /// Fails when the page cannot be fetched, carries no page data blob,
    /// or the blob does not deserialize.
    async fn fetch_fan_page(&self, username: &str) -> Result<FanPageData>;

    /// Request the fan's full collection from the collection API.
    ///
    /// `older_than_token` is the rendered [`PaginationToken`](crate::PaginationToken)
    /// of the newest item already known; `count` bounds the response size.
    async fn fetch_collection_items(
        &self,
        fan_id: u64,
        older_than_token: &str,
        count: u32,
    ) -> Result<Vec<CollectionItem>>;

    /// Fetch a band page and extract its location string.
    ///
    /// Transport failures and pages without a location both yield `None`;
    /// the caller keeps the row either way.
    async fn fetch_band_location(&self, band_url: &str) -> Option<String>;
}
