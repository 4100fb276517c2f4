//! Band URL deduplication and the bounded location fan-out.

use crate::config;
use crate::r#trait::BandcampClient;
use crate::token::PaginationToken;
use crate::types::{CollectionItem, LocationRow};
use crate::Result;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;

/// Collect the unique band URLs referenced by a set of collection items.
///
/// Items without a band URL are skipped. First-seen order is kept so
/// runs are reproducible, though nothing downstream depends on it.
pub fn dedup_band_urls<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CollectionItem>,
{
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for item in items {
        if let Some(band_url) = item.band_url.as_deref() {
            if seen.insert(band_url.to_string()) {
                urls.push(band_url.to_string());
            }
        }
    }

    urls
}

/// Resolve the location of every band URL with a bounded worker pool.
///
/// Purely data-parallel: each URL owns its own request/response
/// lifecycle and a failure only affects its own row. Always returns one
/// row per input URL.
pub async fn resolve_locations(
    client: &dyn BandcampClient,
    urls: &[String],
    workers: usize,
) -> Vec<LocationRow> {
    let progress = ProgressBar::new(urls.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} band pages ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    let progress = &progress;
    let rows: Vec<LocationRow> = stream::iter(urls.iter().map(|url| async move {
        let location = client.fetch_band_location(url).await;
        progress.inc(1);
        LocationRow {
            url: url.clone(),
            location,
        }
    }))
    .buffer_unordered(workers.max(1))
    .collect()
    .await;

    progress.finish();
    rows
}

/// Run the full pipeline for one fan: bootstrap, paginate, dedup, resolve.
///
/// Bootstrap failures propagate; a failed collection request is logged
/// and the run degrades to the items cached in the page itself.
///
/// # Examples
///
/// ```rust,no_run
/// use bandcamp_locations::{resolve, BandcampClientImpl};
///
/// # tokio_test::block_on(async {
/// let client = BandcampClientImpl::new(Box::new(http_client::native::NativeClient::new()));
/// let rows = resolve::collect_locations(&client, "somefan", 3).await?;
/// println!("{} band pages resolved", rows.len());
/// # Ok::<(), bandcamp_locations::BandcampError>(())
/// # });
/// ```
pub async fn collect_locations(
    client: &dyn BandcampClient,
    username: &str,
    workers: usize,
) -> Result<Vec<LocationRow>> {
    let page = client.fetch_fan_page(username).await?;
    let fan_id = page.fan_data.fan_id;
    let cached: Vec<CollectionItem> = page.item_cache.collection.into_values().collect();

    let api_items = match PaginationToken::newest(&cached) {
        Some(token) => {
            match client
                .fetch_collection_items(fan_id, &token.to_string(), config::COLLECTION_PAGE_COUNT)
                .await
            {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("Collection request for fan {fan_id} failed: {e}");
                    Vec::new()
                }
            }
        }
        None => {
            log::warn!("No dateable items in the page cache, skipping the collection request");
            Vec::new()
        }
    };

    let urls = dedup_band_urls(cached.iter().chain(api_items.iter()));
    log::info!(
        "fan {fan_id}: {} cached + {} fetched items, {} unique band pages",
        cached.len(),
        api_items.len(),
        urls.len()
    );

    Ok(resolve_locations(client, &urls, workers).await)
}
