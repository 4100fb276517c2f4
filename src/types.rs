//! Data types for Bandcamp fan collections.
//!
//! This module contains the serde models for the two upstream payloads
//! (the `data-blob` JSON embedded in a fan page and the collection API
//! response) plus the row type assembled by the location fan-out.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Format of the `purchased` field, e.g. `"04 Nov 2022 12:34:56 GMT"`.
const PURCHASED_FORMAT: &str = "%d %b %Y %H:%M:%S GMT";

/// A single item from a fan's collection.
///
/// The same shape appears in two places: the bootstrap `item_cache`
/// embedded in the fan page, and the `items` array returned by the
/// collection API. Only the fields this crate reads are modelled;
/// everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    /// Platform-assigned item identifier
    pub item_id: u64,
    /// Item kind as reported upstream, e.g. "album" or "track"
    pub item_type: String,
    /// Purchase timestamp string, e.g. "04 Nov 2022 12:34:56 GMT"
    ///
    /// Absent on wishlist-only items.
    #[serde(default)]
    pub purchased: Option<String>,
    /// URL of the band/artist page this item belongs to
    ///
    /// Always present on API items; may be absent in older cache entries.
    #[serde(default)]
    pub band_url: Option<String>,
}

impl CollectionItem {
    /// Parse the purchase timestamp into unix seconds.
    ///
    /// Returns `None` when the item has no purchase date or the date does
    /// not match the format Bandcamp emits.
    ///
    /// ```rust
    /// use bandcamp_locations::CollectionItem;
    ///
    /// let item = CollectionItem {
    ///     item_id: 1234,
    ///     item_type: "album".to_string(),
    ///     purchased: Some("04 Nov 2022 12:34:56 GMT".to_string()),
    ///     band_url: None,
    /// };
    /// assert_eq!(item.purchased_unix(), Some(1667565296));
    /// ```
    pub fn purchased_unix(&self) -> Option<i64> {
        let purchased = self.purchased.as_deref()?;
        NaiveDateTime::parse_from_str(purchased, PURCHASED_FORMAT)
            .ok()
            .map(|dt| dt.and_utc().timestamp())
    }
}

/// Bootstrap state embedded in a fan page's `data-blob` attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanPageData {
    pub fan_data: FanData,
    pub item_cache: ItemCache,
}

/// The fan account the page belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanData {
    /// Platform-assigned identifier for the fan account
    pub fan_id: u64,
}

/// Initial item sets the page ships to its own frontend.
///
/// Keys are opaque cache identifiers; only the values matter here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCache {
    #[serde(default)]
    pub collection: HashMap<String, CollectionItem>,
}

/// Response of the collection API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionResponse {
    #[serde(default)]
    pub items: Vec<CollectionItem>,
    /// True when the requested count did not cover the whole collection.
    #[serde(default)]
    pub more_available: bool,
}

/// One band page and the location resolved for it.
///
/// Rows are produced independently per unique band URL; a failed or
/// empty resolution keeps the row with `location: None` rather than
/// dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRow {
    pub url: String,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchased_unix_parses_gmt_format() {
        let item = CollectionItem {
            item_id: 7,
            item_type: "album".to_string(),
            purchased: Some("01 Nov 2022 00:00:00 GMT".to_string()),
            band_url: None,
        };
        assert_eq!(item.purchased_unix(), Some(1667260800));
    }

    #[test]
    fn test_purchased_unix_missing_or_malformed() {
        let mut item = CollectionItem {
            item_id: 7,
            item_type: "album".to_string(),
            purchased: None,
            band_url: None,
        };
        assert_eq!(item.purchased_unix(), None);

        item.purchased = Some("2022-11-01T00:00:00Z".to_string());
        assert_eq!(item.purchased_unix(), None);
    }
}
