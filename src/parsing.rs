//! HTML and JSON parsing for Bandcamp pages.
//!
//! This module contains all the extraction logic for fan pages, the
//! collection API response, and band pages. These are pure functions
//! over already-fetched documents; nothing here performs I/O.

use crate::types::{CollectionItem, CollectionResponse, FanPageData};
use crate::{BandcampError, Result};
use scraper::{Html, Selector};

/// Parser struct containing the extraction methods for Bandcamp pages.
///
/// Stateless; held by the client so parsing stays separated from
/// request handling.
#[derive(Debug, Clone)]
pub struct BandcampParser;

impl BandcampParser {
    /// Create a new parser instance.
    pub fn new() -> Self {
        Self
    }

    /// Extract the raw page data JSON from a fan page.
    ///
    /// Fan pages embed their bootstrap state as JSON in the `data-blob`
    /// attribute of `div#pagedata`. The HTML parser has already decoded
    /// the attribute's entity escapes, so the returned string is plain
    /// JSON.
    pub fn extract_page_data(&self, document: &Html) -> Result<String> {
        let pagedata_selector = Selector::parse("div#pagedata").unwrap();

        document
            .select(&pagedata_selector)
            .next()
            .and_then(|el| el.value().attr("data-blob"))
            .map(|blob| blob.to_string())
            .ok_or(BandcampError::PageDataNotFound)
    }

    /// Parse the page data blob into the fan's bootstrap state.
    pub fn parse_fan_page(&self, blob: &str) -> Result<FanPageData> {
        let data: FanPageData =
            serde_json::from_str(blob).map_err(|e| BandcampError::Parse(e.to_string()))?;

        log::debug!(
            "Parsed fan page data: fan_id {}, {} cached collection items",
            data.fan_data.fan_id,
            data.item_cache.collection.len()
        );

        Ok(data)
    }

    /// Parse the collection API response into its item list.
    pub fn parse_collection_response(&self, json: &str) -> Result<Vec<CollectionItem>> {
        let response: CollectionResponse =
            serde_json::from_str(json).map_err(|e| BandcampError::Parse(e.to_string()))?;

        if response.more_available {
            log::warn!(
                "Collection API reports more items beyond the requested count; \
                 the export will be missing the oldest purchases"
            );
        }

        log::debug!("Parsed {} collection items", response.items.len());
        Ok(response.items)
    }

    /// Extract the location string from a band page.
    ///
    /// Band pages carry the artist name and location in the
    /// `#band-name-location` header. Returns `None` when the element is
    /// absent (some label and discography pages omit it) or empty.
    pub fn parse_band_location(&self, document: &Html) -> Option<String> {
        let location_selector = Selector::parse("#band-name-location .location").unwrap();

        let location = document
            .select(&location_selector)
            .next()?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        if location.is_empty() {
            None
        } else {
            Some(location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAN_PAGE_HTML: &str = r#"<html><body>
        <div id="propOpenWrapper">
            <div id="pagedata" data-blob="{&quot;fan_data&quot;:{&quot;fan_id&quot;:896389},&quot;item_cache&quot;:{&quot;collection&quot;:{&quot;a1866825800&quot;:{&quot;item_id&quot;:1866825800,&quot;item_type&quot;:&quot;album&quot;,&quot;purchased&quot;:&quot;04 Nov 2022 12:34:56 GMT&quot;,&quot;band_url&quot;:&quot;https://someband.bandcamp.com&quot;},&quot;a1299283800&quot;:{&quot;item_id&quot;:1299283800,&quot;item_type&quot;:&quot;track&quot;,&quot;purchased&quot;:&quot;12 Aug 2021 09:00:00 GMT&quot;}}}}"></div>
        </div>
    </body></html>"#;

    #[test]
    fn test_extract_page_data_unescapes_blob() {
        let document = Html::parse_document(FAN_PAGE_HTML);
        let parser = BandcampParser::new();

        let blob = parser.extract_page_data(&document).unwrap();
        assert!(blob.starts_with(r#"{"fan_data""#));
    }

    #[test]
    fn test_extract_page_data_missing_marker() {
        let document = Html::parse_document("<html><body><p>not a fan page</p></body></html>");
        let parser = BandcampParser::new();

        assert!(matches!(
            parser.extract_page_data(&document),
            Err(BandcampError::PageDataNotFound)
        ));
    }

    #[test]
    fn test_parse_fan_page_fields() {
        let document = Html::parse_document(FAN_PAGE_HTML);
        let parser = BandcampParser::new();

        let blob = parser.extract_page_data(&document).unwrap();
        let data = parser.parse_fan_page(&blob).unwrap();

        assert_eq!(data.fan_data.fan_id, 896389);
        assert_eq!(data.item_cache.collection.len(), 2);

        let cached = &data.item_cache.collection["a1866825800"];
        assert_eq!(cached.item_id, 1866825800);
        assert_eq!(cached.item_type, "album");
        assert_eq!(
            cached.band_url.as_deref(),
            Some("https://someband.bandcamp.com")
        );
    }

    #[test]
    fn test_parse_fan_page_malformed_json() {
        let parser = BandcampParser::new();
        assert!(matches!(
            parser.parse_fan_page("{not json"),
            Err(BandcampError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_collection_response() {
        let json = r#"{
            "items": [
                {
                    "item_id": 101,
                    "item_type": "album",
                    "purchased": "04 Nov 2022 12:34:56 GMT",
                    "band_url": "https://someband.bandcamp.com",
                    "featured_track": 555
                },
                {
                    "item_id": 102,
                    "item_type": "track",
                    "purchased": "12 Aug 2021 09:00:00 GMT",
                    "band_url": "https://otherband.bandcamp.com"
                }
            ],
            "more_available": false
        }"#;

        let parser = BandcampParser::new();
        let items = parser.parse_collection_response(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_id, 101);
        assert_eq!(
            items[1].band_url.as_deref(),
            Some("https://otherband.bandcamp.com")
        );
    }

    #[test]
    fn test_parse_band_location() {
        let html = r#"<html><body>
            <p id="band-name-location">
                <span class="title">Some Band</span>
                <span class="location secondaryText">London, UK</span>
            </p>
        </body></html>"#;

        let document = Html::parse_document(html);
        let parser = BandcampParser::new();

        assert_eq!(
            parser.parse_band_location(&document),
            Some("London, UK".to_string())
        );
    }

    #[test]
    fn test_parse_band_location_absent() {
        let document = Html::parse_document("<html><body><h1>merch</h1></body></html>");
        let parser = BandcampParser::new();
        assert_eq!(parser.parse_band_location(&document), None);
    }

    #[test]
    fn test_parse_band_location_empty_element() {
        let html = r#"<p id="band-name-location"><span class="location">   </span></p>"#;
        let document = Html::parse_document(html);
        let parser = BandcampParser::new();
        assert_eq!(parser.parse_band_location(&document), None);
    }
}
