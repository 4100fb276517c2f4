pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod parsing;
pub mod resolve;
pub mod token;
pub mod r#trait;
pub mod types;

pub use client::BandcampClientImpl;
pub use error::BandcampError;
pub use parsing::BandcampParser;
pub use r#trait::BandcampClient;
pub use resolve::{collect_locations, dedup_band_urls, resolve_locations};
pub use token::PaginationToken;
pub use types::{CollectionItem, CollectionResponse, FanData, FanPageData, ItemCache, LocationRow};

#[cfg(feature = "mock")]
pub use r#trait::MockBandcampClient;

// Re-export scraper types for testing
pub use scraper::Html;

pub type Result<T> = std::result::Result<T, BandcampError>;
