//! URL construction and run defaults.
//!
//! The profile URL scheme is the whole of Bandcamp's "config": a fan's
//! public page lives at `https://bandcamp.com/{username}` and everything
//! else is derived from what that page embeds.

/// Base URL for the public Bandcamp site.
pub const BASE_URL: &str = "https://bandcamp.com";

/// Path of the internal fan-collection API, relative to [`BASE_URL`].
pub const COLLECTION_API_PATH: &str = "/api/fancollection/1/collection_items";

/// Username used when the CLI is invoked without `--username`.
pub const DEFAULT_USERNAME: &str = "spiketheobscure";

/// Number of band pages fetched concurrently by default.
///
/// Kept small so a full-collection run does not hammer the site.
pub const DEFAULT_WORKERS: usize = 3;

/// Item count requested from the collection API. Large enough that a
/// personal collection fits in a single response.
pub const COLLECTION_PAGE_COUNT: u32 = 10000;

/// Build the public profile URL for a fan.
pub fn profile_url(base_url: &str, username: &str) -> String {
    format!("{base_url}/{}", urlencoding::encode(username))
}

/// Build the wishlist URL for a fan.
pub fn wishlist_url(base_url: &str, username: &str) -> String {
    format!("{}/wishlist", profile_url(base_url, username))
}

/// Build the collection API endpoint URL.
pub fn collection_api_url(base_url: &str) -> String {
    format!("{base_url}{COLLECTION_API_PATH}")
}
