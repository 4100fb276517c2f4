use thiserror::Error;

/// Error types for Bandcamp collection operations.
///
/// This enum covers the failures that can occur while bootstrapping a fan
/// page, requesting the collection API, and writing the export. Transport
/// failures during the per-band fan-out are deliberately *not* represented
/// here: those are swallowed into unresolved rows by the client (see
/// [`BandcampClient::fetch_band_location`](crate::BandcampClient::fetch_band_location)).
#[derive(Error, Debug)]
pub enum BandcampError {
    /// HTTP/network related errors.
    ///
    /// This includes connection failures, timeouts, DNS errors, and other
    /// low-level networking issues, as well as non-success status codes on
    /// requests that must succeed for the run to continue.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The embedded page data blob was not found on the fan page.
    ///
    /// The fan page carries its bootstrap state as JSON in the `data-blob`
    /// attribute of `div#pagedata`. If that element or attribute is missing,
    /// Bandcamp has either changed their page structure or served something
    /// other than a fan page (e.g. a 404 page for an unknown username).
    #[error("page data blob not found")]
    PageDataNotFound,

    /// Failed to parse a Bandcamp response.
    ///
    /// This can happen when Bandcamp changes the shape of the embedded
    /// page data or the collection API response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// File system I/O errors.
    ///
    /// This can occur when creating or writing the CSV export file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization errors.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
