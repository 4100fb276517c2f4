//! CSV export of resolved location rows.

use crate::types::LocationRow;
use crate::Result;
use serde::Serialize;
use std::io;

/// Literal separator between the city and country parts of a location.
const LOCATION_SEPARATOR: &str = ", ";

const HEADERS: [&str; 3] = ["url", "city", "country"];

#[derive(Debug, Serialize)]
struct ExportRecord<'a> {
    url: &'a str,
    city: Option<String>,
    country: Option<String>,
}

/// Split a location string into city and country columns.
///
/// Locations are free text; most read "City, Country" but single-part
/// values ("Internet", "Berlin") exist and keep their text in the city
/// column with no country. Splitting stops after the first separator so
/// "Portland, OR, USA" keeps "OR, USA" together as the country part.
pub fn split_location(location: Option<&str>) -> (Option<String>, Option<String>) {
    match location {
        Some(location) => {
            let mut parts = location.splitn(2, LOCATION_SEPARATOR);
            let city = parts.next().map(|part| part.to_string());
            let country = parts.next().map(|part| part.to_string());
            (city, country)
        }
        None => (None, None),
    }
}

/// Default export filename for a fan.
pub fn export_path(username: &str) -> String {
    format!("{username}-bc-locations.csv")
}

/// Serialize rows as `url,city,country` CSV.
///
/// The header is always written, so an empty collection still produces
/// a well-formed file. Unresolved locations become empty cells.
pub fn write_csv<W: io::Write>(rows: &[LocationRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADERS)?;
    for row in rows {
        let (city, country) = split_location(row.location.as_deref());
        csv_writer.serialize(ExportRecord {
            url: &row.url,
            city,
            country,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
