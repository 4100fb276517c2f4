//! Pagination cursor for the collection API.

use crate::types::CollectionItem;
use std::fmt;

/// Cursor requesting every collection item older than a reference item.
///
/// The collection API pages backwards in time: the cursor names the
/// newest item already known and the API returns what comes before it.
/// Combined with a large `count` this retrieves the whole collection in
/// one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationToken {
    pub unix_time: i64,
    pub item_id: u64,
}

impl PaginationToken {
    /// Build the cursor from the newest purchasable item in a set.
    ///
    /// Items without a parseable purchase date are ignored; returns
    /// `None` when nothing in the set carries one.
    pub fn newest(items: &[CollectionItem]) -> Option<Self> {
        items
            .iter()
            .filter_map(|item| item.purchased_unix().map(|ts| (ts, item.item_id)))
            .max_by_key(|(ts, _)| *ts)
            .map(|(unix_time, item_id)| Self { unix_time, item_id })
    }
}

impl fmt::Display for PaginationToken {
    // The trailing "t" marker is the literal the collection page itself
    // emits, regardless of the item's actual type.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:t::", self.unix_time, self.item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(item_id: u64, purchased: Option<&str>) -> CollectionItem {
        CollectionItem {
            item_id,
            item_type: "album".to_string(),
            purchased: purchased.map(|p| p.to_string()),
            band_url: None,
        }
    }

    #[test]
    fn test_token_format() {
        let token = PaginationToken {
            unix_time: 1667260800,
            item_id: 987654,
        };
        assert_eq!(token.to_string(), "1667260800:987654:t::");
    }

    #[test]
    fn test_newest_picks_max_timestamp() {
        let items = vec![
            item(1, Some("01 Jan 2021 00:00:00 GMT")),
            item(2, Some("01 Nov 2022 00:00:00 GMT")),
            item(3, Some("15 Mar 2022 08:30:00 GMT")),
        ];
        let token = PaginationToken::newest(&items).unwrap();
        assert_eq!(token.item_id, 2);
        assert_eq!(token.to_string(), "1667260800:2:t::");
    }

    #[test]
    fn test_newest_skips_undateable_items() {
        let items = vec![
            item(1, None),
            item(2, Some("not a date")),
            item(3, Some("01 Nov 2022 00:00:00 GMT")),
        ];
        let token = PaginationToken::newest(&items).unwrap();
        assert_eq!(token.item_id, 3);
    }

    #[test]
    fn test_newest_empty_or_all_undateable() {
        assert_eq!(PaginationToken::newest(&[]), None);
        assert_eq!(PaginationToken::newest(&[item(1, None)]), None);
    }
}
