use sea_orm::Order;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Page/limit pair as it arrives on the query string. Out-of-range values
/// are normalized rather than rejected: page is clamped to at least 1,
/// limit to 1..=MAX_LIMIT.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PageQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    pub fn offset(&self) -> u64 {
        (self.page() - 1) * self.limit()
    }

    /// Zero-based page index for SeaORM's paginator.
    pub fn page_index(&self) -> u64 {
        self.page() - 1
    }
}

#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn into_order(self) -> Order {
        match self {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let q = PageQuery::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 10);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn page_zero_is_clamped_to_one() {
        let q = PageQuery { page: Some(0), limit: Some(10) };
        assert_eq!(q.page(), 1);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let q = PageQuery { page: Some(3), limit: Some(20) };
        assert_eq!(q.offset(), 40);
        assert_eq!(q.page_index(), 2);
    }

    #[test]
    fn limit_is_capped() {
        let q = PageQuery { page: None, limit: Some(10_000) };
        assert_eq!(q.limit(), MAX_LIMIT);
    }

    #[test]
    fn sort_order_parses_from_query_strings() {
        let asc: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(asc, SortOrder::Asc);
        assert!(serde_json::from_str::<SortOrder>("\"newest\"").is_err());
    }
}
