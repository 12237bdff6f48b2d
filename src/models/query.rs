use serde::Deserialize;

/// Page numbering starts at 1.
pub const FIRST_PAGE: i64 = 1;
/// Rows per page when the request does not say otherwise.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// The filter/sort/page window of a stock list request. Transient value
/// object; built once from the query string and never persisted.
///
/// Substring filters are case-insensitive and skipped when blank. An
/// unrecognized sort_by is ignored, falling back to the default listing
/// order (created_at, newest first).
#[derive(Debug, Clone, Deserialize)]
pub struct StockQuery {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub is_descending: bool,
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    FIRST_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for StockQuery {
    fn default() -> Self {
        Self {
            company_name: None,
            symbol: None,
            sort_by: None,
            is_descending: false,
            page_number: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl StockQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.page_number < FIRST_PAGE {
            return Err("page_number must be positive".to_string());
        }
        if self.page_size < 1 {
            return Err("page_size must be positive".to_string());
        }
        Ok(())
    }

    /// Company-name filter with blank values treated as absent.
    pub fn company_name_filter(&self) -> Option<&str> {
        non_blank(self.company_name.as_deref())
    }

    /// Symbol filter with blank values treated as absent.
    pub fn symbol_filter(&self) -> Option<&str> {
        non_blank(self.symbol.as_deref())
    }

    /// Whether results should be ordered by symbol. Any other sort_by
    /// value (or none) keeps the default order.
    pub fn sorts_by_symbol(&self) -> bool {
        self.sort_by
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("symbol"))
    }

    /// Rows to skip before the requested page.
    pub fn offset(&self) -> i64 {
        (self.page_number - FIRST_PAGE) * self.page_size
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_start_at_first_page() {
        let query = StockQuery::default();
        assert_eq!(query.page_number, 1);
        assert_eq!(query.page_size, 20);
        assert_eq!(query.offset(), 0);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_page_window() {
        let query = StockQuery {
            page_number: 0,
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = StockQuery {
            page_size: 0,
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_blank_filters_are_skipped() {
        let query = StockQuery {
            company_name: Some("   ".to_string()),
            symbol: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query.company_name_filter(), None);
        assert_eq!(query.symbol_filter(), None);
    }

    #[test]
    fn test_sort_field_matches_case_insensitively() {
        let query = StockQuery {
            sort_by: Some("SYMBOL".to_string()),
            ..Default::default()
        };
        assert!(query.sorts_by_symbol());

        let query = StockQuery {
            sort_by: Some("marketCap".to_string()),
            ..Default::default()
        };
        assert!(!query.sorts_by_symbol());
    }

    #[test]
    fn test_offset_skips_earlier_pages() {
        let query = StockQuery {
            page_number: 3,
            page_size: 10,
            ..Default::default()
        };
        assert_eq!(query.offset(), 20);
    }
}
