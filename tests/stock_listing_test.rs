/// Stock Listing Contract Tests
///
/// Tests the filter/sort/paginate contract behind GET /api/stocks:
/// - substring filters (case-insensitive, skipped when blank)
/// - symbol sort, ascending and descending
/// - page windowing applied after filtering and sorting
/// - page-concatenation reproduces the full result set exactly once
///
/// NOTE: These tests validate the listing contract against an in-memory
/// reference model. Full integration tests against a live database
/// require running the server.

// ---------------------------------------------------------------------------
// Reference model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct StockRow {
    symbol: String,
    company_name: String,
    // created_at stand-in; listing order falls back to newest-first
    seq: u64,
}

#[derive(Debug, Clone, Default)]
struct ListRequest {
    company_name: Option<String>,
    symbol: Option<String>,
    sort_by: Option<String>,
    is_descending: bool,
    page_number: usize,
    page_size: usize,
}

impl ListRequest {
    fn new() -> Self {
        Self {
            page_number: 1,
            page_size: 20,
            ..Default::default()
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn non_blank(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().map(str::trim).filter(|f| !f.is_empty())
}

/// Mirrors the repository's query compilation: filter, then sort, then
/// page, in that fixed order.
fn list_stocks(rows: &[StockRow], req: &ListRequest) -> Vec<StockRow> {
    let mut result: Vec<StockRow> = rows
        .iter()
        .filter(|row| {
            non_blank(&req.company_name)
                .map_or(true, |f| contains_ignore_case(&row.company_name, f))
        })
        .filter(|row| {
            non_blank(&req.symbol).map_or(true, |f| contains_ignore_case(&row.symbol, f))
        })
        .cloned()
        .collect();

    let sort_by_symbol = req
        .sort_by
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case("symbol"));
    if sort_by_symbol {
        result.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        if req.is_descending {
            result.reverse();
        }
    } else {
        // default listing order: newest first
        result.sort_by(|a, b| b.seq.cmp(&a.seq));
    }

    result
        .into_iter()
        .skip((req.page_number - 1) * req.page_size)
        .take(req.page_size)
        .collect()
}

fn sample_stocks() -> Vec<StockRow> {
    vec![
        StockRow {
            symbol: "AAPL".to_string(),
            company_name: "Apple Inc.".to_string(),
            seq: 1,
        },
        StockRow {
            symbol: "MSFT".to_string(),
            company_name: "Microsoft Corporation".to_string(),
            seq: 2,
        },
        StockRow {
            symbol: "GOOG".to_string(),
            company_name: "Alphabet Inc.".to_string(),
            seq: 3,
        },
        StockRow {
            symbol: "BAN".to_string(),
            company_name: "Banana Co.".to_string(),
            seq: 4,
        },
    ]
}

fn symbols(rows: &[StockRow]) -> Vec<&str> {
    rows.iter().map(|r| r.symbol.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[cfg(test)]
mod filtering {
    use super::*;

    #[test]
    fn test_company_name_filter_matches_substring() {
        let req = ListRequest {
            company_name: Some("Apple".to_string()),
            ..ListRequest::new()
        };
        let result = list_stocks(&sample_stocks(), &req);
        assert_eq!(symbols(&result), vec!["AAPL"]);
    }

    #[test]
    fn test_company_name_filter_ignores_case() {
        for filter in ["apple", "APPLE", "aPpLe"] {
            let req = ListRequest {
                company_name: Some(filter.to_string()),
                ..ListRequest::new()
            };
            let result = list_stocks(&sample_stocks(), &req);
            assert_eq!(symbols(&result), vec!["AAPL"], "filter {filter}");
        }
    }

    #[test]
    fn test_symbol_filter_matches_substring() {
        let req = ListRequest {
            symbol: Some("oo".to_string()),
            ..ListRequest::new()
        };
        let result = list_stocks(&sample_stocks(), &req);
        assert_eq!(symbols(&result), vec!["GOOG"]);
    }

    #[test]
    fn test_blank_filters_return_everything() {
        let req = ListRequest {
            company_name: Some("   ".to_string()),
            symbol: Some(String::new()),
            ..ListRequest::new()
        };
        let result = list_stocks(&sample_stocks(), &req);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_both_filters_compose() {
        let req = ListRequest {
            company_name: Some("Inc".to_string()),
            symbol: Some("A".to_string()),
            ..ListRequest::new()
        };
        let result = list_stocks(&sample_stocks(), &req);
        assert_eq!(symbols(&result), vec!["AAPL"]);
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[cfg(test)]
mod sorting {
    use super::*;

    #[test]
    fn test_symbol_sort_descending() {
        let stocks = vec![
            StockRow { symbol: "AAPL".to_string(), company_name: "Apple Inc.".to_string(), seq: 1 },
            StockRow { symbol: "MSFT".to_string(), company_name: "Microsoft".to_string(), seq: 2 },
            StockRow { symbol: "GOOG".to_string(), company_name: "Alphabet".to_string(), seq: 3 },
        ];
        let req = ListRequest {
            sort_by: Some("symbol".to_string()),
            is_descending: true,
            ..ListRequest::new()
        };
        let result = list_stocks(&stocks, &req);
        assert_eq!(symbols(&result), vec!["MSFT", "GOOG", "AAPL"]);
    }

    #[test]
    fn test_symbol_sort_ascending() {
        let req = ListRequest {
            sort_by: Some("symbol".to_string()),
            ..ListRequest::new()
        };
        let result = list_stocks(&sample_stocks(), &req);
        assert_eq!(symbols(&result), vec!["AAPL", "BAN", "GOOG", "MSFT"]);
    }

    #[test]
    fn test_sort_field_is_case_insensitive() {
        let req = ListRequest {
            sort_by: Some("Symbol".to_string()),
            ..ListRequest::new()
        };
        let result = list_stocks(&sample_stocks(), &req);
        assert_eq!(symbols(&result), vec!["AAPL", "BAN", "GOOG", "MSFT"]);
    }

    #[test]
    fn test_unknown_sort_field_falls_back_to_default_order() {
        let req = ListRequest {
            sort_by: Some("market_cap".to_string()),
            ..ListRequest::new()
        };
        let result = list_stocks(&sample_stocks(), &req);
        // newest first
        assert_eq!(symbols(&result), vec!["BAN", "GOOG", "MSFT", "AAPL"]);
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[cfg(test)]
mod pagination {
    use super::*;

    fn many_stocks(count: u64) -> Vec<StockRow> {
        (0..count)
            .map(|i| StockRow {
                symbol: format!("SYM{i:03}"),
                company_name: format!("Company {i}"),
                seq: i,
            })
            .collect()
    }

    #[test]
    fn test_page_never_exceeds_page_size() {
        let stocks = many_stocks(47);
        for page_number in 1..=10 {
            let req = ListRequest {
                page_number,
                page_size: 10,
                ..ListRequest::new()
            };
            assert!(list_stocks(&stocks, &req).len() <= 10);
        }
    }

    #[test]
    fn test_concatenated_pages_reproduce_full_set_exactly_once() {
        let stocks = many_stocks(47);
        let full = list_stocks(
            &stocks,
            &ListRequest {
                page_size: 100,
                ..ListRequest::new()
            },
        );

        let mut collected = Vec::new();
        let mut page_number = 1;
        loop {
            let page = list_stocks(
                &stocks,
                &ListRequest {
                    page_number,
                    page_size: 10,
                    ..ListRequest::new()
                },
            );
            if page.is_empty() {
                break;
            }
            collected.extend(page);
            page_number += 1;
        }

        assert_eq!(collected, full);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let req = ListRequest {
            page_number: 9,
            page_size: 10,
            ..ListRequest::new()
        };
        assert!(list_stocks(&sample_stocks(), &req).is_empty());
    }

    #[test]
    fn test_paging_applies_after_filter_and_sort() {
        let stocks = vec![
            StockRow { symbol: "AAPL".to_string(), company_name: "Apple Inc.".to_string(), seq: 1 },
            StockRow { symbol: "MSFT".to_string(), company_name: "Microsoft Inc.".to_string(), seq: 2 },
            StockRow { symbol: "GOOG".to_string(), company_name: "Alphabet Inc.".to_string(), seq: 3 },
            StockRow { symbol: "BAN".to_string(), company_name: "Banana Co.".to_string(), seq: 4 },
        ];
        // filter to the three "Inc." stocks, sort by symbol, take page 2 of size 2
        let req = ListRequest {
            company_name: Some("Inc".to_string()),
            sort_by: Some("symbol".to_string()),
            page_number: 2,
            page_size: 2,
            ..ListRequest::new()
        };
        let result = list_stocks(&stocks, &req);
        assert_eq!(symbols(&result), vec!["MSFT"]);
    }
}
