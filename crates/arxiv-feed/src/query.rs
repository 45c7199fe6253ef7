//! Search query and request URL construction.
//!
//! The topic filter is fixed in this version: five machine-learning
//! categories OR'd together, AND'd with three OR'd keyword phrases. Callers
//! needing a different topic must build on a different query, so the only
//! input is the result-count bound. Construction is pure — no validation and
//! no error conditions; `max_results` is passed through to the API as-is.

use super::*;

/// Base URL of the arXiv query API.
pub const API_BASE_URL: &str = "http://export.arxiv.org/api/query";

/// Result-count bound used when the caller does not supply one.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Categories OR'd together to form the topical filter.
const CATEGORIES: [&str; 5] = ["cs.AI", "cs.LG", "cs.CV", "cs.CL", "stat.ML"];

/// Keyword phrases OR'd together and AND'd with the category filter.
const KEYWORDS: [&str; 3] = ["deep learning", "neural network", "machine learning"];

/// A fully specified recent-papers search.
///
/// Renders both the boolean `search_query` expression and the complete
/// request URL. Results are requested sorted by submission date, newest
/// first, so entries arrive in the order the output contract promises.
///
/// # Examples
///
/// ```
/// use arxiv_feed::query::SearchQuery;
///
/// let url = SearchQuery::new(25).endpoint_url();
/// assert!(url.as_str().starts_with("http://export.arxiv.org/api/query?"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery {
  /// Maximum number of entries to request from the API
  max_results: usize,
}

impl SearchQuery {
  /// Creates a search requesting at most `max_results` entries.
  pub fn new(max_results: usize) -> Self { Self { max_results } }

  /// Renders the boolean query expression sent as `search_query`.
  pub fn search_query(&self) -> String {
    let categories =
      CATEGORIES.iter().map(|cat| format!("cat:{cat}")).collect::<Vec<_>>().join(" OR ");
    let keywords =
      KEYWORDS.iter().map(|word| format!("all:{word}")).collect::<Vec<_>>().join(" OR ");
    format!("{categories} AND ({keywords})")
  }

  /// Builds the complete request URL with all query parameters encoded.
  pub fn endpoint_url(&self) -> Url {
    Url::parse_with_params(API_BASE_URL, [
      ("search_query", self.search_query()),
      ("sortBy", "submittedDate".to_string()),
      ("sortOrder", "descending".to_string()),
      ("max_results", self.max_results.to_string()),
    ])
    .expect("static base URL and parameter names are valid")
  }
}

impl Default for SearchQuery {
  fn default() -> Self { Self::new(DEFAULT_MAX_RESULTS) }
}
