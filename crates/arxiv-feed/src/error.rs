//! Error types for the arxiv-feed library.
//!
//! The taxonomy distinguishes the two ways a call can fail: the HTTP fetch
//! (network trouble or a non-success status) and parsing the returned Atom
//! document. Missing or oddly-shaped fields inside a well-formed feed are
//! never errors — normalization maps them to empty values instead, so the
//! output contract stays total.
//!
//! # Examples
//!
//! ```no_run
//! use arxiv_feed::{error::FeedError, ArxivClient};
//!
//! # async fn example() {
//! match ArxivClient::new().get_recent_papers(None).await {
//!   Err(FeedError::Status(status)) => println!("arXiv answered {status}"),
//!   Err(FeedError::Network(e)) => println!("Network error: {e}"),
//!   Err(FeedError::Parse(e)) => println!("Malformed feed: {e}"),
//!   Ok(papers) => println!("Got {} papers", papers.len()),
//! }
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`arxiv_feed`](crate) crate.
pub type Result<T> = core::result::Result<T, FeedError>;

/// Errors that can occur while fetching and decoding the recent-papers feed.
///
/// All errors propagate to the immediate caller; nothing is retried or
/// swallowed internally. There is no partial-result mode — either the full
/// filtered and normalized list is returned, or the call fails as a whole.
#[derive(Error, Debug)]
pub enum FeedError {
  /// The HTTP request failed at the transport level.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable
  /// - The request times out
  /// - TLS errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The arXiv API answered with a non-success HTTP status.
  ///
  /// The status code is carried so callers can distinguish throttling or
  /// service errors from transport failures without string matching.
  #[error("arXiv API request failed with status {0}")]
  Status(reqwest::StatusCode),

  /// The response body could not be parsed as an Atom feed.
  ///
  /// This wraps the underlying quick-xml deserialization error and covers
  /// malformed markup as well as documents whose structure does not match
  /// the expected feed shape.
  #[error("failed to parse feed: {0}")]
  Parse(#[from] quick_xml::DeError),
}
