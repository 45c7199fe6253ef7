//! Recent-paper retrieval from the arXiv search API.
//!
//! `arxiv-feed` fetches recently published papers from arXiv's Atom feed,
//! restricts them to a trailing seven-day window, and normalizes the feed's
//! loosely-structured entries into a uniform record shape. It exists so that
//! downstream consumers (a UI, a digest generator, a notification job) see a
//! stable schema regardless of the quirks of the upstream format:
//!
//! - fields that arrive sometimes as a single object, sometimes as a list
//! - optional fields that may be absent entirely
//! - metadata encoded as XML attributes rather than child elements
//!
//! # Pipeline
//!
//! Each call runs four sequential stages:
//!
//! 1. [`query`]: build the search query and request URL
//! 2. [`client`]: issue a single HTTP GET for the Atom document
//! 3. [`feed`]: parse the markup and normalize each entry into a [`Paper`]
//! 4. [`window`]: retain only entries published in the last seven days
//!
//! No state is held across calls and no caching occurs internally, so
//! concurrent invocations are independent. A failed fetch or an unparseable
//! response fails the whole call; there is no partial-result mode.
//!
//! # Examples
//!
//! ```no_run
//! use arxiv_feed::ArxivClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArxivClient::new();
//!
//! // Fetch up to 50 papers (the default) published in the last week
//! let papers = client.get_recent_papers(None).await?;
//! for paper in &papers {
//!   println!("{} ({})", paper.title, paper.published);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: HTTP fetch and the `get_recent_papers` entry point
//! - [`query`]: search query and URL construction
//! - [`feed`]: raw Atom model and entry normalization
//! - [`paper`]: the normalized output record
//! - [`window`]: trailing publication-date filter
//! - [`error`]: error taxonomy and crate-wide `Result`

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use url::Url;

pub mod client;
pub mod error;
pub mod feed;
pub mod paper;
pub mod query;
pub mod window;

pub use crate::{client::ArxivClient, paper::Paper};
use crate::{
  error::*,
  feed::{Entry, Feed},
  query::SearchQuery,
};
