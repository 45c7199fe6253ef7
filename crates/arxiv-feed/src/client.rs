//! HTTP fetch and the recent-papers entry point.
//!
//! [`ArxivClient`] is the crate's only public operation surface. Each call
//! runs the full pipeline — build the request URL, fetch the Atom document,
//! parse it, filter to the trailing window, normalize — and holds no state
//! between calls, so one client can serve concurrent invocations. No retry
//! or backoff happens here; callers wanting resilience layer it outside.

use super::*;

/// Client for the arXiv query API.
///
/// Wraps a [`reqwest::Client`] so the transport's connection pool is reused
/// across calls, but carries no other state.
///
/// # Examples
///
/// ```no_run
/// use arxiv_feed::ArxivClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ArxivClient::new();
/// let papers = client.get_recent_papers(Some(20)).await?;
/// println!("{} papers published this week", papers.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ArxivClient {
  /// Underlying HTTP transport
  http: reqwest::Client,
}

impl ArxivClient {
  /// Creates a new [`ArxivClient`].
  pub fn new() -> Self { Self::default() }

  /// Fetches papers published within the trailing seven days.
  ///
  /// Requests at most `max_results` entries (50 when `None`) sorted newest
  /// first, then filters them against a cutoff computed once at call start
  /// and normalizes the survivors. Order is preserved, so the returned
  /// papers are newest first.
  ///
  /// # Errors
  ///
  /// - [`FeedError::Network`] if the request fails at the transport level
  /// - [`FeedError::Status`] if arXiv answers with a non-success status
  /// - [`FeedError::Parse`] if the response is not a well-formed feed
  pub async fn get_recent_papers(&self, max_results: Option<usize>) -> Result<Vec<Paper>> {
    let query = SearchQuery::new(max_results.unwrap_or(query::DEFAULT_MAX_RESULTS));
    let url = query.endpoint_url();

    debug!("Fetching recent papers via: {url}");
    let body = self.fetch(url).await?;
    trace!("arXiv response: {body}");

    let feed = Feed::parse(&body)?;
    let cutoff = Utc::now() - Duration::days(window::WINDOW_DAYS);
    let recent = window::retain_recent(feed.entries, cutoff);
    debug!("Retained {} papers from the last {} days", recent.len(), window::WINDOW_DAYS);

    Ok(recent.into_iter().map(Paper::from).collect())
  }

  /// Performs a single GET and returns the response body as text.
  async fn fetch(&self, url: Url) -> Result<String> {
    let response = self.http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
      return Err(FeedError::Status(status));
    }
    Ok(response.text().await?)
  }
}
