//! Trailing publication-date window.
//!
//! The arXiv query API offers no reliable server-side date filter for this
//! feed, so recency is enforced client-side after the fetch: only entries
//! published within the trailing seven days survive. The cutoff is computed
//! once per call, at call start, so the whole batch is judged against the
//! same instant. The lower bound is inclusive and there is no upper bound —
//! entries timestamped slightly in the future (clock skew) are kept.

use super::*;

/// Length of the trailing window, in days.
pub const WINDOW_DAYS: i64 = 7;

/// Retains entries published at or after `cutoff`, preserving order.
///
/// Entries whose `published` field does not parse as an RFC 3339 timestamp
/// are dropped with a warning; an undated entry cannot be placed inside the
/// window.
///
/// # Examples
///
/// ```
/// use arxiv_feed::{feed::Feed, window};
/// use chrono::{Duration, Utc};
///
/// let feed = Feed::parse("<feed></feed>")?;
/// let cutoff = Utc::now() - Duration::days(window::WINDOW_DAYS);
/// assert!(window::retain_recent(feed.entries, cutoff).is_empty());
/// # Ok::<(), arxiv_feed::error::FeedError>(())
/// ```
pub fn retain_recent(entries: Vec<Entry>, cutoff: DateTime<Utc>) -> Vec<Entry> {
  entries.into_iter().filter(|entry| published_on_or_after(entry, cutoff)).collect()
}

/// Whether an entry's publication timestamp falls inside the window.
fn published_on_or_after(entry: &Entry, cutoff: DateTime<Utc>) -> bool {
  match DateTime::parse_from_rfc3339(&entry.published) {
    Ok(published) => published.with_timezone(&Utc) >= cutoff,
    Err(e) => {
      warn!("Dropping entry {:?} with unreadable publication date {:?}: {e}", entry.id, entry.published);
      false
    },
  }
}
