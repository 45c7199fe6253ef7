//! Normalized paper record returned to callers.
//!
//! This module defines the output contract of the crate: a flat, fully
//! populated record derived from one Atom entry. Consumers depend on every
//! field being present and typed — absence upstream maps to an empty string
//! or empty list, never to a missing field — so the serialized shape is
//! stable across the upstream format's quirks.

use super::*;

/// One recently published paper, normalized from an arXiv Atom entry.
///
/// Field names serialize in camelCase (`pdfLink`, `primaryCategory`) to match
/// the schema downstream consumers were built against.
///
/// # Examples
///
/// ```no_run
/// # use arxiv_feed::ArxivClient;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let papers = ArxivClient::new().get_recent_papers(Some(10)).await?;
/// if let Some(paper) = papers.first() {
///   println!("{} — {}", paper.title, paper.authors.join(", "));
///   println!("abs: {} pdf: {}", paper.link, paper.pdf_link);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
  /// Entry identifier (the arXiv abstract URL), empty if absent
  pub id:               String,
  /// Title with whitespace runs collapsed and ends trimmed
  pub title:            String,
  /// Author names in feed order
  pub authors:          Vec<String>,
  /// Abstract with whitespace runs collapsed and ends trimmed
  pub summary:          String,
  /// Publication timestamp, verbatim from the feed
  pub published:        String,
  /// Last-update timestamp, verbatim from the feed
  pub updated:          String,
  /// Address of the "alternate"-relation link, or of the sole link
  pub link:             String,
  /// Address of the link titled "pdf", empty when none is marked
  pub pdf_link:         String,
  /// The `arxiv:comment` extension field, empty if absent
  pub comment:          String,
  /// Category terms in feed order
  pub categories:       Vec<String>,
  /// The `arxiv:primary_category` term, empty if absent
  pub primary_category: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_with_camel_case_field_names() {
    let paper = Paper {
      id:               "http://arxiv.org/abs/2401.00001v1".to_string(),
      title:            "A Title".to_string(),
      authors:          vec!["Ada Lovelace".to_string()],
      summary:          String::new(),
      published:        "2024-01-01T00:00:00Z".to_string(),
      updated:          String::new(),
      link:             "http://arxiv.org/abs/2401.00001v1".to_string(),
      pdf_link:         String::new(),
      comment:          String::new(),
      categories:       vec![],
      primary_category: String::new(),
    };

    let json = serde_json::to_value(&paper).unwrap();
    let object = json.as_object().unwrap();

    // Renamed fields use the downstream schema's names
    assert!(object.contains_key("pdfLink"));
    assert!(object.contains_key("primaryCategory"));

    // Empty fields are still present, never dropped
    assert_eq!(object["summary"], "");
    assert_eq!(object["categories"], serde_json::json!([]));
  }
}
