//! Raw Atom feed model and entry normalization.
//!
//! The arXiv API answers with an Atom document whose entries are only loosely
//! structured: authors, categories, and links appear once or many times,
//! several fields are optional, and link relations and category terms live in
//! XML attributes rather than child elements. This module deserializes that
//! document into a permissive raw model and then maps each [`Entry`] into the
//! fixed [`Paper`] shape.
//!
//! Repeated elements deserialize into `Vec`s, so zero, one, or many
//! occurrences of `author`, `category`, and `link` all flow through the same
//! code path — the singleton-collapse quirk of the upstream serializer never
//! reaches normalization.
//!
//! # Examples
//!
//! ```
//! use arxiv_feed::{feed::Feed, Paper};
//!
//! let xml = r#"
//!   <feed xmlns="http://www.w3.org/2005/Atom">
//!     <entry>
//!       <id>http://arxiv.org/abs/2401.00001v1</id>
//!       <title>An Example</title>
//!       <author><name>Ada Lovelace</name></author>
//!     </entry>
//!   </feed>"#;
//!
//! let feed = Feed::parse(xml)?;
//! let papers: Vec<Paper> = feed.entries.into_iter().map(Paper::from).collect();
//! assert_eq!(papers[0].authors, vec!["Ada Lovelace"]);
//! # Ok::<(), arxiv_feed::error::FeedError>(())
//! ```

use super::*;

/// Top-level container of the arXiv Atom response.
#[derive(Debug, Default, Deserialize)]
pub struct Feed {
  /// Entries in the order the API returned them
  #[serde(rename = "entry", default)]
  pub entries: Vec<Entry>,
}

impl Feed {
  /// Parses an Atom document into the raw feed model.
  ///
  /// A document with a single `<entry>` element yields a one-element
  /// [`Feed::entries`]; a feed with none yields an empty list.
  ///
  /// # Errors
  ///
  /// Returns [`FeedError::Parse`] when the text is not well-formed XML or
  /// does not match the expected feed structure.
  pub fn parse(xml: &str) -> Result<Self> { Ok(quick_xml::de::from_str(xml)?) }
}

/// One paper entry as represented upstream, prior to normalization.
///
/// Every field is optional in the wire format; missing elements default to
/// empty strings or empty lists here so normalization never branches on
/// presence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
  /// Entry identifier (the abstract URL)
  #[serde(default)]
  pub id:               String,
  /// Title text, hard-wrapped by the upstream serializer
  #[serde(default)]
  pub title:            String,
  /// Abstract text, hard-wrapped by the upstream serializer
  #[serde(default)]
  pub summary:          String,
  /// Publication timestamp (RFC 3339)
  #[serde(default)]
  pub published:        String,
  /// Last-update timestamp (RFC 3339)
  #[serde(default)]
  pub updated:          String,
  /// Authors, one element per `<author>`
  #[serde(rename = "author", default)]
  pub authors:          Vec<Author>,
  /// Categories, one element per `<category>`
  #[serde(rename = "category", default)]
  pub categories:       Vec<Category>,
  /// Links, one element per `<link>`
  #[serde(rename = "link", default)]
  pub links:            Vec<Link>,
  // quick-xml matches namespaced elements by local name, so `arxiv:comment`
  // and `arxiv:primary_category` bind to the unprefixed field names below.
  /// Free-text comment from the arXiv extension namespace
  #[serde(default)]
  pub comment:          String,
  /// Primary category from the arXiv extension namespace
  pub primary_category: Option<Category>,
}

/// A single `<author>` element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
  /// The author's display name
  #[serde(default)]
  pub name: String,
}

/// A `<category>` or `<arxiv:primary_category>` element.
///
/// The category identifier is carried in the `term` attribute.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
  /// Category term, e.g. `cs.LG`
  #[serde(rename = "@term", default)]
  pub term: String,
}

/// A `<link>` element; all metadata lives in attributes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
  /// Link target address
  #[serde(rename = "@href", default)]
  pub href:  String,
  /// Link relation, e.g. `alternate` for the abstract page
  #[serde(rename = "@rel", default)]
  pub rel:   String,
  /// Link title; arXiv marks the PDF variant with `pdf`
  #[serde(rename = "@title", default)]
  pub title: String,
}

impl From<Entry> for Paper {
  fn from(entry: Entry) -> Self {
    let (link, pdf_link) = select_links(&entry.links);
    Paper {
      id: entry.id,
      title: collapse_whitespace(&entry.title),
      authors: entry.authors.into_iter().map(|author| author.name).collect(),
      summary: collapse_whitespace(&entry.summary),
      published: entry.published,
      updated: entry.updated,
      link,
      pdf_link,
      comment: entry.comment,
      categories: entry.categories.into_iter().map(|category| category.term).collect(),
      primary_category: entry.primary_category.map(|category| category.term).unwrap_or_default(),
    }
  }
}

/// Picks the abstract-page and PDF addresses out of an entry's links.
///
/// A sole link is taken as the main link regardless of its relation, with no
/// PDF variant. For longer lists the `alternate` relation selects the main
/// link and a `pdf` title selects the PDF; a missing match yields an empty
/// string rather than an error.
fn select_links(links: &[Link]) -> (String, String) {
  match links {
    [] => (String::new(), String::new()),
    [only] => (only.href.clone(), String::new()),
    _ => {
      let main =
        links.iter().find(|link| link.rel == "alternate").map(|link| link.href.clone());
      let pdf = links.iter().find(|link| link.title == "pdf").map(|link| link.href.clone());
      (main.unwrap_or_default(), pdf.unwrap_or_default())
    },
  }
}

/// Collapses whitespace runs (including newlines) to single spaces and trims.
fn collapse_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}
