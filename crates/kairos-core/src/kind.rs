//! Where a date was found: the technique taxonomy.
//!
//! Every [`crate::ExtractedDate`] carries exactly one [`DateKind`]. The
//! variant says which document signal produced the date and holds only the
//! attributes that signal can provide. Callers branch on the variant (or on
//! [`DateType`] / [`DateClass`]) instead of testing runtime types.

use serde::{Deserialize, Serialize};

// ─── Attribute bags ──────────────────────────────────────────────────────────

/// A date parsed out of the document URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlDate {
  pub url: String,
}

/// A date from an HTTP response header or an HTML `<meta>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaDate {
  /// Header name or meta attribute value, e.g. `last-modified`.
  pub keyword: Option<String>,
  pub tag:     Option<String>,
}

/// A date carried by structural markup (an attribute, a `<time>` element)
/// rather than free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureDate {
  pub keyword:          Option<String>,
  /// Name of the enclosing element.
  pub tag:              Option<String>,
  /// DOM nesting depth of the enclosing element.
  pub structural_depth: Option<u32>,
}

/// Where the keyword near a content date was found.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeywordLocation {
  /// In an attribute of the enclosing element.
  Attribute,
  /// In the text of the enclosing element.
  Content,
  /// No keyword nearby.
  #[default]
  Absent,
}

/// A date found in the visible text of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDate {
  pub keyword:                       Option<String>,
  pub tag:                           Option<String>,
  pub structural_depth:              Option<u32>,
  /// Character offset of the date inside its element's text.
  pub position_in_tag_text:          Option<usize>,
  /// Character offset of the date inside the whole document text.
  pub position_in_document:          Option<usize>,
  /// `position_in_document` divided by the document length, in `0.0..=1.0`.
  pub relative_position_in_document: Option<f64>,
  /// Characters between the date and its keyword.
  pub distance_to_keyword:           Option<usize>,
  pub keyword_location:              KeywordLocation,
  /// Lower is stronger; used to break ties between otherwise equal dates.
  pub keyword_priority:              Option<u8>,
  /// Rank of this date among all content dates of the document, in document
  /// order.
  pub ordinal_position:              Option<usize>,
  /// The same date also appears in the URL.
  pub in_url:                        bool,
  /// The same date also appears in a header or meta element.
  pub in_meta:                       bool,
  /// The same date also appears as a structure date.
  pub in_structure:                  bool,
  /// The enclosing element has no child elements.
  pub simple_tag:                    bool,
  /// The enclosing element is a heading (`h1` … `h6`).
  pub h_tag:                         bool,
  /// Element names from the document root down to the enclosing element.
  pub tag_name_list:                 Vec<String>,
}

/// A date found in text that cites or links to another resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDate {
  /// The referenced resource, if known.
  pub link: Option<String>,
}

// ─── DateKind ────────────────────────────────────────────────────────────────

/// The tagged variant over all date sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateKind {
  /// No technique context, as for ground-truth labels and download dates.
  #[default]
  Plain,
  Url(UrlDate),
  Meta(MetaDate),
  Structure(StructureDate),
  Content(ContentDate),
  /// Found in web-archive metadata.
  Archive,
  Reference(ReferenceDate),
}

impl DateKind {
  pub fn date_type(&self) -> DateType {
    match self {
      Self::Plain => DateType::Plain,
      Self::Url(_) => DateType::Url,
      Self::Meta(_) => DateType::Meta,
      Self::Structure(_) => DateType::Structure,
      Self::Content(_) => DateType::Content,
      Self::Archive => DateType::Archive,
      Self::Reference(_) => DateType::Reference,
    }
  }

  /// The trigger phrase near which the date was found, for the kinds that
  /// have one.
  pub fn keyword(&self) -> Option<&str> {
    match self {
      Self::Meta(m) => m.keyword.as_deref(),
      Self::Structure(s) => s.keyword.as_deref(),
      Self::Content(c) => c.keyword.as_deref(),
      _ => None,
    }
  }

  pub fn tag(&self) -> Option<&str> {
    match self {
      Self::Meta(m) => m.tag.as_deref(),
      Self::Structure(s) => s.tag.as_deref(),
      Self::Content(c) => c.tag.as_deref(),
      _ => None,
    }
  }

  pub fn structural_depth(&self) -> Option<u32> {
    match self {
      Self::Structure(s) => s.structural_depth,
      Self::Content(c) => c.structural_depth,
      _ => None,
    }
  }
}

// ─── Discriminants and classes ───────────────────────────────────────────────

/// Fieldless discriminant of [`DateKind`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DateType {
  Plain,
  Url,
  Meta,
  Structure,
  Content,
  Archive,
  Reference,
}

impl DateType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Plain => "plain",
      Self::Url => "url",
      Self::Meta => "meta",
      Self::Structure => "structure",
      Self::Content => "content",
      Self::Archive => "archive",
      Self::Reference => "reference",
    }
  }
}

impl std::fmt::Display for DateType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A type filter over [`DateKind`]: either one concrete type or one of the
/// groups that share attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateClass {
  /// Every date.
  Any,
  /// Dates that carry a keyword: meta, structure and content dates.
  Keyword,
  /// Dates found inside the document body: structure and content dates.
  Body,
  /// Exactly one concrete type.
  Exactly(DateType),
}

impl DateClass {
  pub fn matches(self, kind: &DateKind) -> bool {
    let ty = kind.date_type();
    match self {
      Self::Any => true,
      Self::Keyword => {
        matches!(ty, DateType::Meta | DateType::Structure | DateType::Content)
      }
      Self::Body => matches!(ty, DateType::Structure | DateType::Content),
      Self::Exactly(t) => t == ty,
    }
  }
}

impl From<DateType> for DateClass {
  fn from(t: DateType) -> Self { Self::Exactly(t) }
}
