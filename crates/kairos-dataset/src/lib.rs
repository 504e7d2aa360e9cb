//! Ground-truth dataset codec for date-extraction evaluation.
//!
//! A dataset is a text file with one example page per line. Fields are
//! separated by [`SEPARATOR`]; the first line names the columns. Each row
//! records the URL, the hand-labelled publish and last-modified dates, the
//! HTTP header dates seen when the page was downloaded and the download date
//! itself. Pure synchronous; the only I/O is [`read`].
//!
//! ```no_run
//! use kairos_dataset::{PageDateType, read};
//!
//! let dataset = read("dataset.txt").unwrap();
//! for entry in &dataset {
//!   println!("{} {:?}", entry.url, entry.expected(PageDateType::Publish));
//! }
//! ```

pub mod error;
mod parse;

use std::{collections::BTreeMap, path::Path, str::FromStr};

use kairos_core::{ExtractedDate, parse_date};
use serde::{Deserialize, Serialize};

pub use error::{Error, Result};

/// Field separator between the columns of a dataset line.
pub const SEPARATOR: &str = " *;_;* ";

// ─── Public types
// ─────────────────────────────────────────────────────────────

/// Which hand-labelled date of a page an evaluation targets.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum PageDateType {
  #[default]
  Publish,
  LastModified,
}

impl PageDateType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Publish => "publish",
      Self::LastModified => "last_modified",
    }
  }
}

impl std::fmt::Display for PageDateType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PageDateType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "publish" | "pub" => Ok(Self::Publish),
      "last_modified" | "last-modified" | "mod" => Ok(Self::LastModified),
      _ => Err(Error::UnknownPageDateType(s.to_string())),
    }
  }
}

/// The HTTP headers recorded for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
  LastModified,
  Date,
}

/// One labelled example page.
///
/// Date columns are kept as the raw strings found in the file; empty cells
/// and the `0` / `-1` / `null` placeholders come back as `None` from the
/// typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
  pub url:             String,
  pub path:            Option<String>,
  pub pub_date:        Option<String>,
  pub pub_sureness:    bool,
  pub mod_date:        Option<String>,
  pub mod_sureness:    bool,
  pub google_date:     Option<String>,
  pub hakia_date:      Option<String>,
  pub ask_date:        Option<String>,
  pub header_last_mod: Option<String>,
  pub header_date:     Option<String>,
  pub down_date:       Option<String>,
  /// Columns this codec does not know, by header name.
  pub extra:           BTreeMap<String, String>,
}

impl Entry {
  /// The hand-labelled date for `target`, if the page has one.
  pub fn expected(&self, target: PageDateType) -> Option<ExtractedDate> {
    let raw = match target {
      PageDateType::Publish => self.pub_date.as_deref(),
      PageDateType::LastModified => self.mod_date.as_deref(),
    };
    raw.and_then(parse_date)
  }

  /// Whether the labeller was sure about the date for `target`.
  pub fn sure(&self, target: PageDateType) -> bool {
    match target {
      PageDateType::Publish => self.pub_sureness,
      PageDateType::LastModified => self.mod_sureness,
    }
  }

  /// When the page was downloaded.
  pub fn downloaded(&self) -> Option<ExtractedDate> {
    self.down_date.as_deref().and_then(parse_date)
  }

  pub fn header(&self, field: HeaderField) -> Option<&str> {
    match field {
      HeaderField::LastModified => self.header_last_mod.as_deref(),
      HeaderField::Date => self.header_date.as_deref(),
    }
  }
}

/// A parsed dataset. Entries keep file order; URLs are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
  entries: Vec<Entry>,
}

impl Dataset {
  pub fn new(entries: Vec<Entry>) -> Self { Self { entries } }

  pub fn entries(&self) -> &[Entry] { &self.entries }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  pub fn iter(&self) -> std::slice::Iter<'_, Entry> { self.entries.iter() }

  pub fn get(&self, url: &str) -> Option<&Entry> {
    self.entries.iter().find(|e| e.url == url)
  }

  /// The first `n` entries.
  pub fn take(mut self, n: usize) -> Self {
    self.entries.truncate(n);
    self
  }
}

impl<'a> IntoIterator for &'a Dataset {
  type IntoIter = std::slice::Iter<'a, Entry>;
  type Item = &'a Entry;

  fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

// ─── Public API
// ───────────────────────────────────────────────────────────────

/// Parse a dataset from its text form.
pub fn parse(input: &str) -> Result<Dataset> { parse::parse_dataset(input) }

/// Read and parse the dataset file at `path`.
pub fn read(path: impl AsRef<Path>) -> Result<Dataset> {
  let path = path.as_ref();
  let input = std::fs::read_to_string(path)?;
  let dataset = parse(&input)?;
  tracing::info!(path = %path.display(), entries = dataset.len(), "read dataset");
  Ok(dataset)
}

#[cfg(test)]
mod tests;
