//! Dataset text parser.
//!
//! Pipeline:
//!   raw &str
//!     └─ first non-blank line  → Vec<Column>
//!          └─ each further line → split on SEPARATOR → Entry
//!               └─ drop repeated URLs → Dataset

use std::collections::HashSet;

use crate::{
  Dataset, Entry, SEPARATOR,
  error::{Error, Result},
};

// ─── Columns ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Column {
  Url,
  Path,
  PubDate,
  PubSureness,
  ModDate,
  ModSureness,
  GoogleDate,
  HakiaDate,
  AskDate,
  HeaderLastMod,
  HeaderDate,
  DownDate,
  Other(String),
}

impl Column {
  fn from_header(name: &str) -> Self {
    match name {
      "url" => Self::Url,
      "path" => Self::Path,
      "pub_date" => Self::PubDate,
      "pub_sureness" => Self::PubSureness,
      "mod_date" => Self::ModDate,
      "mod_sureness" => Self::ModSureness,
      "google_date" => Self::GoogleDate,
      "hakia_date" => Self::HakiaDate,
      "ask_date" => Self::AskDate,
      "header_last_mod" => Self::HeaderLastMod,
      "header_date" => Self::HeaderDate,
      "down_date" => Self::DownDate,
      other => Self::Other(other.to_string()),
    }
  }
}

// ─── Low-level helpers
// ────────────────────────────────────────────────────────

fn split_fields(line: &str) -> Vec<&str> {
  line.split(SEPARATOR).map(str::trim).collect()
}

fn cell(value: &str) -> Option<String> {
  if value.is_empty() { None } else { Some(value.to_string()) }
}

fn flag(value: &str) -> bool { value.eq_ignore_ascii_case("true") }

fn build_entry(columns: &[Column], fields: &[&str]) -> Entry {
  let mut entry = Entry::default();
  for (column, &value) in columns.iter().zip(fields) {
    match column {
      Column::Url => entry.url = value.to_string(),
      Column::Path => entry.path = cell(value),
      Column::PubDate => entry.pub_date = cell(value),
      Column::PubSureness => entry.pub_sureness = flag(value),
      Column::ModDate => entry.mod_date = cell(value),
      Column::ModSureness => entry.mod_sureness = flag(value),
      Column::GoogleDate => entry.google_date = cell(value),
      Column::HakiaDate => entry.hakia_date = cell(value),
      Column::AskDate => entry.ask_date = cell(value),
      Column::HeaderLastMod => entry.header_last_mod = cell(value),
      Column::HeaderDate => entry.header_date = cell(value),
      Column::DownDate => entry.down_date = cell(value),
      Column::Other(name) => {
        entry.extra.insert(name.clone(), value.to_string());
      }
    }
  }
  entry
}

// ─── Entry point ─────────────────────────────────────────────────────────────

pub(crate) fn parse_dataset(input: &str) -> Result<Dataset> {
  // Line numbers are 1-based to match editors.
  let mut lines = input
    .lines()
    .enumerate()
    .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
    .filter(|(_, l)| !l.trim().is_empty());

  let (_, header) = lines.next().ok_or(Error::MissingHeader)?;
  let columns: Vec<Column> =
    split_fields(header).into_iter().map(Column::from_header).collect();
  if !columns.contains(&Column::Url) {
    return Err(Error::MissingUrlColumn);
  }

  let mut seen = HashSet::new();
  let mut entries = Vec::new();
  for (line, text) in lines {
    let fields = split_fields(text);
    if fields.len() < columns.len() {
      return Err(Error::MalformedRow {
        line,
        expected: columns.len(),
        found: fields.len(),
      });
    }
    if fields.len() > columns.len() {
      tracing::warn!(
        line,
        extra = fields.len() - columns.len(),
        "ignoring fields beyond the header"
      );
    }

    let entry = build_entry(&columns, &fields);
    if !seen.insert(entry.url.clone()) {
      tracing::warn!(line, url = %entry.url, "duplicate url, keeping the first");
      continue;
    }
    entries.push(entry);
  }

  tracing::debug!(columns = columns.len(), entries = entries.len(), "parsed dataset");
  Ok(Dataset::new(entries))
}
