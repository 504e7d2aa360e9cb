//! Tests for the dataset codec.

use kairos_core::{DateParts, Exactness};

use crate::{Error, HeaderField, PageDateType, SEPARATOR, parse};

fn line(fields: &[&str]) -> String { fields.join(SEPARATOR) }

const HEADER: &[&str] = &[
  "url",
  "path",
  "pub_date",
  "pub_sureness",
  "mod_date",
  "mod_sureness",
  "google_date",
  "hakia_date",
  "ask_date",
  "header_last_mod",
  "header_date",
  "down_date",
];

fn dataset_text(rows: &[&[&str]]) -> String {
  let mut out = line(HEADER);
  for row in rows {
    out.push('\n');
    out.push_str(&line(row));
  }
  out.push('\n');
  out
}

const STORY: &[&str] = &[
  "http://example.com/story",
  "pages/story.html",
  "2010-08-01",
  "true",
  "2010-08-03 12:30",
  "false",
  "2010-08-01",
  "0",
  "-1",
  "Tue, 03 Aug 2010 12:30:00 GMT",
  "Mon, 20 Sep 2010 08:00:00 GMT",
  "2010-09-20 08:00:05",
];

const BLOG: &[&str] = &[
  "http://example.org/blog",
  "pages/blog.html",
  "0",
  "false",
  "2009",
  "TRUE",
  "",
  "",
  "",
  "",
  "Mon, 20 Sep 2010 08:01:00 GMT",
  "2010-09-20 08:01:02",
];

// ─── Parsing ─────────────────────────────────────────────────────────────────

#[test]
fn parses_known_columns() {
  let dataset = parse(&dataset_text(&[STORY, BLOG])).unwrap();
  assert_eq!(dataset.len(), 2);

  let story = dataset.get("http://example.com/story").unwrap();
  assert_eq!(story.path.as_deref(), Some("pages/story.html"));
  assert!(story.sure(PageDateType::Publish));
  assert!(!story.sure(PageDateType::LastModified));
  assert_eq!(story.google_date.as_deref(), Some("2010-08-01"));
  assert_eq!(
    story.header(HeaderField::LastModified),
    Some("Tue, 03 Aug 2010 12:30:00 GMT")
  );

  let published = story.expected(PageDateType::Publish).unwrap();
  assert_eq!(published.parts(), DateParts::ymd(2010, 8, 1));
  let modified = story.expected(PageDateType::LastModified).unwrap();
  assert_eq!(modified.exactness(), Exactness::Minute);
  assert_eq!(story.downloaded().unwrap().second(), Some(5));
}

#[test]
fn placeholders_and_empty_cells_mean_absent() {
  let dataset = parse(&dataset_text(&[BLOG])).unwrap();
  let blog = &dataset.entries()[0];
  assert!(blog.expected(PageDateType::Publish).is_none());
  assert_eq!(
    blog.expected(PageDateType::LastModified).unwrap().exactness(),
    Exactness::Year
  );
  assert!(blog.sure(PageDateType::LastModified));
  assert!(blog.google_date.is_none());
  assert!(blog.header(HeaderField::LastModified).is_none());
}

#[test]
fn keeps_file_order_and_skips_blank_lines() {
  let text = format!(
    "\n{}\n\n{}\r\n   \n{}\n",
    line(HEADER),
    line(STORY),
    line(BLOG)
  );
  let dataset = parse(&text).unwrap();
  let urls: Vec<&str> = dataset.iter().map(|e| e.url.as_str()).collect();
  assert_eq!(urls, ["http://example.com/story", "http://example.org/blog"]);
}

#[test]
fn unknown_columns_land_in_extra() {
  let text = format!(
    "{}\n{}\n",
    line(&["url", "topic", "pub_date"]),
    line(&["http://example.com/a", "sports", "2011-02-03"])
  );
  let dataset = parse(&text).unwrap();
  let entry = &dataset.entries()[0];
  assert_eq!(entry.extra.get("topic").map(String::as_str), Some("sports"));
  assert!(entry.expected(PageDateType::Publish).is_some());
  assert!(entry.expected(PageDateType::LastModified).is_none());
}

#[test]
fn duplicate_urls_keep_the_first_row() {
  let mut second = STORY.to_vec();
  second[2] = "1999-01-01";
  let dataset = parse(&dataset_text(&[STORY, &second[..]])).unwrap();
  assert_eq!(dataset.len(), 1);
  assert_eq!(
    dataset.entries()[0].pub_date.as_deref(),
    Some("2010-08-01")
  );
}

#[test]
fn take_truncates_in_order() {
  let dataset = parse(&dataset_text(&[STORY, BLOG])).unwrap().take(1);
  assert_eq!(dataset.len(), 1);
  assert_eq!(dataset.entries()[0].url, "http://example.com/story");
  assert_eq!(parse(&dataset_text(&[STORY])).unwrap().take(10).len(), 1);
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn empty_input_has_no_header() {
  assert!(matches!(parse(""), Err(Error::MissingHeader)));
  assert!(matches!(parse("\n  \n"), Err(Error::MissingHeader)));
}

#[test]
fn header_without_url_column_is_rejected() {
  let text = line(&["path", "pub_date"]);
  assert!(matches!(parse(&text), Err(Error::MissingUrlColumn)));
}

#[test]
fn short_row_reports_its_line() {
  let text = format!("{}\n{}\n{}\n", line(HEADER), line(STORY), "http://x.com");
  match parse(&text) {
    Err(Error::MalformedRow { line, expected, found }) => {
      assert_eq!(line, 3);
      assert_eq!(expected, HEADER.len());
      assert_eq!(found, 1);
    }
    other => panic!("expected MalformedRow, got {other:?}"),
  }
}

#[test]
fn header_only_gives_an_empty_dataset() {
  let dataset = parse(&line(HEADER)).unwrap();
  assert!(dataset.is_empty());
}

// ─── Page date type ──────────────────────────────────────────────────────────

#[test]
fn page_date_type_names() {
  assert_eq!("publish".parse::<PageDateType>().unwrap(), PageDateType::Publish);
  assert_eq!(
    "last-modified".parse::<PageDateType>().unwrap(),
    PageDateType::LastModified
  );
  assert!("yesterday".parse::<PageDateType>().is_err());
  assert_eq!(PageDateType::LastModified.to_string(), "last_modified");
  assert_eq!(
    serde_json::to_string(&PageDateType::LastModified).unwrap(),
    "\"last_modified\""
  );
}
