//! Parsing of the date strings found in ground-truth files and HTTP headers.
//!
//! Recognised inputs:
//!   - normalized dates: `2010`, `2010-08`, `2010-08-01`, optionally followed
//!     by ` ` or `T` and `07`, `07:04` or `07:04:09`, optionally ending in `Z`
//!     or an offset such as `+02:00`
//!   - RFC 3339 timestamps: `2010-08-01T07:04:09.250+02:00`
//!   - RFC 1123 / RFC 2822 header dates: `Sun, 01 Aug 2010 07:04:09 GMT`
//!
//! Dates that carry an offset are shifted to UTC; the offset is kept as the
//! date's time zone.
//!
//! Anything else, including the placeholders `0`, `-1` and `null` used for
//! "no date", yields `None`.

use chrono::{DateTime, FixedOffset};

use crate::{
  date::{DateParts, ExtractedDate},
  exactness::Exactness,
  kind::DateKind,
};

const RFC_1123: &str = "RFC 1123";
const RFC_3339: &str = "RFC 3339";

/// Parse `input` into a plain date, or `None` if no known format matches.
pub fn parse_date(input: &str) -> Option<ExtractedDate> {
  let s = input.trim();
  if is_placeholder(s) {
    return None;
  }
  let parsed = parse_normalized(s)
    .or_else(|| parse_offset(s, RFC_3339, DateTime::<FixedOffset>::parse_from_rfc3339))
    .or_else(|| parse_offset(s, RFC_1123, DateTime::<FixedOffset>::parse_from_rfc2822));
  if parsed.is_none() {
    tracing::debug!(input = s, "no date format matched");
  }
  parsed
}

fn is_placeholder(s: &str) -> bool {
  s.is_empty()
    || s == "0"
    || s == "-1"
    || s.eq_ignore_ascii_case("null")
    || s.eq_ignore_ascii_case("none")
}

/// The format identifier recorded for a normalized date of this exactness.
fn normalized_format(exactness: Exactness) -> &'static str {
  match exactness {
    Exactness::Year => "YYYY",
    Exactness::Month => "YYYY-MM",
    Exactness::Day => "YYYY-MM-DD",
    Exactness::Hour => "YYYY-MM-DD HH",
    Exactness::Minute => "YYYY-MM-DD HH:MM",
    Exactness::Second => "YYYY-MM-DD HH:MM:SS",
  }
}

/// Parse an all-digit field of `min..=max` characters.
fn number<T: std::str::FromStr>(s: &str, min: usize, max: usize) -> Option<T> {
  let ok = (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
  if ok { s.parse().ok() } else { None }
}

fn parse_normalized(s: &str) -> Option<ExtractedDate> {
  let (date_part, time_part) = match s.split_once([' ', 'T']) {
    Some((d, t)) => (d, Some(t.trim())),
    None => (s, None),
  };

  let mut fields = date_part.split('-');
  let year: i32 = number(fields.next()?, 4, 4)?;
  let month: Option<u32> = match fields.next() {
    Some(m) => Some(number(m, 1, 2)?),
    None => None,
  };
  let day: Option<u32> = match fields.next() {
    Some(d) => Some(number(d, 1, 2)?),
    None => None,
  };
  if fields.next().is_some() {
    return None;
  }

  let mut time_zone = None;
  let mut offset = None;
  let mut time = [None; 3];
  if let Some(t) = time_part {
    if day.is_none() {
      return None;
    }
    let t = match t.strip_suffix('Z') {
      Some(rest) => {
        time_zone = Some("UTC".to_owned());
        rest
      }
      None => {
        let (rest, o) = split_offset(t)?;
        offset = o;
        rest
      }
    };
    let mut pieces = t.split(':');
    for slot in time.iter_mut() {
      match pieces.next() {
        Some(p) => *slot = Some(number::<u32>(p, 1, 2)?),
        None => break,
      }
    }
    if pieces.next().is_some() || time[0].is_none() {
      return None;
    }
  }

  let parts = DateParts {
    year,
    month,
    day,
    hour: time[0],
    minute: time[1],
    second: time[2],
  };
  let mut date = match ExtractedDate::new(parts, DateKind::Plain) {
    Ok(d) => d,
    Err(e) => {
      tracing::debug!(input = s, error = %e, "rejected normalized date");
      return None;
    }
  };
  if let Some(offset) = offset {
    date = shift_to_utc(&date, offset)?;
    time_zone = Some(offset.to_string());
  }
  let format = normalized_format(date.exactness());
  let date = date.with_source(s, format);
  Some(match time_zone {
    Some(tz) => date.with_time_zone(tz),
    None => date,
  })
}

/// Split a trailing `+HH:MM`, `-HH:MM` or `+HHMM` offset off a time of day.
/// A sign followed by anything else makes the whole time invalid.
fn split_offset(t: &str) -> Option<(&str, Option<FixedOffset>)> {
  let Some(at) = t.rfind(['+', '-']) else {
    return Some((t, None));
  };
  let (time, offset) = t.split_at(at);
  let sign = if offset.starts_with('-') { -1 } else { 1 };
  let digits = &offset[1..];
  let (h, m) = match digits.split_once(':') {
    Some(hm) => hm,
    None if digits.len() == 4 => (digits.get(..2)?, digits.get(2..)?),
    None => return None,
  };
  let hours: i32 = number(h, 2, 2)?;
  let minutes: i32 = number(m, 2, 2)?;
  if minutes > 59 {
    return None;
  }
  let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?;
  Some((time.trim_end(), Some(offset)))
}

/// Move a date written in local time at `offset` to UTC, keeping its
/// exactness. Only called once the hour is known.
fn shift_to_utc(date: &ExtractedDate, offset: FixedOffset) -> Option<ExtractedDate> {
  let exactness = date.exactness();
  let utc = date
    .normalized_date()
    .and_local_timezone(offset)
    .single()?
    .naive_utc();
  let parts = ExtractedDate::from_datetime(utc).parts().truncate(exactness);
  ExtractedDate::new(parts, DateKind::Plain).ok()
}

fn parse_offset(
  s: &str,
  format: &str,
  parse: fn(&str) -> chrono::ParseResult<DateTime<FixedOffset>>,
) -> Option<ExtractedDate> {
  let dt = parse(s).ok()?;
  Some(
    ExtractedDate::from_datetime(dt.naive_utc())
      .with_source(s, format)
      .with_time_zone(dt.offset().to_string()),
  )
}
