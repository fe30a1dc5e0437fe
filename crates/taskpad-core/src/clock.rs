use std::fmt::Debug;

use chrono::{
  DateTime,
  Local,
  NaiveDate,
  NaiveTime,
  Utc
};

pub const ISO_DATE_FORMAT: &str =
  "%Y-%m-%d";

/// Source of "now" for timestamps and
/// of the local calendar date used by
/// the overdue and today filters.
pub trait Clock: Debug {
  fn now(&self) -> DateTime<Utc>;

  fn today(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }

  fn today(&self) -> String {
    format_iso_date(
      Local::now().date_naive()
    )
  }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
  now:   DateTime<Utc>,
  today: NaiveDate
}

impl FixedClock {
  pub fn new(
    now: DateTime<Utc>,
    today: NaiveDate
  ) -> Self {
    Self {
      now,
      today
    }
  }

  /// Pins both the date and the
  /// timestamp to midnight UTC of
  /// `today`.
  pub fn on(today: NaiveDate) -> Self {
    Self {
      now: today
        .and_time(NaiveTime::MIN)
        .and_utc(),
      today
    }
  }
}

impl Clock for FixedClock {
  fn now(&self) -> DateTime<Utc> {
    self.now
  }

  fn today(&self) -> String {
    format_iso_date(self.today)
  }
}

pub fn format_iso_date(
  date: NaiveDate
) -> String {
  date
    .format(ISO_DATE_FORMAT)
    .to_string()
}

/// Strict `YYYY-MM-DD`; chrono alone
/// would also accept unpadded months.
pub fn parse_iso_date(
  raw: &str
) -> Option<NaiveDate> {
  if raw.len() != 10 {
    return None;
  }
  NaiveDate::parse_from_str(
    raw,
    ISO_DATE_FORMAT
  )
  .ok()
}
