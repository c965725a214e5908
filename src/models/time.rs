use std::fmt;

use chrono::{DateTime, FixedOffset, Local};

/// Wall-clock time in the caller's own offset, so dates land on the local
/// calendar day.
pub trait Clock: fmt::Debug + Send + Sync {
  fn now(&self) -> DateTime<FixedOffset>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
  }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
  fn now(&self) -> DateTime<FixedOffset> {
    self.0
  }
}

/// Formats as "March 15, 2024", using the day as seen in `at`'s own offset.
pub fn format_long_date(at: DateTime<FixedOffset>) -> String {
  at.format("%B %-d, %Y").to_string()
}
