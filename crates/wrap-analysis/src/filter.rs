//! Calendar-year filtering at a fixed local offset.

use chrono::{DateTime, Utc};
use wrap_core::summary::SkipCounts;
use wrap_core::time::{LocalOffset, parse_timestamp};

/// The local calendar year records must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub year: i32,
    pub offset: LocalOffset,
}

/// Where a creation timestamp lands relative to a [`YearWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Inside(DateTime<Utc>),
    OutOfRange,
    InvalidTimestamp,
}

impl YearWindow {
    #[must_use]
    pub const fn new(year: i32, offset: LocalOffset) -> Self {
        Self { year, offset }
    }

    #[must_use]
    pub fn place(&self, created_at: &str) -> Placement {
        match parse_timestamp(created_at) {
            Ok(instant) if self.offset.local_year(instant) == self.year => {
                Placement::Inside(instant)
            }
            Ok(_) => Placement::OutOfRange,
            Err(_) => Placement::InvalidTimestamp,
        }
    }
}

/// A record that passed the year filter, with its parsed creation instant.
#[derive(Debug, Clone, Copy)]
pub struct Retained<'a, T> {
    pub record: &'a T,
    pub created: DateTime<Utc>,
}

/// Keep the records created inside `window`, in input order.
///
/// The returned counts cover timestamp problems and out-of-range records;
/// `unparseable` is left at zero for the caller to fill in.
pub fn retain_in_year<'a, T, F>(
    records: &'a [T],
    created_at: F,
    window: YearWindow,
) -> (Vec<Retained<'a, T>>, SkipCounts)
where
    F: Fn(&T) -> &str,
{
    let mut kept = Vec::with_capacity(records.len());
    let mut skipped = SkipCounts::default();

    for record in records {
        match window.place(created_at(record)) {
            Placement::Inside(created) => kept.push(Retained { record, created }),
            Placement::OutOfRange => skipped.out_of_range += 1,
            Placement::InvalidTimestamp => skipped.invalid_timestamp += 1,
        }
    }

    (kept, skipped)
}
