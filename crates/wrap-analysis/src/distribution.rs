//! Time-of-day and day-of-week distributions.

use std::collections::BTreeMap;

use wrap_core::enums::{DayOfWeek, DayPeriod};
use wrap_core::summary::{HourCount, PeakHour, PeriodBreakdown, TimePatterns, WeekdayCount};

/// A local (hour, weekday) pair for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub hour: u32,
    pub weekday: DayOfWeek,
}

/// Fixed-size hour and weekday counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Histogram {
    hours: [u64; 24],
    weekdays: [u64; 7],
}

impl Histogram {
    pub fn record(&mut self, slot: TimeSlot) {
        self.hours[(slot.hour % 24) as usize] += 1;
        self.weekdays[slot.weekday.index()] += 1;
    }

    #[must_use]
    pub fn from_slots<I: IntoIterator<Item = TimeSlot>>(slots: I) -> Self {
        let mut histogram = Self::default();
        for slot in slots {
            histogram.record(slot);
        }
        histogram
    }

    #[must_use]
    pub fn hour_counts(&self) -> Vec<HourCount> {
        (0u32..)
            .zip(self.hours)
            .map(|(hour, count)| HourCount { hour, count })
            .collect()
    }

    #[must_use]
    pub fn weekday_counts(&self) -> Vec<WeekdayCount> {
        DayOfWeek::ALL
            .into_iter()
            .zip(self.weekdays)
            .map(|(day, count)| WeekdayCount { day, count })
            .collect()
    }

    /// Busiest hour, earliest on ties. `None` when empty.
    #[must_use]
    pub fn peak_hour(&self) -> Option<PeakHour> {
        let (hour, count) = first_max((0u32..).zip(self.hours))?;
        Some(PeakHour {
            hour,
            label: twelve_hour_label(hour),
            count,
        })
    }

    /// Busiest weekday, earliest in the week on ties. `None` when empty.
    #[must_use]
    pub fn peak_weekday(&self) -> Option<WeekdayCount> {
        first_max(DayOfWeek::ALL.into_iter().zip(self.weekdays))
            .map(|(day, count)| WeekdayCount { day, count })
    }

    #[must_use]
    pub fn time_patterns(&self) -> TimePatterns {
        let mut periods = PeriodBreakdown::default();
        for (hour, count) in (0u32..).zip(self.hours) {
            periods.add(DayPeriod::of_hour(hour), count);
        }

        let peak_period = first_max(
            DayPeriod::ALL
                .into_iter()
                .map(|period| (period, periods.get(period))),
        )
        .map(|(period, _)| period);

        let weekend = DayOfWeek::ALL
            .into_iter()
            .filter(|day| day.is_weekend())
            .map(|day| self.weekdays[day.index()])
            .sum::<u64>();
        let total = self.weekdays.iter().sum::<u64>();
        let weekend_percentage = if total == 0 {
            0.0
        } else {
            round_to_tenth(ratio(weekend, total) * 100.0)
        };

        TimePatterns {
            periods,
            peak_period,
            chronotype: peak_period.map(|period| period.chronotype().to_string()),
            weekend_percentage,
        }
    }
}

/// First entry with the largest non-zero count.
fn first_max<K, I>(entries: I) -> Option<(K, u64)>
where
    I: IntoIterator<Item = (K, u64)>,
{
    entries.into_iter().fold(None, |best, (key, count)| match best {
        Some((_, best_count)) if best_count >= count => best,
        _ if count == 0 => best,
        _ => Some((key, count)),
    })
}

/// `0` -> `12 AM`, `13` -> `1 PM`.
#[must_use]
pub fn twelve_hour_label(hour: u32) -> String {
    let hour = hour % 24;
    let display = match hour % 12 {
        0 => 12,
        other => other,
    };
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    format!("{display} {meridiem}")
}

/// Count per key, where the key is `YYYY-MM`.
#[must_use]
pub fn monthly<'a, I: IntoIterator<Item = &'a str>>(months: I) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for month in months {
        *counts.entry(month.to_string()).or_default() += 1;
    }
    counts
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
