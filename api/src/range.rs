use crate::{StatsError, StatsResult};
use chrono::NaiveDate;
use log::debug;
use std::future::Future;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> StatsResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| StatsError::usage(format!("Invalid date {s:?} (expected YYYY-MM-DD): {e}")))
}

/// Inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> StatsResult<Self> {
        if start > end {
            return Err(StatsError::usage(format!(
                "Start date {start} is after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn len_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Every day from start to end, one day apart.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Run `per_day` for each day in order and concatenate what it returns.
///
/// Days are awaited one after another. The first error is returned as is and
/// everything gathered so far is dropped.
pub async fn collect_days<T, F, Fut>(range: DateRange, mut per_day: F) -> StatsResult<Vec<T>>
where
    F: FnMut(NaiveDate) -> Fut,
    Fut: Future<Output = StatsResult<Vec<T>>>,
{
    let mut collected = Vec::new();
    for day in range.days() {
        let items = per_day(day).await?;
        debug!("{day}: {} item(s)", items.len());
        collected.extend(items);
    }
    Ok(collected)
}
