use crate::StatsError;
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// How far back a player's game log reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatWindow {
    Week,
    TwoWeeks,
    Month,
    /// The provider's full log for the current season.
    #[default]
    Season,
}

impl StatWindow {
    pub fn label(&self) -> &'static str {
        match self {
            StatWindow::Week => "week",
            StatWindow::TwoWeeks => "2weeks",
            StatWindow::Month => "month",
            StatWindow::Season => "season",
        }
    }

    pub fn days(&self) -> Option<u64> {
        match self {
            StatWindow::Week => Some(7),
            StatWindow::TwoWeeks => Some(14),
            StatWindow::Month => Some(30),
            StatWindow::Season => None,
        }
    }

    /// `(from, to)` ending today, or `None` for the whole season.
    pub fn date_range(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let days = self.days()?;
        let from = today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        Some((from, today))
    }
}

impl FromStr for StatWindow {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(StatWindow::Week),
            "2weeks" => Ok(StatWindow::TwoWeeks),
            "month" => Ok(StatWindow::Month),
            "season" => Ok(StatWindow::Season),
            _ => Err(StatsError::usage(format!(
                "Invalid time range {s:?}. Use week, 2weeks, month or season"
            ))),
        }
    }
}

impl fmt::Display for StatWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Provider season label for the season in progress on `date`, e.g. `2024-25`.
/// Seasons tip off in October; earlier months belong to the previous season.
pub fn season_label(date: NaiveDate) -> String {
    let start = if date.month() >= 10 { date.year() } else { date.year() - 1 };
    format!("{start}-{:02}", (start + 1) % 100)
}
