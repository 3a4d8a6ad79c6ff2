//! Per-game projection of a player's game log and the averages over it.
//!
//! Averages divide each metric's sum by the number of games in the log,
//! including games where that metric was missing. A player with a patchy log
//! is pulled toward zero. Consumers rely on these numbers, keep it this way.

use crate::stats::{ResultSet, Row};
use crate::{AggregateStats, PlayerStatSnapshot, PlayerStatsReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    FgPercent,
    FtPercent,
    ThreePointersMade,
    Turnovers,
    Minutes,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::Points,
        Metric::Rebounds,
        Metric::Assists,
        Metric::Steals,
        Metric::Blocks,
        Metric::FgPercent,
        Metric::FtPercent,
        Metric::ThreePointersMade,
        Metric::Turnovers,
        Metric::Minutes,
    ];

    pub fn of(self, game: &PlayerStatSnapshot) -> Option<f64> {
        match self {
            Metric::Points => game.points,
            Metric::Rebounds => game.rebounds,
            Metric::Assists => game.assists,
            Metric::Steals => game.steals,
            Metric::Blocks => game.blocks,
            Metric::FgPercent => game.fg_percent,
            Metric::FtPercent => game.ft_percent,
            Metric::ThreePointersMade => game.three_pm,
            Metric::Turnovers => game.turnovers,
            Metric::Minutes => game.minutes,
        }
    }

    fn slot(self, averages: &mut AggregateStats) -> &mut Option<f64> {
        match self {
            Metric::Points => &mut averages.points,
            Metric::Rebounds => &mut averages.rebounds,
            Metric::Assists => &mut averages.assists,
            Metric::Steals => &mut averages.steals,
            Metric::Blocks => &mut averages.blocks,
            Metric::FgPercent => &mut averages.fg_percent,
            Metric::FtPercent => &mut averages.ft_percent,
            Metric::ThreePointersMade => &mut averages.three_pm,
            Metric::Turnovers => &mut averages.turnovers,
            Metric::Minutes => &mut averages.minutes,
        }
    }
}

impl AggregateStats {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Points => self.points,
            Metric::Rebounds => self.rebounds,
            Metric::Assists => self.assists,
            Metric::Steals => self.steals,
            Metric::Blocks => self.blocks,
            Metric::FgPercent => self.fg_percent,
            Metric::FtPercent => self.ft_percent,
            Metric::ThreePointersMade => self.three_pm,
            Metric::Turnovers => self.turnovers,
            Metric::Minutes => self.minutes,
        }
    }
}

/// Round to one decimal place. Decides on the exact binary value, so `0.15`
/// (stored just below) goes down, and exact ties go to the even digit.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Average every metric over `games`. `None` for an empty log.
pub fn average_snapshots(games: &[PlayerStatSnapshot]) -> Option<AggregateStats> {
    if games.is_empty() {
        return None;
    }

    let played = games.len() as f64;
    let mut averages = AggregateStats::default();
    for metric in Metric::ALL {
        let mut reported = false;
        let total: f64 = games
            .iter()
            .filter_map(|g| metric.of(g))
            .inspect(|_| reported = true)
            .sum();
        if reported {
            *metric.slot(&mut averages) = Some(round1(total / played));
        }
    }
    Some(averages)
}

impl PlayerStatsReport {
    pub fn from_games(games: Vec<PlayerStatSnapshot>) -> Self {
        Self {
            averages: average_snapshots(&games),
            games_played: games.len(),
            games,
        }
    }
}

/// Project one game log row. Shooting percentages arrive as fractions and
/// are scaled to 0–100; everything else passes through.
pub fn project_game_log_row(row: &Row<'_>) -> PlayerStatSnapshot {
    let percent = |column: &str| row.float(column).map(|fraction| round1(fraction * 100.0));

    PlayerStatSnapshot {
        date: row.text("GAME_DATE"),
        points: row.float("PTS"),
        rebounds: row.float("REB"),
        assists: row.float("AST"),
        steals: row.float("STL"),
        blocks: row.float("BLK"),
        fg_percent: percent("FG_PCT"),
        ft_percent: percent("FT_PCT"),
        three_pm: row.float("FG3M"),
        turnovers: row.float("TOV"),
        minutes: minutes_played(row),
    }
}

pub fn game_log_snapshots(set: &ResultSet) -> Vec<PlayerStatSnapshot> {
    set.rows().map(|row| project_game_log_row(&row)).collect()
}

/// `MIN` is a plain number on current seasons and `"MM:SS"` on some older logs.
fn minutes_played(row: &Row<'_>) -> Option<f64> {
    if let Some(minutes) = row.float("MIN") {
        return Some(minutes);
    }
    let text = row.text("MIN")?;
    let (mins, secs) = text.trim().split_once(':')?;
    let mins: f64 = mins.parse().ok()?;
    let secs: f64 = secs.parse().ok()?;
    Some(round1(mins + secs / 60.0))
}
