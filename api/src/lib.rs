pub mod aggregate;
pub mod client;
pub mod error;
pub mod matchup;
pub mod merge;
pub mod profile;
pub mod range;
pub mod roster;
pub mod service;
pub mod stats;
pub mod window;

pub use error::{StatsError, StatsResult};

use serde::Serialize;

// ---------------------------------------------------------------------------
// Domain types — consumer-facing shapes, independent of the provider wire format
// ---------------------------------------------------------------------------

/// One team-per-game row from the league game finder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGameRow {
    pub game_id: String,
    pub date: String,
    pub matchup: String,
    pub team_id: Option<u64>,
    pub team_name: Option<String>,
    pub points: Option<u32>,
}

/// Which side of a matchup a team row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// The game finder only ever returns completed games.
    #[default]
    Final,
}

/// One half of a merged game. Every field stays `None` until a row for that side arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamSide {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub score: Option<u32>,
}

impl TeamSide {
    pub fn is_filled(&self) -> bool {
        self.id.is_some() || self.name.is_some() || self.score.is_some()
    }
}

impl From<&RawGameRow> for TeamSide {
    fn from(row: &RawGameRow) -> Self {
        Self {
            id: row.team_id,
            name: row.team_name.clone(),
            score: row.points,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub game_id: String,
    pub date: String,
    pub matchup: String,
    pub status: GameStatus,
    pub home_team: TeamSide,
    pub away_team: TeamSide,
}

impl GameRecord {
    /// A fresh record carrying the game-level fields of its first row.
    pub fn open(row: &RawGameRow) -> Self {
        Self {
            game_id: row.game_id.clone(),
            date: row.date.clone(),
            matchup: row.matchup.clone(),
            ..Default::default()
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut TeamSide {
        match side {
            Side::Home => &mut self.home_team,
            Side::Away => &mut self.away_team,
        }
    }

    /// Both teams have reported.
    pub fn is_resolved(&self) -> bool {
        self.home_team.is_filled() && self.away_team.is_filled()
    }
}

/// One game of a player's log. Percentages are on a 0–100 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatSnapshot {
    pub date: Option<String>,
    pub points: Option<f64>,
    pub rebounds: Option<f64>,
    pub assists: Option<f64>,
    pub steals: Option<f64>,
    pub blocks: Option<f64>,
    pub fg_percent: Option<f64>,
    pub ft_percent: Option<f64>,
    #[serde(rename = "threePM")]
    pub three_pm: Option<f64>,
    pub turnovers: Option<f64>,
    pub minutes: Option<f64>,
}

/// Per-metric averages. Metrics no game reported are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebounds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steals: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ft_percent: Option<f64>,
    #[serde(rename = "threePM", skip_serializing_if = "Option::is_none")]
    pub three_pm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnovers: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsReport {
    pub games: Vec<PlayerStatSnapshot>,
    pub averages: Option<AggregateStats>,
    pub games_played: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftInfo {
    pub year: Option<String>,
    pub round: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team_id: Option<u64>,
    pub team_name: Option<String>,
    pub jersey: Option<String>,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub birthdate: Option<String>,
    pub experience: Option<u32>,
    pub country: Option<String>,
    pub last_affiliation: Option<String>,
    pub draft: DraftInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSearchResult {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub is_active: bool,
}
