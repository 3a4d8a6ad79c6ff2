use crate::aggregate::game_log_snapshots;
use crate::client::StatsProvider;
use crate::merge::{game_rows, merge_game_rows};
use crate::profile::normalize_profile;
use crate::range::{DateRange, collect_days};
use crate::roster::RosterIndex;
use crate::window::{StatWindow, season_label};
use crate::{GameRecord, PlayerSearchResult, PlayerStatsReport, PlayerSummary, StatsError, StatsResult};
use chrono::NaiveDate;
use log::debug;

/// The logical commands, each a self-contained pass over provider output.
#[derive(Debug, Clone)]
pub struct StatsService<P> {
    provider: P,
}

impl<P: StatsProvider> StatsService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Merged game records for one day, possibly empty.
    pub async fn games_by_date(&self, date: NaiveDate) -> StatsResult<Vec<GameRecord>> {
        let set = self.provider.league_games(date).await?;
        let rows = game_rows(&set)?;
        let games = merge_game_rows(&rows)?;
        debug!("{date}: {} team row(s) merged into {} game(s)", rows.len(), games.len());
        Ok(games)
    }

    /// Day-by-day merge over an inclusive range, concatenated in date order.
    pub async fn games_by_range(&self, range: DateRange) -> StatsResult<Vec<GameRecord>> {
        debug!("fetching {} day(s) from {} to {}", range.len_days(), range.start(), range.end());
        collect_days(range, |day| self.games_by_date(day)).await
    }

    pub async fn player_profile(&self, player_id: &str) -> StatsResult<PlayerSummary> {
        let player_id = require("Player ID", player_id)?;
        let set = self.provider.player_info(player_id).await?;
        normalize_profile(player_id, &set)
    }

    /// Game log and averages over `window`, counted back from `today`.
    pub async fn player_stats(
        &self,
        player_id: &str,
        window: StatWindow,
        today: NaiveDate,
    ) -> StatsResult<PlayerStatsReport> {
        let player_id = require("Player ID", player_id)?;
        let season = season_label(today);
        debug!("player {player_id}: {window} log for season {season}");

        let set = self
            .provider
            .player_game_log(player_id, &season, window.date_range(today))
            .await?;
        Ok(PlayerStatsReport::from_games(game_log_snapshots(&set)))
    }

    pub async fn player_search(&self, query: &str) -> StatsResult<Vec<PlayerSearchResult>> {
        if query.is_empty() {
            return Err(StatsError::usage("Search query is required"));
        }
        let index = RosterIndex::new(self.provider.roster().await?);
        debug!("searching {} roster entries for {query:?}", index.len());
        Ok(index.search(query))
    }
}

fn require<'a>(what: &str, value: &'a str) -> StatsResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(StatsError::usage(format!("{what} is required")))
    } else {
        Ok(value)
    }
}
