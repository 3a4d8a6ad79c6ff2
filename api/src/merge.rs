use crate::client::ApiError;
use crate::matchup::resolve_side;
use crate::stats::ResultSet;
use crate::{GameRecord, RawGameRow, Side, StatsResult, TeamSide};
use log::{debug, warn};
use std::collections::HashMap;

/// Games keyed by id, kept in first-seen order.
///
/// The index map points into `records`, so a later row for a known game
/// updates in place and never moves the game.
#[derive(Debug, Default)]
pub struct GameLedger {
    index: HashMap<String, usize>,
    records: Vec<GameRecord>,
}

impl GameLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one team row into the ledger.
    ///
    /// A later row whose team matches neither token is taken as the away
    /// team; the first row of a game only fills a side it actually matched.
    pub fn apply(&mut self, row: &RawGameRow) -> StatsResult<()> {
        let side = resolve_side(row.team_name.as_deref(), &row.matchup)?;

        let (slot, side) = match self.index.get(&row.game_id) {
            Some(&slot) => (slot, Some(side.unwrap_or(Side::Away))),
            None => {
                self.records.push(GameRecord::open(row));
                self.index.insert(row.game_id.clone(), self.records.len() - 1);
                (self.records.len() - 1, side)
            }
        };

        match side {
            Some(side) => *self.records[slot].side_mut(side) = TeamSide::from(row),
            None => warn!(
                "team {:?} matches neither side of {:?} (game {})",
                row.team_name, row.matchup, row.game_id
            ),
        }
        Ok(())
    }

    pub fn get(&self, game_id: &str) -> Option<&GameRecord> {
        self.index.get(game_id).map(|&slot| &self.records[slot])
    }

    pub fn into_records(self) -> Vec<GameRecord> {
        self.records
    }
}

/// Merge one day's team rows into two-sided game records.
/// A single malformed matchup fails the whole batch.
pub fn merge_game_rows<'a>(rows: impl IntoIterator<Item = &'a RawGameRow>) -> StatsResult<Vec<GameRecord>> {
    let mut ledger = GameLedger::new();
    for row in rows {
        ledger.apply(row)?;
    }
    let records = ledger.into_records();
    let open = records.iter().filter(|g| !g.is_resolved()).count();
    debug!("merged {} game(s), {open} still missing a side", records.len());
    Ok(records)
}

/// Project a league game finder result set into team rows.
pub fn game_rows(set: &ResultSet) -> StatsResult<Vec<RawGameRow>> {
    set.rows()
        .map(|row| -> StatsResult<RawGameRow> {
            let required = |column: &str| {
                row.text(column)
                    .ok_or_else(|| ApiError::Other(format!("game row is missing {column}")))
            };
            Ok(RawGameRow {
                game_id: required("GAME_ID")?,
                date: row.text("GAME_DATE").unwrap_or_default(),
                matchup: required("MATCHUP")?,
                team_id: row.unsigned("TEAM_ID"),
                team_name: row.text("TEAM_NAME"),
                points: row.unsigned("PTS").and_then(|p| u32::try_from(p).ok()),
            })
        })
        .collect()
}
