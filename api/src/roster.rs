use crate::PlayerSearchResult;
use serde::Deserialize;

pub const SEARCH_LIMIT: usize = 20;

/// One entry of the static player directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RosterEntry {
    pub id: u64,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

impl From<&RosterEntry> for PlayerSearchResult {
    fn from(entry: &RosterEntry) -> Self {
        Self {
            id: entry.id,
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            full_name: entry.full_name.clone(),
            is_active: entry.is_active,
        }
    }
}

/// Name lookup over a roster snapshot. Results keep roster order; there is
/// no ranking.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    entries: Vec<RosterEntry>,
}

impl RosterIndex {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring match on the full name, first
    /// [`SEARCH_LIMIT`] hits.
    pub fn search(&self, query: &str) -> Vec<PlayerSearchResult> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.full_name.to_lowercase().contains(&needle))
            .take(SEARCH_LIMIT)
            .map(PlayerSearchResult::from)
            .collect()
    }
}
