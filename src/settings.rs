use courtside_api::client::StatsApi;
use log::LevelFilter;
use std::path::PathBuf;

pub const STATS_URL_VAR: &str = "COURTSIDE_STATS_URL";
pub const ROSTER_JSON_VAR: &str = "COURTSIDE_ROSTER_JSON";

#[derive(Debug, Clone)]
pub struct Settings {
    pub stats_url: Option<String>,
    pub roster_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            stats_url: non_empty(STATS_URL_VAR),
            roster_path: non_empty(ROSTER_JSON_VAR).map(PathBuf::from),
            // RUST_LOG still wins; this is only the fallback filter.
            log_level: LevelFilter::Warn,
        }
    }

    pub fn stats_api(&self) -> StatsApi {
        let mut api = StatsApi::new();
        if let Some(url) = &self.stats_url {
            api = api.with_base_url(url.as_str());
        }
        if let Some(path) = &self.roster_path {
            api = api.with_roster_path(path);
        }
        api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn reads_overrides_from_environment() {
        let env: HashMap<&str, &str> = HashMap::from([
            (STATS_URL_VAR, "http://localhost:9000/stats/"),
            (ROSTER_JSON_VAR, "/tmp/roster.json"),
        ]);
        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(settings.stats_url.as_deref(), Some("http://localhost:9000/stats/"));
        assert_eq!(settings.roster_path, Some(PathBuf::from("/tmp/roster.json")));
        assert_eq!(settings.stats_api().base_url(), "http://localhost:9000/stats");
    }

    #[test]
    fn blank_values_are_ignored() {
        let settings = Settings::from_lookup(|k| (k == STATS_URL_VAR).then(|| "  ".to_string()));
        assert!(settings.stats_url.is_none());
        assert!(settings.roster_path.is_none());
        assert_eq!(settings.log_level, LevelFilter::Warn);
    }
}
