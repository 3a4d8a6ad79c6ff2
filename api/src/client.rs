use crate::roster::RosterEntry;
use crate::stats::{ResultSet, StatsResponse};
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const NBA_STATS: &str = "https://stats.nba.com/stats";
const EMBEDDED_ROSTER_JSON: &str = include_str!("../data/roster.json");
/// Date format the stats endpoints expect in `DateFrom` / `DateTo`.
const PROVIDER_DATE_FORMAT: &str = "%m/%d/%Y";

/// Everything the transformations need from the statistics provider.
///
/// Calls are made one at a time by the service; implementations do not need
/// to be shareable across threads.
#[allow(async_fn_in_trait)]
pub trait StatsProvider {
    /// Team rows for every game played on `date`.
    async fn league_games(&self, date: NaiveDate) -> ApiResult<ResultSet>;

    /// Common player info; empty when the id is unknown.
    async fn player_info(&self, player_id: &str) -> ApiResult<ResultSet>;

    /// A player's game log for `season`, optionally narrowed to `(from, to)`.
    async fn player_game_log(
        &self,
        player_id: &str,
        season: &str,
        window: Option<(NaiveDate, NaiveDate)>,
    ) -> ApiResult<ResultSet>;

    /// The full static player directory.
    async fn roster(&self) -> ApiResult<Vec<RosterEntry>>;
}

/// Client for the public NBA stats endpoints.
#[derive(Debug, Clone)]
pub struct StatsApi {
    client: Client,
    base_url: String,
    timeout: Duration,
    roster_path: Option<PathBuf>,
}

impl Default for StatsApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("Mozilla/5.0 (X11; Linux x86_64) courtside/0.1")
                .default_headers(browser_headers())
                .build()
                .unwrap_or_default(),
            base_url: NBA_STATS.to_owned(),
            timeout: Duration::from_secs(30),
            roster_path: None,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Api(e, _) | ApiError::Parsing(e, _) => Some(e),
            _ => None,
        }
    }
}

impl StatsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another host (a mirror, or a test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Read the player directory from a local JSON file instead of the
    /// embedded snapshot.
    pub fn with_roster_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.roster_path = Some(path.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn result_set(&self, endpoint: &str, params: &[(&str, String)]) -> ApiResult<ResultSet> {
        let url = format!("{}/{endpoint}", self.base_url);
        let raw: StatsResponse = self.get(&url, params).await?;
        Ok(raw.into_primary())
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        debug!("GET {url} {params:?}");
        let response = self
            .client
            .get(url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                // The stats service answers unknown ids with a 400; treat any
                // client error as "nothing there".
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    warn!("{url} answered {:?}, treating as empty", e.status());
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

impl StatsProvider for StatsApi {
    async fn league_games(&self, date: NaiveDate) -> ApiResult<ResultSet> {
        let day = date.format(PROVIDER_DATE_FORMAT).to_string();
        self.result_set(
            "leaguegamefinder",
            &[
                ("PlayerOrTeam", "T".into()),
                ("LeagueID", "00".into()),
                ("DateFrom", day.clone()),
                ("DateTo", day),
            ],
        )
        .await
    }

    async fn player_info(&self, player_id: &str) -> ApiResult<ResultSet> {
        self.result_set(
            "commonplayerinfo",
            &[("PlayerID", player_id.to_owned()), ("LeagueID", "00".into())],
        )
        .await
    }

    async fn player_game_log(
        &self,
        player_id: &str,
        season: &str,
        window: Option<(NaiveDate, NaiveDate)>,
    ) -> ApiResult<ResultSet> {
        let (from, to) = window
            .map(|(from, to)| {
                (
                    from.format(PROVIDER_DATE_FORMAT).to_string(),
                    to.format(PROVIDER_DATE_FORMAT).to_string(),
                )
            })
            .unwrap_or_default();
        self.result_set(
            "playergamelog",
            &[
                ("PlayerID", player_id.to_owned()),
                ("Season", season.to_owned()),
                ("SeasonType", "Regular Season".into()),
                ("LeagueID", "00".into()),
                ("DateFrom", from),
                ("DateTo", to),
            ],
        )
        .await
    }

    async fn roster(&self) -> ApiResult<Vec<RosterEntry>> {
        let Some(path) = &self.roster_path else {
            return parse_roster(EMBEDDED_ROSTER_JSON, "embedded roster");
        };
        let content = std::fs::read_to_string(path)
            .map_err(|e| ApiError::NotFound(format!("could not read {}: {e}", path.display())))?;
        parse_roster(&content, &path.display().to_string())
    }
}

fn parse_roster(content: &str, source: &str) -> ApiResult<Vec<RosterEntry>> {
    serde_json::from_str(content)
        .map_err(|e| ApiError::Other(format!("invalid roster json in {source}: {e}")))
}

/// Headers stats.nba.com checks before it will answer at all.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const FINDER_BODY: &str = r#"{
        "resource": "leaguegamefinderresults",
        "resultSets": [{
            "name": "LeagueGameFinderResults",
            "headers": ["TEAM_ID", "TEAM_NAME", "GAME_ID", "GAME_DATE", "MATCHUP", "PTS"],
            "rowSet": [
                [1610612747, "LAL", "0022300555", "2024-01-15", "LAL @ BOS", 105],
                [1610612738, "BOS", "0022300555", "2024-01-15", "LAL @ BOS", 114]
            ]
        }]
    }"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        assert_eq!(StatsApi::new().with_base_url("http://localhost:1234/").base_url(), "http://localhost:1234");
        assert_eq!(StatsApi::new().base_url(), NBA_STATS);
    }

    #[test]
    fn embedded_roster_parses() {
        let roster = parse_roster(EMBEDDED_ROSTER_JSON, "embedded roster").expect("embedded roster should parse");
        assert!(roster.iter().any(|p| p.full_name == "LeBron James" && p.is_active));
    }

    #[tokio::test]
    async fn league_games_queries_one_day() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Regex(r"^/leaguegamefinder".into()))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("PlayerOrTeam".into(), "T".into()),
                Matcher::UrlEncoded("DateFrom".into(), "01/15/2024".into()),
                Matcher::UrlEncoded("DateTo".into(), "01/15/2024".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(FINDER_BODY)
            .create_async()
            .await;

        let api = StatsApi::new().with_base_url(server.url());
        let set = api.league_games(date(2024, 1, 15)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(set.name, "LeagueGameFinderResults");
        assert_eq!(set.len(), 2);
    }

    #[tokio::test]
    async fn game_log_sends_season_and_window() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Regex(r"^/playergamelog".into()))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("PlayerID".into(), "2544".into()),
                Matcher::UrlEncoded("Season".into(), "2023-24".into()),
                Matcher::UrlEncoded("SeasonType".into(), "Regular Season".into()),
                Matcher::UrlEncoded("DateFrom".into(), "03/08/2024".into()),
                Matcher::UrlEncoded("DateTo".into(), "03/15/2024".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"resultSets": [{"name": "PlayerGameLog", "headers": ["PTS"], "rowSet": [[30]]}]}"#)
            .create_async()
            .await;

        let api = StatsApi::new().with_base_url(server.url());
        let set = api
            .player_game_log("2544", "2023-24", Some((date(2024, 3, 8), date(2024, 3, 15))))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(set.len(), 1);
    }

    #[tokio::test]
    async fn client_error_reads_as_empty_result() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Regex(r"^/commonplayerinfo".into()))
            .match_query(Matcher::Any)
            .with_status(400)
            .create_async()
            .await;

        let api = StatsApi::new().with_base_url(server.url());
        let set = api.player_info("0").await.unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Regex(r"^/leaguegamefinder".into()))
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let api = StatsApi::new().with_base_url(server.url());
        let err = api.league_games(date(2024, 1, 15)).await.unwrap_err();
        let ApiError::Api(_, url) = &err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(url, &format!("{}/leaguegamefinder", server.url()));
    }

    #[tokio::test]
    async fn malformed_body_is_parsing_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Regex(r"^/commonplayerinfo".into()))
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>blocked</html>")
            .create_async()
            .await;

        let api = StatsApi::new().with_base_url(server.url());
        let err = api.player_info("2544").await.unwrap_err();
        assert!(matches!(err, ApiError::Parsing(..)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn missing_roster_file_is_not_found() {
        let api = StatsApi::new().with_roster_path("/nonexistent/courtside-roster.json");
        assert!(matches!(api.roster().await, Err(ApiError::NotFound(_))));
    }
}
