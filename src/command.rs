use courtside_api::range::{DateRange, parse_date};
use courtside_api::window::StatWindow;
use courtside_api::{StatsError, StatsResult};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    GamesByDate(NaiveDate),
    GamesByRange(DateRange),
    PlayerProfile { player_id: String },
    PlayerStats { player_id: String, window: StatWindow },
    PlayerSearch { query: String },
}

impl Command {
    /// Parse the arguments after the program name.
    pub fn parse(args: &[String]) -> StatsResult<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            [] => Err(StatsError::usage(format!("A command is required\n\n{}", usage_text()))),
            ["-h" | "--help" | "help", ..] => Ok(Command::Help),
            ["-V" | "--version", ..] => Ok(Command::Version),
            ["games", rest @ ..] => parse_games(rest),
            ["player", rest @ ..] => parse_player(rest),
            [other, ..] => Err(StatsError::usage(format!(
                "Unknown command: {other}\n\n{}",
                usage_text()
            ))),
        }
    }
}

fn parse_games(args: &[&str]) -> StatsResult<Command> {
    match args {
        ["date", date, ..] => Ok(Command::GamesByDate(parse_date(date)?)),
        ["date"] => Err(StatsError::usage("Date is required")),
        ["range", start, end, ..] => {
            let range = DateRange::new(parse_date(start)?, parse_date(end)?)?;
            Ok(Command::GamesByRange(range))
        }
        ["range", ..] => Err(StatsError::usage("Start and end dates are required")),
        [] => Err(StatsError::usage("Date or date range is required")),
        _ => Err(StatsError::usage(r#"Invalid command. Use "date" or "range""#)),
    }
}

fn parse_player(args: &[&str]) -> StatsResult<Command> {
    match args {
        ["profile", player_id, ..] => Ok(Command::PlayerProfile {
            player_id: (*player_id).to_owned(),
        }),
        ["stats", player_id, rest @ ..] => {
            let window = match rest.first() {
                Some(w) => w.parse()?,
                None => StatWindow::default(),
            };
            Ok(Command::PlayerStats {
                player_id: (*player_id).to_owned(),
                window,
            })
        }
        ["search", query, ..] => Ok(Command::PlayerSearch {
            query: (*query).to_owned(),
        }),
        ["profile"] | ["stats"] => Err(StatsError::usage("Player ID is required")),
        ["search"] => Err(StatsError::usage("Search query is required")),
        _ => Err(StatsError::usage(r#"Invalid command. Use "profile", "stats" or "search""#)),
    }
}

pub fn usage_text() -> &'static str {
    "courtside - NBA game results, player stats and roster search as JSON

Usage:
  courtside games date YYYY-MM-DD
  courtside games range YYYY-MM-DD YYYY-MM-DD
  courtside player profile PLAYER_ID
  courtside player stats PLAYER_ID [week|2weeks|month|season]
  courtside player search QUERY
  courtside --help
  courtside --version

Environment:
  COURTSIDE_STATS_URL     Stats provider base URL (default https://stats.nba.com/stats)
  COURTSIDE_ROSTER_JSON   Path to a player directory JSON snapshot
  RUST_LOG                Log filter for stderr output (default warn)"
}
