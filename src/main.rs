mod command;
mod settings;

use crate::command::{Command, usage_text};
use crate::settings::Settings;
use chrono::Local;
use courtside_api::client::StatsProvider;
use courtside_api::service::StatsService;
use log::{debug, error};
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    better_panic::install();

    let settings = Settings::load();
    setup_logger(&settings);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => fail(&e.into()),
    };
    debug!("running {command:?}");

    let service = StatsService::new(settings.stats_api());
    match run(command, &service).await {
        Ok(output) => println!("{output}"),
        Err(e) => fail(&e),
    }
}

/// Execute one command and render its result. JSON for data, plain text
/// for help and version.
async fn run<P: StatsProvider>(command: Command, service: &StatsService<P>) -> anyhow::Result<String> {
    let output = match command {
        Command::Help => usage_text().to_owned(),
        Command::Version => format!("courtside {}", env!("CARGO_PKG_VERSION")),
        Command::GamesByDate(date) => serde_json::to_string(&service.games_by_date(date).await?)?,
        Command::GamesByRange(range) => serde_json::to_string(&service.games_by_range(range).await?)?,
        Command::PlayerProfile { player_id } => {
            serde_json::to_string(&service.player_profile(&player_id).await?)?
        }
        Command::PlayerStats { player_id, window } => {
            let today = Local::now().date_naive();
            serde_json::to_string(&service.player_stats(&player_id, window, today).await?)?
        }
        Command::PlayerSearch { query } => serde_json::to_string(&service.player_search(&query).await?)?,
    };
    Ok(output)
}

/// The one place failures leave the process: every error kind becomes the
/// same `{"error": message}` document.
fn report_error(err: &anyhow::Error) -> String {
    json!({ "error": err.to_string() }).to_string()
}

fn fail(err: &anyhow::Error) -> ! {
    error!("{err:#}");
    println!("{}", report_error(err));
    std::process::exit(1);
}

fn setup_logger(settings: &Settings) {
    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
