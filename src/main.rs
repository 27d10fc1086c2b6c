use chrono::Utc;
use clap::Parser;
use itertools::Itertools;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chess_rankings::{
    api::{LichessApi, RatingSource},
    args::{Args, Command},
    error::{RankingsError, RankingsResult},
    model::daily_ratings,
    processor::{self, RunOptions}
};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    let api = LichessApi::new(&args.api_root);
    let result = match args.command.unwrap_or(Command::Csv) {
        Command::Csv => write_csv(&api, &args).await,
        Command::Top => print_top(&api, &args).await,
        Command::History => print_history(&api, &args).await,
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn write_csv(api: &LichessApi, args: &Args) -> RankingsResult<()> {
    let options = RunOptions {
        count: args.count,
        days: args.days,
        concurrency: args.concurrency,
    };

    let summary = processor::run(api, &options, &args.output).await?;
    info!("CSV file '{}' has been created successfully", args.output.display());
    if summary.players_skipped > 0 {
        info!("{} players were skipped due to fetch errors", summary.players_skipped);
    }
    Ok(())
}

async fn print_top(api: &LichessApi, args: &Args) -> RankingsResult<()> {
    let players = api.fetch_top_players(args.count).await?;
    if players.is_empty() {
        return Err(RankingsError::EmptyLeaderboard);
    }

    for player in &players {
        println!("{}", player.username);
    }
    Ok(())
}

/// Prints the top player's forward-filled rating for each day of the
/// lookback window, e.g. `Carlsen, {Mar 01: 2852, Mar 02: 2852, ...}`.
async fn print_history(api: &LichessApi, args: &Args) -> RankingsResult<()> {
    let players = api.fetch_top_players(1).await?;
    let player = players.first().ok_or(RankingsError::EmptyLeaderboard)?;

    let history = api.fetch_rating_history(&player.username).await?;
    let series = daily_ratings(&history, args.days, Utc::now().date_naive());

    let formatted = series
        .iter()
        .map(|(date, rating)| match rating {
            Some(rating) => format!("{}: {rating}", date.format("%b %d")),
            None => format!("{}: -", date.format("%b %d")),
        })
        .join(", ");
    println!("{}, {{{formatted}}}", player.username);
    Ok(())
}
