use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::DEFAULT_API_ROOT;

#[derive(Parser, Clone)]
#[command(
    display_name = "chess-rankings",
    about = "Exports 30-day rating movement for the Lichess classical leaderboard",
    long_about = "Fetches the classical leaderboard from the Lichess API, fetches each \
        player's rating history concurrently and writes one CSV row per player with \
        their rating 30 days ago and today."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Number of leaderboard players to process
    #[arg(short = 'n', long, default_value_t = 50)]
    pub count: u32,

    /// Lookback window in calendar days
    #[arg(short, long, default_value_t = 30)]
    pub days: u32,

    /// Path of the CSV to write (csv subcommand only)
    #[arg(short, long, default_value = "top_50_classical_players_ratings.csv")]
    pub output: PathBuf,

    /// Base URL of the upstream API
    #[arg(long, env = "LICHESS_API_ROOT", default_value = DEFAULT_API_ROOT)]
    pub api_root: String,

    /// Maximum number of in-flight history requests
    #[arg(long, default_value_t = 10)]
    pub concurrency: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String,
}

#[derive(Subcommand, Clone, Copy, Debug)]
pub enum Command {
    /// Fetch rankings and write the ratings CSV (the default)
    Csv,
    /// Print the usernames of the top players, one per line
    Top,
    /// Print the #1 player's day-by-day rating over the lookback window
    History,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_published_tool() {
        let args = Args::parse_from(["chess-rankings"]);

        assert!(args.command.is_none());
        assert_eq!(args.count, 50);
        assert_eq!(args.days, 30);
        assert_eq!(args.concurrency, 10);
        assert_eq!(args.output, PathBuf::from("top_50_classical_players_ratings.csv"));
    }

    #[test]
    fn subcommand_and_overrides_parse() {
        let args = Args::parse_from(["chess-rankings", "--count", "10", "--days", "7", "top"]);

        assert!(matches!(args.command, Some(Command::Top)));
        assert_eq!(args.count, 10);
        assert_eq!(args.days, 7);
    }
}
