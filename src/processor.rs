use std::path::Path;

use chrono::Utc;
use futures::{stream, StreamExt};
use tracing::{info, warn};

use crate::{
    api::RatingSource,
    error::{RankingsError, RankingsResult},
    model::{
        build_row,
        structures::{PlayerSummary, RankingRow, RatingPoint}
    },
    utils::progress_utils::progress_bar
};

/// Tunables for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Leaderboard size to request.
    pub count: u32,
    /// Lookback window in calendar days.
    pub days: u32,
    /// Maximum number of in-flight history requests.
    pub concurrency: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            count: 50,
            days: 30,
            concurrency: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_written: usize,
    pub players_skipped: usize,
}

/// Runs the whole pipeline: leaderboard fetch, concurrent history
/// fetches, row building, CSV write.
///
/// A leaderboard failure or an output write failure aborts the run and
/// no file is left behind; a single player's history failure only drops
/// that player's row. Rows are written in leaderboard order no matter
/// which history fetch finishes first.
pub async fn run<S: RatingSource>(
    source: &S,
    options: &RunOptions,
    output_path: &Path
) -> RankingsResult<RunSummary> {
    let players = source.fetch_top_players(options.count).await?;
    if players.is_empty() {
        return Err(RankingsError::EmptyLeaderboard);
    }
    info!("Fetched {} leaderboard entries", players.len());

    let histories = fetch_histories(source, &players, options.concurrency).await;

    let today = Utc::now().date_naive();
    let mut rows = Vec::with_capacity(players.len());
    let mut players_skipped = 0;
    for (player, history) in players.iter().zip(histories.iter()) {
        match history {
            Some(history) => rows.push(build_row(player, history, options.days, today)),
            None => players_skipped += 1,
        }
    }

    if rows.is_empty() {
        return Err(RankingsError::NoRows);
    }

    write_rows(output_path, &rows)?;
    info!(
        "Wrote {} rows to {} ({} players skipped)",
        rows.len(),
        output_path.display(),
        players_skipped
    );

    Ok(RunSummary {
        rows_written: rows.len(),
        players_skipped,
    })
}

/// Fetches every player's history through a bounded pool of concurrent
/// requests. The result is indexed by leaderboard position, so callers
/// never see completion order; a failed fetch leaves `None` at that
/// player's slot and logs a warning.
pub async fn fetch_histories<S: RatingSource>(
    source: &S,
    players: &[PlayerSummary],
    concurrency: usize
) -> Vec<Option<Vec<RatingPoint>>> {
    let bar = progress_bar(players.len() as u64, "fetching rating histories");
    let mut histories: Vec<Option<Vec<RatingPoint>>> = vec![None; players.len()];

    let mut results = stream::iter(players.iter().enumerate())
        .map(|(rank, player)| async move { (rank, source.fetch_rating_history(&player.username).await) })
        .buffer_unordered(concurrency.max(1));

    while let Some((rank, result)) = results.next().await {
        match result {
            Ok(history) => histories[rank] = Some(history),
            Err(e) => warn!("Skipping {}: {e}", players[rank].username),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    histories
}

/// Serializes rows to `path`. The header row comes from the
/// [`RankingRow`] field names.
fn write_rows(path: &Path, rows: &[RankingRow]) -> RankingsResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
