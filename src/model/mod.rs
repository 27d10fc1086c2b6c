pub mod structures;

use chrono::{Duration, NaiveDate};

use crate::model::structures::{PlayerSummary, RankingRow, RatingPoint};

/// Builds one output row from a player's leaderboard entry and rating
/// history.
///
/// # Selection rules
/// - `rating_30_days_ago` is the latest point dated at or before
///   `today - days`. Players whose history starts inside the window fall
///   back to their earliest point; only an empty history yields `None`.
/// - `rating_today` is the last point in the history, or the current
///   leaderboard rating when the history is empty.
///
/// `history` must be sorted ascending by date. `today` is passed in
/// rather than read from the clock so the function is deterministic.
pub fn build_row(summary: &PlayerSummary, history: &[RatingPoint], days: u32, today: NaiveDate) -> RankingRow {
    let cutoff = today - Duration::days(days as i64);

    let rating_30_days_ago = history
        .iter()
        .rev()
        .find(|point| point.date <= cutoff)
        .or_else(|| history.first())
        .map(|point| point.rating);

    let rating_today = history
        .last()
        .map(|point| point.rating)
        .unwrap_or(summary.current_rating);

    RankingRow {
        username: summary.username.clone(),
        rating_30_days_ago,
        rating_today,
    }
}

/// Expands a sparse rating history into one entry per calendar day over
/// the last `days` days (inclusive of today, so `days + 1` entries,
/// oldest first).
///
/// Days without a rated game carry the last known rating forward. The
/// series is seeded with the most recent point at or before the window
/// start; days before the player's first point are `None`.
pub fn daily_ratings(history: &[RatingPoint], days: u32, today: NaiveDate) -> Vec<(NaiveDate, Option<i32>)> {
    let start = today - Duration::days(days as i64);

    let mut next = history.partition_point(|point| point.date <= start);
    let mut last = next.checked_sub(1).map(|i| history[i].rating);

    let mut out = Vec::with_capacity(days as usize + 1);
    for offset in 0..=days as i64 {
        let date = start + Duration::days(offset);
        while next < history.len() && history[next].date <= date {
            last = Some(history[next].rating);
            next += 1;
        }
        out.push((date, last));
    }
    out
}
