use std::{collections::HashMap, sync::Once, time::Duration};

use async_trait::async_trait;
use chess_rankings::{
    api::RatingSource,
    error::{RankingsError, RankingsResult},
    model::structures::{PlayerSummary, RatingPoint}
};
use chrono::NaiveDate;

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=warn
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub struct MockHistory {
    delay: Duration,
    result: Result<Vec<RatingPoint>, String>,
}

/// In-memory [`RatingSource`] with scriptable per-player histories,
/// failures and completion latencies.
pub struct MockSource {
    leaderboard: Result<Vec<PlayerSummary>, String>,
    histories: HashMap<String, MockHistory>,
}

impl MockSource {
    pub fn new(players: &[(&str, i32)]) -> Self {
        let players = players
            .iter()
            .map(|(username, rating)| PlayerSummary {
                username: username.to_string(),
                current_rating: *rating,
            })
            .collect();

        Self {
            leaderboard: Ok(players),
            histories: HashMap::new(),
        }
    }

    pub fn failing_leaderboard(reason: &str) -> Self {
        Self {
            leaderboard: Err(reason.to_string()),
            histories: HashMap::new(),
        }
    }

    pub fn with_history(self, username: &str, points: Vec<RatingPoint>) -> Self {
        self.with_delayed_history(username, 0, points)
    }

    pub fn with_delayed_history(mut self, username: &str, delay_ms: u64, points: Vec<RatingPoint>) -> Self {
        self.histories.insert(
            username.to_string(),
            MockHistory {
                delay: Duration::from_millis(delay_ms),
                result: Ok(points),
            },
        );
        self
    }

    pub fn with_failing_history(mut self, username: &str, reason: &str) -> Self {
        self.histories.insert(
            username.to_string(),
            MockHistory {
                delay: Duration::ZERO,
                result: Err(reason.to_string()),
            },
        );
        self
    }
}

#[async_trait]
impl RatingSource for MockSource {
    async fn fetch_top_players(&self, count: u32) -> RankingsResult<Vec<PlayerSummary>> {
        match &self.leaderboard {
            Ok(players) => Ok(players.iter().take(count as usize).cloned().collect()),
            Err(reason) => Err(RankingsError::parse("mock://leaderboard", reason.clone())),
        }
    }

    async fn fetch_rating_history(&self, username: &str) -> RankingsResult<Vec<RatingPoint>> {
        let history = self
            .histories
            .get(username)
            .ok_or_else(|| RankingsError::parse("mock://history", format!("no fixture for '{username}'")))?;

        if !history.delay.is_zero() {
            tokio::time::sleep(history.delay).await;
        }

        match &history.result {
            Ok(points) => Ok(points.clone()),
            Err(reason) => Err(RankingsError::parse("mock://history", reason.clone())),
        }
    }
}

/// Builds a sorted history from `(days_ago, rating)` pairs.
pub fn history(today: NaiveDate, points: &[(i64, i32)]) -> Vec<RatingPoint> {
    let mut points: Vec<RatingPoint> = points
        .iter()
        .map(|(days_ago, rating)| RatingPoint {
            date: today - chrono::Duration::days(*days_ago),
            rating: *rating,
        })
        .collect();
    points.sort_by_key(|point| point.date);
    points
}
