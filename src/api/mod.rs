pub mod api_structs;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    api::api_structs::{variant_points, LeaderboardEntry, TopPlayersResponse, VariantHistory},
    error::{RankingsError, RankingsResult},
    model::structures::{PlayerSummary, RatingPoint}
};

pub const DEFAULT_API_ROOT: &str = "https://lichess.org/api";

/// The time control this tool ranks by. The history endpoint returns
/// every variant; this is the one we extract.
const CLASSICAL_VARIANT: &str = "Classical";

/// Read-only view of the upstream rating data. [`LichessApi`] implements
/// it over HTTP; tests substitute in-memory sources.
#[async_trait]
pub trait RatingSource: Send + Sync {
    /// Returns at most `count` players, in leaderboard order (descending
    /// by current classical rating).
    async fn fetch_top_players(&self, count: u32) -> RankingsResult<Vec<PlayerSummary>>;

    /// Returns the player's complete classical rating history, sorted
    /// ascending by date. May be empty for accounts without rated games.
    async fn fetch_rating_history(&self, username: &str) -> RankingsResult<Vec<RatingPoint>>;
}

#[derive(Clone)]
pub struct LichessApi {
    client: Client,
    api_root: String,
}

impl LichessApi {
    pub fn new(api_root: &str) -> Self {
        Self {
            client: Client::new(),
            api_root: api_root.trim_end_matches('/').to_string(),
        }
    }

    /// GET `url` and decode the JSON body. Connectivity problems and
    /// non-2xx statuses map to `Network`, undecodable bodies to `Parse`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> RankingsResult<T> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| RankingsError::network(url, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| RankingsError::network(url, e))?;

        serde_json::from_str(&body).map_err(|e| RankingsError::parse(url, e.to_string()))
    }
}

#[async_trait]
impl RatingSource for LichessApi {
    async fn fetch_top_players(&self, count: u32) -> RankingsResult<Vec<PlayerSummary>> {
        let url = format!("{}/player/top/{}/classical", self.api_root, count);
        let response: TopPlayersResponse = self.get_json(&url).await?;

        Ok(response
            .users
            .into_iter()
            .filter_map(LeaderboardEntry::into_summary)
            .collect())
    }

    async fn fetch_rating_history(&self, username: &str) -> RankingsResult<Vec<RatingPoint>> {
        let url = format!("{}/user/{}/rating-history", self.api_root, username);
        let variants: Vec<VariantHistory> = self.get_json(&url).await?;

        let wire_points = variant_points(variants, CLASSICAL_VARIANT).ok_or_else(|| {
            RankingsError::parse(&url, format!("no {CLASSICAL_VARIANT} rating history for '{username}'"))
        })?;

        let mut points = Vec::with_capacity(wire_points.len());
        for wire in wire_points {
            let point = wire.to_rating_point().ok_or_else(|| {
                RankingsError::parse(&url, format!("point {wire:?} is not a valid calendar date"))
            })?;
            points.push(point);
        }

        // The API sends points oldest-first already; sorting keeps the
        // invariant independent of upstream behavior.
        points.sort_by_key(|point| point.date);
        Ok(points)
    }
}
