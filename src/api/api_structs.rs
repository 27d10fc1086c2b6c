use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::structures::{PlayerSummary, RatingPoint};

/// Body of `GET /player/top/{n}/classical`.
#[derive(Debug, Deserialize)]
pub struct TopPlayersResponse {
    pub users: Vec<LeaderboardEntry>,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub perfs: Perfs,
}

#[derive(Debug, Default, Deserialize)]
pub struct Perfs {
    pub classical: Option<PerfStats>,
}

#[derive(Debug, Deserialize)]
pub struct PerfStats {
    pub rating: i32,
}

impl LeaderboardEntry {
    /// Entries missing a username or a classical rating are dropped, the
    /// same way the upstream sometimes returns placeholder users.
    pub fn into_summary(self) -> Option<PlayerSummary> {
        if self.username.is_empty() {
            return None;
        }
        let rating = self.perfs.classical?.rating;
        Some(PlayerSummary {
            username: self.username,
            current_rating: rating,
        })
    }
}

/// One element of the `GET /user/{username}/rating-history` body: the
/// full rating series for a single time control.
#[derive(Debug, Deserialize)]
pub struct VariantHistory {
    pub name: String,
    #[serde(default)]
    pub points: Vec<WirePoint>,
}

/// A history point as sent on the wire: `[year, month, day, rating]`
/// with a zero-indexed month (0 = January).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WirePoint(pub i32, pub u32, pub u32, pub i32);

impl WirePoint {
    /// `None` when the tuple does not name a real calendar date.
    pub fn to_rating_point(self) -> Option<RatingPoint> {
        let WirePoint(year, month, day, rating) = self;
        NaiveDate::from_ymd_opt(year, month + 1, day).map(|date| RatingPoint { date, rating })
    }
}

/// Pulls the named variant's points out of a rating-history body.
pub fn variant_points(variants: Vec<VariantHistory>, name: &str) -> Option<Vec<WirePoint>> {
    variants
        .into_iter()
        .find(|variant| variant.name == name)
        .map(|variant| variant.points)
}
