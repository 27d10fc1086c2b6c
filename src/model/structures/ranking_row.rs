use serde::Serialize;

/// One output row. Field names double as the CSV header, so the file
/// always starts with `username,rating_30_days_ago,rating_today`.
///
/// `rating_30_days_ago` is `None` only for players with an empty rating
/// history; it serializes as an empty field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingRow {
    pub username: String,
    pub rating_30_days_ago: Option<i32>,
    pub rating_today: i32,
}
