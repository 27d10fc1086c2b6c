/// One leaderboard entry, in the order the leaderboard returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    pub username: String,
    pub current_rating: i32,
}
