pub mod player_summary;
pub mod ranking_row;
pub mod rating_point;

pub use player_summary::PlayerSummary;
pub use ranking_row::RankingRow;
pub use rating_point::RatingPoint;
