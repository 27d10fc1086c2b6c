use chrono::NaiveDate;

/// One point in a player's rating history. Histories are kept sorted
/// ascending by date; the upstream API only records days on which the
/// player finished a rated game, so series are sparse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingPoint {
    pub date: NaiveDate,
    pub rating: i32,
}
