use thiserror::Error;

/// Everything that can go wrong while producing a rankings CSV.
///
/// Per-player failures (`Network`/`Parse` raised while fetching one
/// player's history) are recovered by skipping that player; the same
/// variants are fatal when raised by the leaderboard fetch.
#[derive(Debug, Error)]
pub enum RankingsError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed response from {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write output: {0}")]
    Csv(#[from] csv::Error),

    #[error("leaderboard returned no players")]
    EmptyLeaderboard,

    #[error("no player histories could be fetched, nothing to write")]
    NoRows,
}

pub type RankingsResult<T> = Result<T, RankingsError>;

impl RankingsError {
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    pub fn parse(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
