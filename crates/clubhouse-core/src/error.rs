use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Course Data: {0}")]
    InvalidCourseData(String),

    #[error("Insufficient History: {available} rounds available")]
    InsufficientHistory { available: usize },

    #[error("Malformed Score Record: {0}")]
    MalformedScoreRecord(String),

    #[error("Cannot pay out from pot {0}")]
    NegativePot(f64),

    #[error("Score entry has no player identity")]
    MissingPlayerIdentity,

    #[error("Unknown player '{0}'")]
    UnknownPlayer(String),
}

pub type LeagueResult<T> = Result<T, LeagueError>;
