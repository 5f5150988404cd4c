use thiserror::Error;

#[derive(Error, Debug)]
pub enum PityError {
    #[error("Invalid pull count: {value} (must be between 1 and {max})")]
    InvalidPullCount { value: i64, max: u32 },

    #[error("Invalid pity value: {value} (must be between 1 and {max})")]
    InvalidPityValue { value: i64, max: u32 },

    #[error("Invalid iteration count: {value} (must be between 1 and {max})")]
    InvalidIterationCount { value: i64, max: u32 },

    #[error("Unknown banner/tier combination: banner '{banner}', tier '{tier}'")]
    UnknownBannerOrTier { banner: String, tier: String },

    #[error("Invalid pity curve: {reason}")]
    InvalidCurve { reason: String },

    #[error("Cannot summarise an empty sample")]
    EmptySample,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] anyhow::Error),
}

pub type PityResult<T> = Result<T, PityError>;
