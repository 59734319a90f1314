use thiserror::Error;
use wardrobe_common::WardrobeError;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("No wardrobe item with id {0:?}")]
    UnknownItem(String),

    #[error("Lookup table error: {0}")]
    Table(#[from] WardrobeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatcherError>;
