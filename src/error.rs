use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("invalid color token: {0:?}")]
    InvalidColor(String),

    #[error("invalid star size: {0:?} (expected 1x-10x, 2xs, xs, sm, lg, xl or 2xl)")]
    InvalidSize(String),
}
