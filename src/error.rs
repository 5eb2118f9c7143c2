//! Enrichment pass errors.
//!
//! Only dataset-level problems surface here; anything recoverable per item
//! is logged and degraded at the point it happens.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum EnrichError {
    /// The handbook is missing the entry a currency conversion ratio is
    /// derived from. The dataset is unusable without it.
    #[error("handbook has no price for currency item {0}")]
    MissingCurrencyPrice(String),

    /// A quest is missing a reward bucket every well-formed quest carries.
    #[error("quest \"{quest}\" has no \"{bucket}\" reward bucket")]
    MissingRewardBucket { quest: String, bucket: String },

    /// No locale table carries the display name of a hideout area.
    #[error("no locale entry for hideout area type {0}")]
    MissingAreaName(i64),
}
