//! Error types shared by the library and the HTTP layer.

use thiserror::Error;

use crate::checkout::CheckoutError;

#[derive(Debug, Error)]
pub enum AppError {
    /// No session; the caller has to send the user to login.
    #[error("authentication required")]
    AuthRequired,

    /// Subscription query failed for a reason other than "no rows".
    #[error("subscription fetch failed: {0}")]
    FetchFailed(String),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// A price reference that the catalog does not know.
    #[error("unknown plan: {0}")]
    UnknownPlan(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate plan id: {0}")]
    DuplicateId(String),

    #[error("duplicate price reference: {0}")]
    DuplicatePriceRef(String),

    #[error("malformed price reference: {0}")]
    MalformedPriceRef(String),

    #[error("plan {0} has no feature list")]
    MissingFeatures(String),
}
