//! Starting a hosted checkout: one POST to the checkout function, which answers
//! with the payment page URL to redirect the user to.
//!
//! Nothing here retries. A timeout is reported as such and the user decides
//! whether to try again.

pub mod client;
pub mod guard;

use thiserror::Error;

pub use client::CheckoutClient;
pub use guard::{CheckoutGuard, CheckoutTicket};

pub const CHECKOUT_FALLBACK_MESSAGE: &str = "Failed to create checkout session";
pub const NETWORK_FAILURE_MESSAGE: &str = "An error occurred during checkout";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// No session token; the caller sends the user to login instead.
    #[error("authentication required")]
    AuthRequired,

    /// Text shown to the user as is. Either the checkout function's own
    /// message or one of the generic fallbacks.
    #[error("{0}")]
    Failed(String),

    #[error("The checkout request timed out. Please try again.")]
    TimedOut,

    #[error("A checkout for this plan is already in progress")]
    InProgress,
}
