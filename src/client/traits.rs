//! Trait abstraction for the portal client to enable mocking in tests

use async_trait::async_trait;

use super::http::ClientError;
use crate::state::CardSummary;

/// Portal backend operations, behind a trait so tests can inject a fake
/// transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Check if the portal backend is reachable
    async fn check_connection(&self) -> bool;

    /// Fetch the caller's primary stored card. Issued exactly once per run;
    /// the caller treats any error as "leave the billing panel alone".
    async fn primary_card(&self) -> Result<CardSummary, ClientError>;
}
