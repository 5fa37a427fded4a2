use tracking_core::{Batch, Receipt, TrackingResult};

use crate::{ApiError, BearerToken, Credentials};

#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<BearerToken, ApiError>;
}

/// Remote side of a tracking run: async submission and receipt lookup.
#[async_trait::async_trait]
pub trait TrackingApi: Send + Sync {
    /// Submit one batch and return the receipt of the pending job.
    async fn submit(&self, batch: &Batch, token: &BearerToken) -> Result<Receipt, ApiError>;

    /// Check a receipt once. An unfinished job may return an empty or partial list.
    async fn check_receipt(
        &self,
        receipt: &Receipt,
        token: &BearerToken,
    ) -> Result<Vec<TrackingResult>, ApiError>;
}
