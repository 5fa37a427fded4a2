//! Tracking engine: input loading, tracking API client and the run pipeline.
mod api;
mod client;
mod input;
mod pipeline;
mod types;

pub use api::{Authenticator, TrackingApi};
pub use client::{
    ClientSettings, Endpoints, ReqwestTrackingClient, DEFAULT_ASYNC_URL, DEFAULT_RECEIPT_URL,
    DEFAULT_TOKEN_URL,
};
pub use input::{load_batches, FileReadError};
pub use pipeline::{poll_all, print_results, run, submit_all, RunError, RunSummary};
pub use types::{ApiError, BearerToken, Credentials, FailureKind};

pub use tracking_core::{Batch, Event, Receipt, TrackingResult};
