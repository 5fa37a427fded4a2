//! Tracking core: pure domain types, batching and display formatting.
mod batch;
mod model;
mod report;
mod timestamp;

pub use batch::{split_into_batches, split_with_size, Batch, BATCH_SIZE};
pub use model::{Event, Receipt, TrackingResult};
pub use report::{describe, ReportLine};
pub use timestamp::{format_timestamp, FormatError, API_LAYOUT, DISPLAY_LAYOUT};
