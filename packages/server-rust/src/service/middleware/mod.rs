//! Tower middleware for the operation pipeline.
//!
//! - [`metrics`]: Operation timing and outcome via `tracing` spans
//! - [`pipeline`]: Wraps the domain handler in the layer stack

pub mod metrics;
pub mod pipeline;

pub use metrics::MetricsLayer;
pub use pipeline::{build_operation_pipeline, OperationPipeline};
