//! Single entry point that turns a delivered [`Request`] into a [`Response`].

use std::sync::Arc;

use landreg_core::{Request, Response};
use tower::{Service, ServiceExt};

use super::classify::OperationService;
use super::domain::LandRegistryService;
use super::middleware::{build_operation_pipeline, OperationPipeline};
use super::operation::into_response;

/// Classifies each request and drives it through the operation pipeline.
///
/// Unknown function names are rejected during classification, before any
/// handler or store is reached.
pub struct RegistryGateway {
    classifier: OperationService,
    pipeline: OperationPipeline,
}

impl RegistryGateway {
    /// Wraps the land registry service in a fresh pipeline.
    #[must_use]
    pub fn new(land: Arc<LandRegistryService>) -> Self {
        Self {
            classifier: OperationService::new(),
            pipeline: build_operation_pipeline(land),
        }
    }

    /// Runs one invocation to completion. Failures are reported in the
    /// returned [`Response`], never as a panic.
    pub async fn invoke(&mut self, request: Request) -> Response {
        tracing::debug!(function = %request.function, "invoke is running");

        let op = match self.classifier.classify(request) {
            Ok(op) => op,
            Err(e) => {
                tracing::warn!(error = %e, "invoke did not find function");
                return into_response(Err(e));
            }
        };

        let result = match self.pipeline.ready().await {
            Ok(svc) => svc.call(op).await,
            Err(e) => Err(e),
        };
        into_response(result)
    }
}
