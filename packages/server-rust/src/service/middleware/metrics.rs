//! Metrics middleware for operations.
//!
//! Records operation duration and outcome in `tracing` spans and events.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use tower::{Layer, Service};
use tracing::{info_span, Instrument};

use crate::service::operation::{Operation, OperationError, OperationResponse};

/// Tower layer that instruments operations with timing via `tracing` spans.
#[derive(Debug, Clone)]
pub struct MetricsLayer;

impl<S> Layer<S> for MetricsLayer {
    type Service = MetricsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MetricsService { inner }
    }
}

/// Service wrapper that records operation duration and outcome.
#[derive(Debug, Clone)]
pub struct MetricsService<S> {
    inner: S,
}

impl<S> Service<Operation> for MetricsService<S>
where
    S: Service<Operation, Response = OperationResponse, Error = OperationError> + Send,
    S::Future: Send + 'static,
{
    type Response = OperationResponse;
    type Error = OperationError;
    type Future = Pin<Box<dyn Future<Output = Result<OperationResponse, OperationError>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, op: Operation) -> Self::Future {
        let function = op.ctx().function.as_str();
        let call_id = op.ctx().call_id;

        let span = info_span!(
            "operation",
            function = function,
            call_id = call_id,
            duration_ms = tracing::field::Empty,
            outcome = tracing::field::Empty,
        );

        let fut = self.inner.call(op);

        Box::pin(
            async move {
                let start = Instant::now();
                let result = fut.await;

                #[allow(clippy::cast_possible_truncation)]
                let duration_ms = start.elapsed().as_millis() as u64;
                let outcome = if result.is_ok() { "ok" } else { "error" };

                let span = tracing::Span::current();
                span.record("duration_ms", duration_ms);
                span.record("outcome", outcome);

                match &result {
                    Ok(_) => tracing::info!(
                        function,
                        call_id,
                        duration_ms,
                        outcome,
                        "operation complete"
                    ),
                    Err(e) => tracing::warn!(
                        function,
                        call_id,
                        duration_ms,
                        error = %e,
                        "operation failed"
                    ),
                }

                result
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use landreg_core::OperationName;
    use tower::ServiceExt;

    use super::*;
    use crate::service::operation::OperationContext;

    /// Fails every call with `NotFound`.
    struct MissingService;

    impl Service<Operation> for MissingService {
        type Response = OperationResponse;
        type Error = OperationError;
        type Future =
            Pin<Box<dyn Future<Output = Result<OperationResponse, OperationError>> + Send>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, op: Operation) -> Self::Future {
            let key = match op {
                Operation::Register { args, .. }
                | Operation::Fetch { args, .. }
                | Operation::Transfer { args, .. } => args.into_iter().next().unwrap_or_default(),
            };
            Box::pin(async move { Err(OperationError::NotFound { key }) })
        }
    }

    #[tokio::test]
    async fn passes_errors_through_unchanged() {
        let svc = MetricsLayer.layer(MissingService);
        let ctx = OperationContext::new(9, OperationName::Fetch);
        let op = Operation::from_parts(ctx, vec!["ParcelQ".to_string()]);

        let err = svc.oneshot(op).await.unwrap_err();
        assert!(matches!(err, OperationError::NotFound { key } if key == "ParcelQ"));
    }
}
