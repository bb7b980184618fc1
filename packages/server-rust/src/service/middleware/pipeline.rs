//! Pipeline composition: wraps the operation handler in the middleware stack.

use tower::util::BoxService;
use tower::{Service, ServiceBuilder};

use super::metrics::MetricsLayer;
use crate::service::operation::{Operation, OperationError, OperationResponse};

/// The fully assembled, type-erased operation pipeline.
pub type OperationPipeline = BoxService<Operation, OperationResponse, OperationError>;

/// Build the operation pipeline around `handler`.
///
/// The only layer is `MetricsLayer`. Calls are neither timed out nor
/// retried here, so a store result always reaches the caller as-is.
#[must_use]
pub fn build_operation_pipeline<S>(handler: S) -> OperationPipeline
where
    S: Service<Operation, Response = OperationResponse, Error = OperationError> + Send + 'static,
    S::Future: Send + 'static,
{
    BoxService::new(ServiceBuilder::new().layer(MetricsLayer).service(handler))
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use std::time::Duration;

    use landreg_core::OperationName;
    use tower::ServiceExt;

    use super::*;
    use crate::service::operation::OperationContext;

    /// Acknowledges every call after `delay_ms`.
    struct SlowAckService {
        delay_ms: u64,
    }

    impl Service<Operation> for SlowAckService {
        type Response = OperationResponse;
        type Error = OperationError;
        type Future =
            Pin<Box<dyn Future<Output = Result<OperationResponse, OperationError>> + Send>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _op: Operation) -> Self::Future {
            let delay = self.delay_ms;
            Box::pin(async move {
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Ok(OperationResponse::Empty)
            })
        }
    }

    fn make_op() -> Operation {
        let ctx = OperationContext::new(42, OperationName::Transfer);
        Operation::from_parts(ctx, vec!["ParcelA".to_string(), "carol".to_string()])
    }

    #[tokio::test]
    async fn pipeline_passes_through_to_handler() {
        let svc = build_operation_pipeline(SlowAckService { delay_ms: 0 });
        let resp = svc.oneshot(make_op()).await.unwrap();
        assert_eq!(resp, OperationResponse::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_handler_is_never_cut_off() {
        let svc = build_operation_pipeline(SlowAckService { delay_ms: 120_000 });
        let resp = svc.oneshot(make_op()).await.unwrap();
        assert_eq!(resp, OperationResponse::Empty);
    }
}
