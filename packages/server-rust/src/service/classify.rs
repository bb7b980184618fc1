//! Request classification: converts a delivered `Request` into a typed `Operation`.

use std::sync::atomic::{AtomicU64, Ordering};

use landreg_core::{OperationName, Request};

use super::operation::{Operation, OperationContext, OperationError};

/// Classifies incoming [`Request`] values into typed [`Operation`] variants,
/// giving each call a unique call ID.
pub struct OperationService {
    call_id_counter: AtomicU64,
}

impl OperationService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            call_id_counter: AtomicU64::new(1),
        }
    }

    fn next_call_id(&self) -> u64 {
        self.call_id_counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Classify a `Request` into an `Operation`.
    ///
    /// Argument counts are not checked here; the handler reports them.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::UnknownOperation` when the function name is
    /// not one of the registry's operations.
    pub fn classify(&self, request: Request) -> Result<Operation, OperationError> {
        let Some(function) = OperationName::from_function(&request.function) else {
            return Err(OperationError::UnknownOperation {
                name: request.function,
            });
        };

        let ctx = OperationContext::new(self.next_call_id(), function);
        Ok(Operation::from_parts(ctx, request.args))
    }
}

impl Default for OperationService {
    fn default() -> Self {
        Self::new()
    }
}
