//! Land registry domain service: register, fetch, and transfer parcels.
//!
//! The service holds no state of its own. Every call reads and writes the
//! [`StateStore`] directly, and `transfer` is a plain read-modify-write:
//! concurrent transfers of one parcel resolve by the store's write order.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use landreg_core::{ArgCount, OperationName, Record};
use tower::Service;

use crate::service::operation::{Operation, OperationError, OperationResponse};
use crate::traits::StateStore;

/// Handles the land registry operations against a [`StateStore`].
pub struct LandRegistryService {
    store: Arc<dyn StateStore>,
}

impl LandRegistryService {
    #[must_use]
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// `registerLand(name, dimension, locality, price, owner)`.
    ///
    /// Writes the record under `name`, overwriting whatever was there. The
    /// owner is stored as given, without case normalization.
    ///
    /// # Errors
    ///
    /// `ArgumentCount` unless exactly five arguments are given,
    /// `EmptyArgument` for an empty one, `StoreWrite` if the write fails.
    pub async fn register(&self, args: &[String]) -> Result<OperationResponse, OperationError> {
        check_args(OperationName::Register, args)?;
        let (name, owner) = (&args[0], &args[4]);

        let record = Record::new(name, &args[1], &args[2], &args[3], owner);
        self.write(name, &record).await?;

        tracing::debug!(name = %name, owner = %owner, "land registered");
        Ok(OperationResponse::Empty)
    }

    /// `fetchLand(name)`: returns the stored bytes unmodified.
    ///
    /// # Errors
    ///
    /// `ArgumentCount` unless exactly one argument is given, `NotFound` if no
    /// record is stored under `name`, `StoreRead` if the read fails.
    pub async fn fetch(&self, args: &[String]) -> Result<OperationResponse, OperationError> {
        check_args(OperationName::Fetch, args)?;
        let name = &args[0];

        let bytes = self.read(name).await?;
        Ok(OperationResponse::Payload(bytes))
    }

    /// `transferLand(name, newOwner, ...)`: sets the owner to the lowercased
    /// `newOwner`. Arguments past the second are ignored.
    ///
    /// # Errors
    ///
    /// `ArgumentCount` for fewer than two arguments, `NotFound` if the
    /// parcel does not exist, `Decode` if the stored bytes are not a record,
    /// `StoreRead`/`StoreWrite` on store failure.
    pub async fn transfer(&self, args: &[String]) -> Result<OperationResponse, OperationError> {
        check_args(OperationName::Transfer, args)?;
        let (name, new_owner) = (&args[0], &args[1]);

        tracing::info!(name = %name, new_owner = %new_owner, "start transfer");

        let stored = self.read(name).await?;
        let record = Record::decode(&stored).map_err(|source| OperationError::Decode {
            key: name.clone(),
            source,
        })?;
        let record = record.with_owner(new_owner);
        self.write(name, &record).await?;

        tracing::info!(name = %name, owner = %record.owner, "end transfer (success)");
        Ok(OperationResponse::Empty)
    }

    async fn read(&self, key: &str) -> Result<Bytes, OperationError> {
        match self.store.get(key).await {
            Ok(Some(bytes)) => Ok(bytes),
            Ok(None) => Err(OperationError::NotFound {
                key: key.to_string(),
            }),
            Err(source) => Err(OperationError::StoreRead {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn write(&self, key: &str, record: &Record) -> Result<(), OperationError> {
        let encoded = record.encode().map_err(|source| OperationError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store
            .put(key, Bytes::from(encoded))
            .await
            .map_err(|source| OperationError::StoreWrite {
                key: key.to_string(),
                source,
            })
    }

    /// Maps each operation to its handler.
    async fn handle(&self, op: Operation) -> Result<OperationResponse, OperationError> {
        match op {
            Operation::Register { args, .. } => self.register(&args).await,
            Operation::Fetch { args, .. } => self.fetch(&args).await,
            Operation::Transfer { args, .. } => self.transfer(&args).await,
        }
    }
}

/// Checks the argument count, then rejects empty strings among the
/// arguments the operation actually uses.
fn check_args(function: OperationName, args: &[String]) -> Result<(), OperationError> {
    let expected = function.arg_count();
    if !expected.accepts(args.len()) {
        return Err(OperationError::ArgumentCount {
            function,
            expected,
            actual: args.len(),
        });
    }

    let used = match expected {
        ArgCount::Exactly(n) | ArgCount::AtLeast(n) => n,
    };
    if let Some(index) = args[..used].iter().position(String::is_empty) {
        return Err(OperationError::EmptyArgument {
            function,
            position: index + 1,
        });
    }
    Ok(())
}

impl Service<Operation> for Arc<LandRegistryService> {
    type Response = OperationResponse;
    type Error = OperationError;
    type Future = Pin<Box<dyn Future<Output = Result<OperationResponse, OperationError>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, op: Operation) -> Self::Future {
        let svc = Arc::clone(self);
        Box::pin(async move { svc.handle(op).await })
    }
}
