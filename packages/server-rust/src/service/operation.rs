//! Operation types carried through the pipeline.

use bytes::Bytes;
use landreg_core::{ArgCount, ErrorKind, OperationName, RecordCodecError, Response};

/// Context carried with every operation through the pipeline.
#[derive(Debug, Clone)]
pub struct OperationContext {
    pub call_id: u64,
    pub function: OperationName,
}

impl OperationContext {
    #[must_use]
    pub fn new(call_id: u64, function: OperationName) -> Self {
        Self { call_id, function }
    }
}

/// Typed operation variants dispatched through the pipeline.
///
/// Arguments stay as the raw ordered list; each handler checks its own
/// argument count.
#[derive(Debug)]
pub enum Operation {
    Register { ctx: OperationContext, args: Vec<String> },
    Fetch { ctx: OperationContext, args: Vec<String> },
    Transfer { ctx: OperationContext, args: Vec<String> },
}

impl Operation {
    /// Builds the variant matching `ctx.function`.
    #[must_use]
    pub fn from_parts(ctx: OperationContext, args: Vec<String>) -> Self {
        match ctx.function {
            OperationName::Register => Self::Register { ctx, args },
            OperationName::Fetch => Self::Fetch { ctx, args },
            OperationName::Transfer => Self::Transfer { ctx, args },
        }
    }

    #[must_use]
    pub fn ctx(&self) -> &OperationContext {
        match self {
            Self::Register { ctx, .. } | Self::Fetch { ctx, .. } | Self::Transfer { ctx, .. } => {
                ctx
            }
        }
    }
}

/// Successful response from an operation handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResponse {
    /// Write completed; nothing to return.
    Empty,
    /// Raw stored bytes, returned unmodified.
    Payload(Bytes),
}

/// Errors returned by operation handlers.
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("incorrect number of arguments for {function}: expecting {expected}, got {actual}")]
    ArgumentCount {
        function: OperationName,
        expected: ArgCount,
        actual: usize,
    },
    #[error("argument {position} of {function} must not be empty")]
    EmptyArgument {
        function: OperationName,
        position: usize,
    },
    #[error("land does not exist: {key}")]
    NotFound { key: String },
    #[error("failed to get state for {key}: {source}")]
    StoreRead {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to put state for {key}: {source}")]
    StoreWrite {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("stored record for {key} is unreadable: {source}")]
    Decode {
        key: String,
        #[source]
        source: RecordCodecError,
    },
    #[error("record for {key} could not be encoded: {source}")]
    Encode {
        key: String,
        #[source]
        source: RecordCodecError,
    },
    #[error("received unknown function invocation: {name}")]
    UnknownOperation { name: String },
}

impl OperationError {
    /// Failure category reported to the caller.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            Self::EmptyArgument { .. } => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::StoreRead { .. } | Self::StoreWrite { .. } => ErrorKind::Store,
            Self::Decode { .. } | Self::Encode { .. } => ErrorKind::Decode,
            Self::UnknownOperation { .. } => ErrorKind::UnknownOperation,
        }
    }
}

/// Converts a handler outcome into the caller-facing [`Response`].
#[must_use]
pub fn into_response(result: Result<OperationResponse, OperationError>) -> Response {
    match result {
        Ok(OperationResponse::Empty) => Response::success(Vec::new()),
        Ok(OperationResponse::Payload(bytes)) => Response::success(bytes.to_vec()),
        Err(e) => Response::error(e.kind(), e.to_string()),
    }
}
