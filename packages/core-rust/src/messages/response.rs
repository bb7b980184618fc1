use serde::{Deserialize, Serialize};

/// Status code of a successful invocation.
pub const STATUS_OK: u16 = 200;

/// Status code of a failed invocation.
pub const STATUS_ERROR: u16 = 500;

/// Failure category attached to an error [`Response`].
///
/// Lets callers branch on the cause without parsing the message, e.g. to
/// tell a missing parcel (`NotFound`) from an unreachable store (`Store`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Wrong number of arguments for the operation.
    ArgumentCount,
    /// An argument was present but empty. Not part of the ledger's own
    /// error set, which accepted empty strings; raised so that a stored
    /// record never ends up with an empty field such as `owner`.
    InvalidArgument,
    /// No record exists under the requested key.
    NotFound,
    /// The state store read or write failed.
    Store,
    /// Stored bytes could not be parsed into a record.
    Decode,
    /// The function name is not a registry operation.
    UnknownOperation,
}

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,
    pub message: String,
    #[serde(with = "serde_bytes", default)]
    pub payload: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl Response {
    /// A successful response carrying `payload` (empty for write operations).
    #[must_use]
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: STATUS_OK,
            message: String::new(),
            payload,
            error_kind: None,
        }
    }

    /// A failed response tagged with `kind`.
    #[must_use]
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
            payload: Vec::new(),
            error_kind: Some(kind),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}
