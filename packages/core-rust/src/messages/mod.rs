//! Invocation envelope exchanged with the registry.
//!
//! A [`Request`] names the function to run and carries its ordered string
//! arguments. Every invocation produces exactly one [`Response`]: status 200
//! with an optional payload, or status 500 with a message and an
//! [`ErrorKind`] tag.

pub mod request;
pub mod response;

pub use request::Request;
pub use response::{ErrorKind, Response, STATUS_ERROR, STATUS_OK};
