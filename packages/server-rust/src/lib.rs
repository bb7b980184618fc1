//! Land registry server: parcel registration, lookup, and ownership transfer
//! over a pluggable key-value state store.

pub mod cli;
pub mod logging;
pub mod service;
pub mod storage;
pub mod traits;

pub use service::{RegistryGateway, ServerConfig};
pub use traits::StateStore;
