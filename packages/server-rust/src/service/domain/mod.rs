//! Domain services.
//!
//! Each service implements `tower::Service<Operation>` on an `Arc` of
//! itself, so one instance serves every call.

pub mod land;

pub use land::LandRegistryService;
