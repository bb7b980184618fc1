//! Operation classification and execution.
//!
//! A delivered request flows through:
//!
//! 1. **Classification** (`classify`): `Request` -> `Result<Operation, OperationError>`
//! 2. **Middleware** (`middleware`): Tower layers (metrics)
//! 3. **Domain service** (`domain`): The land registry, which maps each
//!    operation variant to its handler
//!
//! [`RegistryGateway`] ties the steps together.

pub mod classify;
pub mod config;
pub mod domain;
pub mod gateway;
pub mod middleware;
pub mod operation;

pub use classify::OperationService;
pub use config::{LogFormat, ServerConfig};
pub use domain::LandRegistryService;
pub use gateway::RegistryGateway;
pub use operation::{into_response, Operation, OperationContext, OperationError, OperationResponse};
