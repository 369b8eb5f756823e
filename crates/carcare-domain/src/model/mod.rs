//! Domain model types

pub mod projection;
pub mod service_definition;
pub mod status;

pub use projection::Projection;
pub use service_definition::ServiceDefinition;
pub use status::{Classification, ServiceStatus};
