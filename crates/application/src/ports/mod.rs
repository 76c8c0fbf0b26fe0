//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod classification_gateway;
mod text_extractor_port;

pub use classification_gateway::{ClassificationGateway, EmailContent, GatewayVerdict};
#[cfg(test)]
pub use classification_gateway::MockClassificationGateway;
pub use text_extractor_port::{ExtractionError, TextExtractorPort};
#[cfg(test)]
pub use text_extractor_port::MockTextExtractorPort;
