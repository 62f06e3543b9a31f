//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

pub mod biometric;
pub mod bundled_data;
mod clock;
pub mod errors;
pub mod resource_api;
pub mod settings;

pub use clock::*;

pub use biometric::{BiometricCapability, BiometricOutcome, BiometricPort};
pub use bundled_data::BundledDataPort;
pub use errors::ResourceApiError;
pub use resource_api::ResourceApiPort;
pub use settings::{SettingsMigrationPort, SettingsPort};
