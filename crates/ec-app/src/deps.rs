//! Dependency grouping for app construction.
//!
//! This is NOT a Builder pattern:
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping
//!
//! The host shell constructs one `AppDeps` at startup with its platform
//! adapters and hands it to the use cases; nothing here is reachable through
//! an ambient global.

use std::sync::Arc;

use ec_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping).
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Settings dependencies
    pub settings: Arc<dyn SettingsPort>,

    // Access dependencies
    pub biometric: Arc<dyn BiometricPort>,

    // Catalog dependencies
    pub resource_api: Arc<dyn ResourceApiPort>,
    pub bundled_data: Arc<dyn BundledDataPort>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
