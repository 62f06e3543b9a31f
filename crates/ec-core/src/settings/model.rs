use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Persisted user preferences. One record per installation.
///
/// Every field carries a serde default so that records written by an older
/// build deserialize cleanly, with missing fields backfilled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    /// Whether the user has opted in to biometric unlock.
    #[serde(default)]
    pub biometric_enabled: bool,

    #[serde(default = "enabled")]
    pub notifications_enabled: bool,

    #[serde(default)]
    pub dark_mode: bool,

    /// The sole gate for rendering the contact directory. Written by the
    /// access flow on a successful unlock; read back at startup as the
    /// durable source of truth.
    #[serde(default)]
    pub contacts_unlocked: bool,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn enabled() -> bool {
    true
}
