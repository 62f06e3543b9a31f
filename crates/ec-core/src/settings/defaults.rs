use super::model::*;

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            biometric_enabled: false,
            notifications_enabled: true,
            dark_mode: false,
            contacts_unlocked: false,
        }
    }
}
