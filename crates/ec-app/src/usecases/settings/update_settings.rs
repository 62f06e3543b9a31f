//! Use case for updating application settings

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use ec_core::ports::SettingsPort;
use ec_core::settings::model::Settings;

/// Updates the application settings by validating and persisting the
/// provided settings through the configured settings repository.
///
/// Loads the current settings first so changed fields can be logged with
/// their old and new values.
pub struct UpdateSettings {
    settings: std::sync::Arc<dyn SettingsPort>,
}

impl UpdateSettings {
    pub fn new(settings: std::sync::Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, settings: Settings) -> Result<()> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            // Load current settings for diffing
            let old_settings = self.settings.load().await?;

            let changes = SettingsDiff::diff(&old_settings, &settings);
            if !changes.is_empty() {
                info!(
                    changed_fields = %changes.to_log_string(),
                    "Updating application settings"
                );
            } else {
                info!("Updating application settings (no changes detected)");
            }

            // Basic validation: ensure schema version is current
            let current_version = ec_core::settings::model::CURRENT_SCHEMA_VERSION;
            if settings.schema_version != current_version {
                return Err(anyhow::anyhow!(
                    "Invalid schema version: expected {}, got {}",
                    current_version,
                    settings.schema_version
                ));
            }

            self.settings.save(&settings).await?;

            info!("Settings updated successfully");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

/// Represents the difference between two Settings
struct SettingsDiff {
    biometric_enabled: Option<(bool, bool)>,
    notifications_enabled: Option<(bool, bool)>,
    dark_mode: Option<(bool, bool)>,
    contacts_unlocked: Option<(bool, bool)>,
}

impl SettingsDiff {
    fn diff(old: &Settings, new: &Settings) -> Self {
        Self {
            biometric_enabled: (old.biometric_enabled != new.biometric_enabled)
                .then_some((old.biometric_enabled, new.biometric_enabled)),
            notifications_enabled: (old.notifications_enabled != new.notifications_enabled)
                .then_some((old.notifications_enabled, new.notifications_enabled)),
            dark_mode: (old.dark_mode != new.dark_mode).then_some((old.dark_mode, new.dark_mode)),
            contacts_unlocked: (old.contacts_unlocked != new.contacts_unlocked)
                .then_some((old.contacts_unlocked, new.contacts_unlocked)),
        }
    }

    fn is_empty(&self) -> bool {
        self.biometric_enabled.is_none()
            && self.notifications_enabled.is_none()
            && self.dark_mode.is_none()
            && self.contacts_unlocked.is_none()
    }

    fn to_log_string(&self) -> String {
        let mut parts = Vec::new();

        if let Some((old, new)) = &self.biometric_enabled {
            parts.push(format!("biometric_enabled: {} -> {}", old, new));
        }
        if let Some((old, new)) = &self.notifications_enabled {
            parts.push(format!("notifications_enabled: {} -> {}", old, new));
        }
        if let Some((old, new)) = &self.dark_mode {
            parts.push(format!("dark_mode: {} -> {}", old, new));
        }
        if let Some((old, new)) = &self.contacts_unlocked {
            parts.push(format!("contacts_unlocked: {} -> {}", old, new));
        }

        if parts.is_empty() {
            "(no changes)".to_string()
        } else {
            parts.join(", ")
        }
    }
}
