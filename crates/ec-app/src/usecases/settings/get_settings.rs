//! Use case for getting application settings

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use ec_core::ports::settings::SettingsPort;
use ec_core::settings::model::Settings;

/// Loads the current application settings from the configured settings
/// repository and returns them to the caller.
pub struct GetSettings {
    settings: std::sync::Arc<dyn SettingsPort>,
}

impl GetSettings {
    pub fn new(settings: std::sync::Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            let result = self.settings.load().await?;

            info!("Settings retrieved successfully");
            Ok(result)
        }
        .instrument(span)
        .await
    }
}
