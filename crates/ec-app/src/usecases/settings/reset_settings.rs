//! Use case for restoring default application settings

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use ec_core::ports::SettingsPort;
use ec_core::settings::model::Settings;

/// Restores the installation defaults. Relocks the contact directory as a
/// side effect, since `contacts_unlocked` defaults to false; the gate
/// sequence runs in full before contacts render again.
pub struct ResetSettings {
    settings: std::sync::Arc<dyn SettingsPort>,
}

impl ResetSettings {
    pub fn new(settings: std::sync::Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.reset_settings.execute");

        async {
            let defaults = Settings::default();
            self.settings.save(&defaults).await?;

            info!("Settings reset to defaults");
            Ok(defaults)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct MockSettingsPort {
        stored: Mutex<Settings>,
    }

    #[async_trait]
    impl SettingsPort for MockSettingsPort {
        async fn load(&self) -> anyhow::Result<Settings> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, settings: &Settings) -> anyhow::Result<()> {
            *self.stored.lock().unwrap() = settings.clone();
            Ok(())
        }
    }

    #[tokio::test]
    async fn reset_restores_defaults_and_relocks_contacts() {
        let mut customized = Settings::default();
        customized.dark_mode = true;
        customized.contacts_unlocked = true;

        let repo = Arc::new(MockSettingsPort {
            stored: Mutex::new(customized),
        });

        let usecase = ResetSettings::new(repo.clone());
        let result = usecase.execute().await.unwrap();

        assert_eq!(result, Settings::default());
        assert!(!repo.stored.lock().unwrap().contacts_unlocked);
        assert!(!repo.stored.lock().unwrap().dark_mode);
    }
}
