use ec_core::ports::SettingsMigrationPort;
use ec_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};

pub struct SettingsMigrator {
    migrations: Vec<Box<dyn SettingsMigrationPort>>,
}

impl Default for SettingsMigrator {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsMigrator {
    pub fn new() -> Self {
        Self {
            // Empty at schema v1; register steps here as the schema grows.
            migrations: vec![],
        }
    }

    pub fn migrate_to_latest(&self, mut settings: Settings) -> Settings {
        loop {
            let current = settings.schema_version;

            if current >= CURRENT_SCHEMA_VERSION {
                break;
            }

            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .unwrap_or_else(|| panic!("no migration found from version {}", current));

            settings = migration.migrate(settings);
        }

        settings
    }
}
