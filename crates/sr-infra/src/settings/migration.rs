use log::warn;
use sr_core::options::DEFAULT_CONTAINER;
use sr_core::ports::SettingsMigrationPort;
use sr_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};
use sr_core::settings::SettingsVersion;

/// v1 → v2: trims visibility page lines and fills a blank container.
pub struct MigrationV1ToV2;

impl SettingsMigrationPort for MigrationV1ToV2 {
    fn from_version(&self) -> u32 {
        SettingsVersion::V1.as_u32()
    }

    fn to_version(&self) -> u32 {
        SettingsVersion::V2.as_u32()
    }

    fn migrate(&self, mut settings: Settings) -> Settings {
        settings.visibility.pages = settings
            .visibility
            .pages
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        if settings.configs.container.trim().is_empty() {
            settings.configs.container = DEFAULT_CONTAINER.to_string();
        }

        settings.schema_version = self.to_version();
        settings
    }
}

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
            migrations: vec![Box::new(MigrationV1ToV2)],
        }
    }

    pub fn migrate_to_latest(&self, mut settings: Settings) -> Settings {
        loop {
            let current = settings.schema_version;

            if current >= CURRENT_SCHEMA_VERSION {
                break;
            }

            let Some(migration) = self.migrations.iter().find(|m| m.from_version() == current)
            else {
                warn!("No settings migration from version {}, keeping as is", current);
                break;
            };

            settings = migration.migrate(settings);
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v1_pages_and_container_are_normalised() {
        let mut settings = Settings::default();
        settings.schema_version = 1;
        settings.visibility.pages = vec!["  /admin/* ".into(), "".into(), "<front>\r".into()];
        settings.configs.container = "".into();

        let migrated = SettingsMigrator::new().migrate_to_latest(settings);

        assert_eq!(migrated.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(migrated.visibility.pages, vec!["/admin/*", "<front>"]);
        assert_eq!(migrated.configs.container, DEFAULT_CONTAINER);
    }

    #[test]
    fn current_version_is_untouched() {
        let mut settings = Settings::default();
        settings.configs.container = "".into();

        let migrated = SettingsMigrator::new().migrate_to_latest(settings.clone());
        assert_eq!(migrated, settings);
    }
}
