use std::sync::Arc;

use redb::TableDefinition;
use tracing::debug;

use crate::app::reconcile::{Update, Updater};

use super::Error;

pub const TABLE: TableDefinition<&'static str, bool> = TableDefinition::new("settings");

/// Scanner feedback preferences, all on until the user turns them off
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, strum::IntoStaticStr, strum::EnumIter, uniffi::Enum,
)]
#[strum(serialize_all = "snake_case")]
pub enum SettingKey {
    /// vibrate on a successful scan
    Vibrate,
    /// beep on a successful scan
    Beep,
}

impl SettingKey {
    pub const fn default_value(&self) -> bool {
        match self {
            Self::Vibrate | Self::Beep => true,
        }
    }
}

#[derive(Debug, Clone, uniffi::Object)]
pub struct SettingsTable {
    db: Arc<redb::Database>,
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, uniffi::Error, thiserror::Error)]
pub enum SettingsTableError {
    #[error("failed to save setting: {0}")]
    Save(String),

    #[error("failed to read setting: {0}")]
    Read(String),
}

impl SettingsTable {
    pub fn new(db: Arc<redb::Database>, write_txn: &redb::WriteTransaction) -> Result<Self, Error> {
        // create table if it doesn't exist
        write_txn.open_table(TABLE)?;

        Ok(Self { db })
    }
}

#[uniffi::export]
impl SettingsTable {
    pub fn get(&self, key: SettingKey) -> Result<bool, Error> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|error| Error::DatabaseAccess(error.to_string()))?;

        let table = read_txn
            .open_table(TABLE)
            .map_err(|error| Error::TableAccess(error.to_string()))?;

        let name: &'static str = key.into();
        let value = table
            .get(name)
            .map_err(|error| SettingsTableError::Read(error.to_string()))?
            .map(|value| value.value())
            .unwrap_or(key.default_value());

        Ok(value)
    }

    pub fn set(&self, key: SettingKey, value: bool) -> Result<(), Error> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|error| Error::DatabaseAccess(error.to_string()))?;

        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|error| Error::TableAccess(error.to_string()))?;

            let name: &'static str = key.into();
            table
                .insert(name, value)
                .map_err(|error| SettingsTableError::Save(error.to_string()))?;
        }

        write_txn
            .commit()
            .map_err(|error| Error::DatabaseAccess(error.to_string()))?;

        debug!("setting {key:?} changed to {value}");
        Updater::send_update(Update::SettingChanged { key, value });

        Ok(())
    }

    /// Flip the setting, returns the new value
    pub fn toggle(&self, key: SettingKey) -> Result<bool, Error> {
        let value = !self.get(key)?;
        self.set(key, value)?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use super::*;
    use crate::database::Database;

    #[test]
    fn test_defaults_are_on() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Database::open(&dir.path().join("test.db")).unwrap().settings;

        for key in SettingKey::iter() {
            assert!(settings.get(key).unwrap(), "{key:?} should default to on");
        }
    }

    #[test]
    fn test_set_and_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Database::open(&dir.path().join("test.db")).unwrap().settings;

        settings.set(SettingKey::Beep, false).unwrap();
        assert!(!settings.get(SettingKey::Beep).unwrap());
        assert!(settings.get(SettingKey::Vibrate).unwrap());

        assert!(!settings.toggle(SettingKey::Vibrate).unwrap());
        assert!(settings.toggle(SettingKey::Beep).unwrap());
        assert!(settings.get(SettingKey::Beep).unwrap());
    }

    #[test]
    fn test_storage_names() {
        let name: &'static str = SettingKey::Vibrate.into();
        assert_eq!(name, "vibrate");
    }
}
