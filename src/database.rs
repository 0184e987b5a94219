//! redb backed storage for the code history and the user's preferences,
//! persisted across app launches.

pub mod error;
pub mod qr_codes;
pub mod settings;

use std::{path::Path, sync::Arc};

use once_cell::sync::OnceCell;
use qrmaster_common::consts::{DATABASE_FILE_NAME, ROOT_DATA_DIR};
use tracing::{error, info};

use qr_codes::QrCodesTable;
use settings::SettingsTable;

pub static DATABASE: OnceCell<Database> = OnceCell::new();

pub type Error = error::DatabaseError;

#[derive(Debug, Clone, uniffi::Object)]
pub struct Database {
    pub qr_codes: QrCodesTable,
    pub settings: SettingsTable,
}

#[uniffi::export]
impl Database {
    #[uniffi::constructor(name = "new")]
    pub fn new() -> Self {
        Self::global().clone()
    }

    pub fn qr_codes(&self) -> QrCodesTable {
        self.qr_codes.clone()
    }

    pub fn settings(&self) -> SettingsTable {
        self.settings.clone()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    pub fn global() -> &'static Database {
        DATABASE.get_or_init(|| {
            let location = ROOT_DATA_DIR.join(DATABASE_FILE_NAME);
            Self::open(&location).expect("failed to open or create the database")
        })
    }

    /// Open the database at `path`, creating the file and its tables if needed
    pub fn open(path: &Path) -> Result<Self, Error> {
        let db = open_or_create(path)?;

        let write_txn = db.begin_write()?;
        let db = Arc::new(db);

        let qr_codes = QrCodesTable::new(db.clone(), &write_txn)?;
        let settings = SettingsTable::new(db.clone(), &write_txn)?;

        write_txn.commit()?;

        Ok(Self { qr_codes, settings })
    }
}

fn open_or_create(path: &Path) -> Result<redb::Database, Error> {
    if path.exists() {
        match redb::Database::open(path) {
            Ok(db) => return Ok(db),
            Err(error) => {
                error!("failed to open database, error: {error:?}, creating a new one");
            }
        }
    };

    info!("Creating a new database, at {}", path.display());
    Ok(redb::Database::create(path)?)
}
