use std::sync::Arc;

use redb::{ReadableTable as _, ReadableTableMetadata as _, TableDefinition};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use qrmaster_types::{PayloadType, redb::Json};

use crate::{
    app::reconcile::{Update, Updater},
    payload,
    qr_code::{ErrorCorrectionLevel, PatternStyle, QrCodeData},
};

use super::Error;

pub const TABLE: TableDefinition<u64, Json<QrCodeRecord>> = TableDefinition::new("qr_codes");

/// Bookkeeping for [`TABLE`], holds the id counter
pub const META_TABLE: TableDefinition<&'static str, u64> = TableDefinition::new("qr_codes_meta");

/// Next id to hand out, only ever grows so deleted ids are never reused
const NEXT_ID_KEY: &str = "next_id";

type RecordTable<'txn> = redb::Table<'txn, u64, Json<QrCodeRecord>>;
type MetaTable<'txn> = redb::Table<'txn, &'static str, u64>;

/// Stored form of [`QrCodeData`], the field map is derived from the content on read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCodeRecord {
    pub id: u64,
    pub content: String,
    pub payload_type: PayloadType,
    pub title: String,
    #[serde(default)]
    pub thumbnail_path: Option<String>,
    pub created_at: u64,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_scanned: bool,
    pub color_foreground: String,
    pub color_background: String,
    #[serde(default)]
    pub pattern_style: PatternStyle,
    #[serde(default)]
    pub error_correction_level: ErrorCorrectionLevel,
    #[serde(default)]
    pub logo_path: Option<String>,
    pub size: u32,
    pub margin: u32,
}

impl From<QrCodeData> for QrCodeRecord {
    fn from(qr_code: QrCodeData) -> Self {
        Self {
            id: qr_code.id,
            content: qr_code.content,
            payload_type: qr_code.payload_type,
            title: qr_code.title,
            thumbnail_path: qr_code.thumbnail_path,
            created_at: qr_code.created_at,
            is_favorite: qr_code.is_favorite,
            is_scanned: qr_code.is_scanned,
            color_foreground: qr_code.color_foreground,
            color_background: qr_code.color_background,
            pattern_style: qr_code.pattern_style,
            error_correction_level: qr_code.error_correction_level,
            logo_path: qr_code.logo_path,
            size: qr_code.size,
            margin: qr_code.margin,
        }
    }
}

impl From<QrCodeRecord> for QrCodeData {
    fn from(record: QrCodeRecord) -> Self {
        Self {
            data: payload::parse(&record.content, record.payload_type),
            id: record.id,
            content: record.content,
            payload_type: record.payload_type,
            title: record.title,
            thumbnail_path: record.thumbnail_path,
            created_at: record.created_at,
            is_favorite: record.is_favorite,
            is_scanned: record.is_scanned,
            color_foreground: record.color_foreground,
            color_background: record.color_background,
            pattern_style: record.pattern_style,
            error_correction_level: record.error_correction_level,
            logo_path: record.logo_path,
            size: record.size,
            margin: record.margin,
        }
    }
}

/// Optional constraints for [`QrCodesTable::filter`], unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
pub struct QrCodeFilter {
    #[uniffi(default = None)]
    pub is_favorite: Option<bool>,
    #[uniffi(default = None)]
    pub is_scanned: Option<bool>,
    #[uniffi(default = None)]
    pub payload_type: Option<PayloadType>,
}

impl QrCodeFilter {
    fn matches(&self, record: &QrCodeRecord) -> bool {
        self.is_favorite.is_none_or(|favorite| record.is_favorite == favorite)
            && self.is_scanned.is_none_or(|scanned| record.is_scanned == scanned)
            && self.payload_type.is_none_or(|payload_type| record.payload_type == payload_type)
    }
}

#[derive(Debug, Clone, uniffi::Object)]
pub struct QrCodesTable {
    db: Arc<redb::Database>,
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, uniffi::Error, thiserror::Error)]
pub enum QrCodesTableError {
    #[error("failed to save qr code: {0}")]
    Save(String),

    #[error("failed to read qr code: {0}")]
    Read(String),

    #[error("failed to delete qr code: {0}")]
    Delete(String),

    #[error("no qr code with id {0}")]
    NotFound(u64),
}

type TableError = QrCodesTableError;

impl QrCodesTable {
    pub fn new(db: Arc<redb::Database>, write_txn: &redb::WriteTransaction) -> Result<Self, Error> {
        // create tables if they don't exist
        write_txn.open_table(TABLE)?;
        write_txn.open_table(META_TABLE)?;

        Ok(Self { db })
    }

    /// Every record matching `filter`, newest first
    fn records(&self, filter: impl Fn(&QrCodeRecord) -> bool) -> Result<Vec<QrCodeData>, Error> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|error| Error::DatabaseAccess(error.to_string()))?;

        let table = read_txn
            .open_table(TABLE)
            .map_err(|error| Error::TableAccess(error.to_string()))?;

        let mut records = table
            .iter()
            .map_err(|error| TableError::Read(error.to_string()))?
            .filter_map(|row| match row {
                Ok((_, value)) => Some(value.value()),
                Err(error) => {
                    warn!("skipping unreadable qr code row: {error}");
                    None
                }
            })
            .filter(|record| filter(record))
            .collect::<Vec<QrCodeRecord>>();

        records.sort_unstable_by(|a, b| {
            b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
        });

        Ok(records.into_iter().map(QrCodeData::from).collect())
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut RecordTable<'_>, &mut MetaTable<'_>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|error| Error::DatabaseAccess(error.to_string()))?;

        let value = {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|error| Error::TableAccess(error.to_string()))?;

            let mut meta = write_txn
                .open_table(META_TABLE)
                .map_err(|error| Error::TableAccess(error.to_string()))?;

            f(&mut table, &mut meta)?
        };

        write_txn
            .commit()
            .map_err(|error| Error::DatabaseAccess(error.to_string()))?;

        Updater::send_update(Update::DatabaseUpdated);

        Ok(value)
    }
}

/// Stored counter, or one past the highest key for tables written before the counter existed
fn next_id(table: &RecordTable<'_>, meta: &MetaTable<'_>) -> Result<u64, Error> {
    let stored = meta
        .get(NEXT_ID_KEY)
        .map_err(|error| TableError::Read(error.to_string()))?
        .map(|value| value.value());

    if let Some(next_id) = stored {
        return Ok(next_id);
    }

    let last_id = table
        .last()
        .map_err(|error| TableError::Read(error.to_string()))?
        .map(|(key, _)| key.value())
        .unwrap_or(0);

    Ok(last_id + 1)
}

#[uniffi::export]
impl QrCodesTable {
    /// Insert a new code (id 0) or replace the one with the same id, returns the id
    pub fn save(&self, qr_code: QrCodeData) -> Result<u64, Error> {
        let mut record = QrCodeRecord::from(qr_code);

        self.write(|table, meta| {
            let next_id = next_id(table, meta)?;

            if record.id == 0 {
                record.id = next_id;
            }

            // an explicit id past the counter moves the counter along
            let next_id = next_id.max(record.id + 1);
            meta.insert(NEXT_ID_KEY, next_id)
                .map_err(|error| TableError::Save(error.to_string()))?;

            debug!("saving qr code {} ({})", record.id, record.payload_type);

            let id = record.id;
            table
                .insert(id, record)
                .map_err(|error| TableError::Save(error.to_string()))?;

            Ok(id)
        })
    }

    /// Build the content from the field map and save, returns the id
    pub fn generate(&self, qr_code: QrCodeData) -> Result<u64, Error> {
        self.save(qr_code.with_built_content())
    }

    /// Replace an existing code, errors when there is nothing to replace
    pub fn update(&self, qr_code: QrCodeData) -> Result<(), Error> {
        let id = qr_code.id;
        let record = QrCodeRecord::from(qr_code);

        self.write(|table, _| {
            let exists = table
                .get(id)
                .map_err(|error| TableError::Read(error.to_string()))?
                .is_some();

            if !exists {
                return Err(TableError::NotFound(id).into());
            }

            table
                .insert(id, record)
                .map_err(|error| TableError::Save(error.to_string()))?;

            Ok(())
        })
    }

    pub fn get(&self, id: u64) -> Result<Option<QrCodeData>, Error> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|error| Error::DatabaseAccess(error.to_string()))?;

        let table = read_txn
            .open_table(TABLE)
            .map_err(|error| Error::TableAccess(error.to_string()))?;

        let qr_code = table
            .get(id)
            .map_err(|error| TableError::Read(error.to_string()))?
            .map(|value| QrCodeData::from(value.value()));

        Ok(qr_code)
    }

    pub fn delete(&self, id: u64) -> Result<(), Error> {
        self.delete_many(vec![id])
    }

    pub fn delete_many(&self, ids: Vec<u64>) -> Result<(), Error> {
        self.write(|table, _| {
            for id in ids {
                table
                    .remove(id)
                    .map_err(|error| TableError::Delete(error.to_string()))?;
            }

            Ok(())
        })
    }

    /// Flip the favorite flag, does nothing when the code is missing
    pub fn toggle_favorite(&self, id: u64) -> Result<(), Error> {
        self.write(|table, _| {
            let record = table
                .get(id)
                .map_err(|error| TableError::Read(error.to_string()))?
                .map(|value| value.value());

            let Some(record) = record else {
                debug!("toggle favorite on missing qr code {id}, ignoring");
                return Ok(());
            };

            let is_favorite = !record.is_favorite;
            table
                .insert(id, QrCodeRecord { is_favorite, ..record })
                .map_err(|error| TableError::Save(error.to_string()))?;

            Ok(())
        })
    }

    pub fn all(&self, is_scanned: Option<bool>) -> Result<Vec<QrCodeData>, Error> {
        let filter = QrCodeFilter { is_scanned, ..Default::default() };
        self.filter(filter)
    }

    pub fn recent(&self, limit: u32, is_scanned: Option<bool>) -> Result<Vec<QrCodeData>, Error> {
        let mut qr_codes = self.all(is_scanned)?;
        qr_codes.truncate(limit as usize);

        Ok(qr_codes)
    }

    /// Case insensitive substring match on the title or the content
    pub fn search(&self, query: String) -> Result<Vec<QrCodeData>, Error> {
        let query = query.to_lowercase();

        self.records(|record| {
            record.title.to_lowercase().contains(&query)
                || record.content.to_lowercase().contains(&query)
        })
    }

    pub fn favorites(&self) -> Result<Vec<QrCodeData>, Error> {
        let filter = QrCodeFilter { is_favorite: Some(true), ..Default::default() };
        self.filter(filter)
    }

    pub fn by_type(&self, payload_type: PayloadType) -> Result<Vec<QrCodeData>, Error> {
        let filter = QrCodeFilter { payload_type: Some(payload_type), ..Default::default() };
        self.filter(filter)
    }

    pub fn filter(&self, filter: QrCodeFilter) -> Result<Vec<QrCodeData>, Error> {
        self.records(|record| filter.matches(record))
    }

    pub fn len(&self) -> Result<u64, Error> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|error| Error::DatabaseAccess(error.to_string()))?;

        let table = read_txn
            .open_table(TABLE)
            .map_err(|error| Error::TableAccess(error.to_string()))?;

        let len = table.len().map_err(|error| TableError::Read(error.to_string()))?;
        Ok(len)
    }

    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.len()? == 0)
    }
}
