//! Camera scan session: turns raw detections into typed codes, once per code

use parking_lot::Mutex;
use qrmaster_types::{BarcodeFormat, FieldMap, PayloadType};
use qrmaster_util::result_ext::ResultExt as _;
use tracing::{debug, info};

use crate::{
    app::reconcile::{Update, Updater},
    database::{Database, qr_codes::QrCodesTable},
    detect, payload,
    qr_code::QrCodeData,
};

/// What the platform scanner hands over for one detection
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum ScanResultData {
    String(String),
    Data(Vec<u8>),
}

impl From<Vec<u8>> for ScanResultData {
    /// Valid UTF-8 is treated as text
    fn from(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(string) => Self::String(string),
            Err(error) => Self::Data(error.into_bytes()),
        }
    }
}

impl From<String> for ScanResultData {
    fn from(string: String) -> Self {
        Self::String(string)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ScannedCode {
    pub content: String,
    pub payload_type: PayloadType,
    pub format: BarcodeFormat,
    pub data: FieldMap,
    /// set when the code was saved to the history
    pub history_id: Option<u64>,
}

impl ScannedCode {
    pub fn new(content: String, format: BarcodeFormat) -> Self {
        let payload_type = detect::detect_scanned_type(&content, format);
        let data = payload::parse(&content, payload_type);

        Self { content, payload_type, format, data, history_id: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Error, thiserror::Error)]
pub enum ScannerError {
    #[error("scanned code contains binary data ({0} bytes), not text")]
    BinaryData(u64),

    #[error("unable to save scanned code: {0}")]
    Save(String),
}

type Error = ScannerError;

#[derive(Debug)]
struct ScannerState {
    is_scanning: bool,
    last_scanned: Option<String>,
    flash_on: bool,
    front_camera: bool,
}

impl Default for ScannerState {
    fn default() -> Self {
        Self { is_scanning: true, last_scanned: None, flash_on: false, front_camera: false }
    }
}

#[derive(Debug, uniffi::Object)]
pub struct Scanner {
    state: Mutex<ScannerState>,
    history: Option<QrCodesTable>,
}

impl Scanner {
    /// A session that saves accepted codes into `history`, or nowhere
    pub fn with_history(history: Option<QrCodesTable>) -> Self {
        Self { state: Mutex::new(ScannerState::default()), history }
    }

    /// Accept `content` if it is new, pausing the session
    fn accept(&self, content: &str) -> bool {
        let mut state = self.state.lock();

        if !state.is_scanning {
            return false;
        }

        if state.last_scanned.as_deref() == Some(content) {
            return false;
        }

        state.is_scanning = false;
        state.last_scanned = Some(content.to_string());
        true
    }
}

#[uniffi::export]
impl Scanner {
    /// Session backed by the app's history
    #[uniffi::constructor(name = "new")]
    pub fn new() -> Self {
        Self::with_history(Some(Database::global().qr_codes()))
    }

    /// Handle one detection, `None` when it was ignored
    ///
    /// A paused session or a repeat of the last accepted code is ignored.
    pub fn on_scanned(
        &self,
        data: ScanResultData,
        format: BarcodeFormat,
    ) -> Result<Option<ScannedCode>, Error> {
        if !self.is_scanning() {
            return Ok(None);
        }

        let content = match data {
            ScanResultData::String(content) => content,
            ScanResultData::Data(bytes) => return Err(Error::BinaryData(bytes.len() as u64)),
        };

        if !self.accept(&content) {
            debug!("ignoring repeated scan");
            return Ok(None);
        }

        let mut scanned = ScannedCode::new(content, format);
        info!("scanned {:?} code as {}", scanned.format, scanned.payload_type);

        if let Some(history) = &self.history {
            let qr_code = QrCodeData::scanned(scanned.content.clone(), scanned.payload_type);
            let id = history.save(qr_code).map_err_str(Error::Save)?;
            scanned.history_id = Some(id);
        }

        Updater::send_update(Update::CodeScanned(scanned.clone()));
        Ok(Some(scanned))
    }

    /// Start accepting codes again, the last code may be scanned again
    pub fn resume(&self) {
        let mut state = self.state.lock();
        state.is_scanning = true;
        state.last_scanned = None;
    }

    pub fn is_scanning(&self) -> bool {
        self.state.lock().is_scanning
    }

    /// Returns whether the flash is now on
    pub fn toggle_flash(&self) -> bool {
        let mut state = self.state.lock();
        state.flash_on = !state.flash_on;
        state.flash_on
    }

    /// Returns whether the front camera is now selected
    pub fn switch_camera(&self) -> bool {
        let mut state = self.state.lock();
        state.front_camera = !state.front_camera;
        state.front_camera
    }
}
