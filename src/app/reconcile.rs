//! Send updates from rust to the frontend

use flume::{Sender, TrySendError};
use once_cell::sync::OnceCell;
use tracing::{error, trace, warn};

use crate::{database::settings::SettingKey, scanner::ScannedCode};

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum AppStateReconcileMessage {
    /// the history changed, lists should be reloaded
    DatabaseUpdated,
    SettingChanged { key: SettingKey, value: bool },
    CodeScanned(ScannedCode),
}

// alias for easier imports on the rust side
pub type Update = AppStateReconcileMessage;

pub static UPDATER: OnceCell<Updater> = OnceCell::new();

#[derive(Debug)]
pub struct Updater(pub Sender<AppStateReconcileMessage>);

impl Updater {
    /// Initialize global instance of the updater with a sender
    pub fn init(sender: Sender<AppStateReconcileMessage>) {
        UPDATER.get_or_init(|| Updater(sender));
    }

    /// Post a message to the frontend, dropped when no app was created
    pub fn send_update(message: AppStateReconcileMessage) {
        let Some(updater) = UPDATER.get() else {
            trace!("updater not initialized, dropping {message:?}");
            return;
        };

        match updater.0.try_send(message) {
            Ok(()) => {}
            Err(TrySendError::Full(message)) => {
                warn!("update queue is full, dropping {message:?}");
            }
            Err(TrySendError::Disconnected(message)) => {
                error!("update receiver is gone, dropping {message:?}");
            }
        }
    }
}

#[uniffi::export(callback_interface)]
pub trait FfiReconcile: Send + Sync + 'static {
    /// Essentially a callback to the frontend
    fn reconcile(&self, message: AppStateReconcileMessage);
}
