//! App facade, the single entry point the frontends hold on to

pub mod reconcile;

use std::sync::Arc;

use flume::Receiver;
use once_cell::sync::OnceCell;
use reconcile::{AppStateReconcileMessage as AppMessage, FfiReconcile, Updater};
use tracing::{debug, error, info};

use crate::database::{Database, settings::SettingKey};

pub static APP: OnceCell<App> = OnceCell::new();

/// Messages queued for the frontend before it starts listening
const UPDATE_QUEUE_SIZE: usize = 1000;

#[derive(Debug, Clone)]
pub struct App {
    update_receiver: Arc<Receiver<AppMessage>>,
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, uniffi::Enum)]
pub enum AppAction {
    ToggleSetting(SettingKey),
    SetSetting { key: SettingKey, value: bool },
    ToggleFavorite { id: u64 },
    DeleteQrCodes { ids: Vec<u64> },
}

impl App {
    /// Create a new instance of the app
    pub fn new() -> Self {
        // one time init
        crate::logging::init();

        let (sender, receiver) = flume::bounded(UPDATE_QUEUE_SIZE);
        Updater::init(sender);

        info!("starting qrmaster {} ({})", crate::build::version(), crate::build::git_short_hash());

        Self { update_receiver: Arc::new(receiver) }
    }

    /// Fetch global instance of the app, or create one if it doesn't exist
    pub fn global() -> &'static App {
        APP.get_or_init(App::new)
    }

    /// Handle event received from frontend
    pub fn handle_action(&self, action: AppAction) {
        self.handle_action_with(Database::global(), action);
    }

    fn handle_action_with(&self, database: &Database, action: AppAction) {
        debug!("handling action: {action:?}");

        let result = match action {
            AppAction::ToggleSetting(key) => database.settings.toggle(key).map(|_| ()),
            AppAction::SetSetting { key, value } => database.settings.set(key, value),
            AppAction::ToggleFavorite { id } => database.qr_codes.toggle_favorite(id),
            AppAction::DeleteQrCodes { ids } => database.qr_codes.delete_many(ids),
        };

        if let Err(error) = result {
            error!("unable to handle action: {error}");
        }
    }

    pub fn listen_for_updates(&self, updater: Box<dyn FfiReconcile>) {
        let update_receiver = self.update_receiver.clone();

        std::thread::spawn(move || {
            while let Ok(message) = update_receiver.recv() {
                updater.reconcile(message);
            }
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Representation of our app over FFI. Essentially a wrapper of [`App`].
#[derive(Debug, Clone, Hash, Eq, PartialEq, uniffi::Object)]
pub struct FfiApp;

#[uniffi::export]
impl FfiApp {
    /// FFI constructor which wraps in an Arc
    #[uniffi::constructor(name = "new")]
    pub fn global() -> Arc<Self> {
        Arc::new(Self)
    }

    /// Frontend calls this method to send events to the rust application logic
    pub fn dispatch(&self, action: AppAction) {
        self.inner().handle_action(action);
    }

    pub fn listen_for_updates(&self, updater: Box<dyn FfiReconcile>) {
        self.inner().listen_for_updates(updater);
    }

    pub fn database(&self) -> Database {
        Database::global().clone()
    }

    pub fn version(&self) -> String {
        crate::build::version()
    }

    pub fn git_short_hash(&self) -> String {
        crate::build::git_short_hash()
    }

    pub fn profile(&self) -> String {
        crate::build::profile()
    }

    pub fn is_release(&self) -> bool {
        crate::build::is_release()
    }
}

impl FfiApp {
    /// Fetch global instance of the app, or create one if it doesn't exist
    fn inner(&self) -> &App {
        App::global()
    }
}
