pub mod database;
pub mod detect;
pub mod payload;
pub mod qr_code;
pub mod render;
pub mod scanner;

pub(crate) mod app;
pub(crate) mod build;
pub(crate) mod logging;

uniffi::setup_scaffolding!();
