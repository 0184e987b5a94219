use std::path::{Path, PathBuf};

use eyre::{Context as _, Result};
use once_cell::sync::Lazy;
use tracing::debug;

/// Overrides the data directory, the mobile frontends point this at their sandbox
pub const DATA_DIR_ENV: &str = "QRMASTER_DATA_DIR";

pub const DATABASE_FILE_NAME: &str = "qrmaster.db";

pub static ROOT_DATA_DIR: Lazy<PathBuf> = Lazy::new(data_dir_init);

fn data_dir_init() -> PathBuf {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .expect("failed to get a home or local data directory")
            .join(".qrmaster"),
    };

    init_dir(&dir).expect("failed to create the root data directory")
}

/// Create `dir` (and its parents) if it does not exist yet
pub fn init_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        debug!("creating data directory at {}", dir.display());
        std::fs::create_dir_all(dir).wrap_err_with(|| {
            format!("failed to create data directory at {}", dir.to_string_lossy())
        })?;
    };

    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_dir_creates_nested_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");

        let created = init_dir(&nested).unwrap();
        assert_eq!(created, nested);
        assert!(nested.is_dir());

        // second call is a no-op
        assert!(init_dir(&nested).is_ok());
    }
}
