use std::fmt::Display;

pub trait ResultExt<T, E> {
    /// Fold any displayable error into a string carrying error variant
    ///
    /// Storage and rendering errors from third party crates are not FFI safe,
    /// so they are flattened into `String` before crossing the boundary.
    ///
    /// # Example
    /// ```rust
    /// use qrmaster_util::result_ext::ResultExt as _;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// enum LogoError {
    ///     #[error("unable to read logo: {0}")]
    ///     Read(String),
    /// }
    ///
    /// fn read_logo(path: &str) -> Result<Vec<u8>, LogoError> {
    ///     let bytes = std::fs::read(path).map_err_str(LogoError::Read)?;
    ///     Ok(bytes)
    /// }
    ///
    /// assert!(read_logo("/definitely/not/here.png").is_err());
    /// ```
    fn map_err_str<F, Final>(self, f: F) -> Result<T, Final>
    where
        E: Display,
        F: FnOnce(String) -> Final;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_err_str<F, Final>(self, f: F) -> Result<T, Final>
    where
        E: Display,
        F: FnOnce(String) -> Final,
    {
        self.map_err(|error| f(error.to_string()))
    }
}
