const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_SHORT_HASH: &str = env!("GIT_SHORT_HASH");
const BUILD_PROFILE: &str = env!("BUILD_PROFILE");

pub fn version() -> String {
    VERSION.to_string()
}

pub fn git_short_hash() -> String {
    GIT_SHORT_HASH.to_string()
}

pub fn is_release() -> bool {
    !cfg!(debug_assertions)
}

pub fn profile() -> String {
    BUILD_PROFILE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_is_filled() {
        assert_eq!(version(), "1.0.0");
        assert!(!git_short_hash().is_empty());
        assert!(!profile().is_empty());
        assert_eq!(is_release(), !cfg!(debug_assertions));
    }
}
