//! Binding generator for the Android (kotlin) and iOS (swift) frontends

fn main() {
    let wants_kotlin = std::env::args().any(|arg| arg.to_lowercase().contains("kotlin"));

    match wants_kotlin {
        true => uniffi::uniffi_bindgen_main(),
        false => uniffi::uniffi_bindgen_swift(),
    }
}
