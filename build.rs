use std::process::Command;

fn main() {
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GIT_SHORT_HASH={}", git_hash.trim());

    // profile is the directory right above `build` in OUT_DIR
    // .../target/aarch64-linux-android/release-smaller/build/qrmaster-<hash>/out
    let out_dir = std::env::var("OUT_DIR").unwrap_or_default();
    let profile =
        out_dir.rsplit('/').skip_while(|part| *part != "build").nth(1).unwrap_or("unknown");

    println!("cargo:rustc-env=BUILD_PROFILE={profile}");

    // Rebuild when Git changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-changed=crates/*");
}
