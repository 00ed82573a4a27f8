//! Embeds the commit hash and build date for `arcade-progress --version`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    // CI sets ARCADE_BUILD_COMMIT; local builds ask git
    let commit = env::var("ARCADE_BUILD_COMMIT").unwrap_or_else(|_| {
        Command::new("git")
            .args(["rev-parse", "--short=7", "HEAD"])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    });

    let date = env::var("ARCADE_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let dest = Path::new(&out_dir).join("build_info.rs");

    let version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let line = format!("{} ({} {})", version, commit, date);

    fs::write(
        &dest,
        format!(
            r#"pub const BUILD_COMMIT: &str = {:?};
pub const BUILD_DATE: &str = {:?};
pub const VERSION_LINE: &str = {:?};
"#,
            commit, date, line
        ),
    )
    .expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=ARCADE_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=ARCADE_BUILD_DATE");
}
