//! Build script: embeds the crate version string for `--version` output.

use std::process::Command;

fn main() {
    // Prefer JOSHUA_BUNDLE_VERSION if set (e.g. by a release build),
    // otherwise fall back to git describe for local builds.
    if let Ok(version) = std::env::var("JOSHUA_BUNDLE_VERSION") {
        println!("cargo:rustc-env=JOSHUA_BUNDLE_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=JOSHUA_BUNDLE_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=JOSHUA_BUNDLE_VERSION");
}
