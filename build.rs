//! Build script for detecting system dependencies and providing installation guidance.
//!
//! Checks for the X11 client library required for cursor control on Linux
//! and prints helpful guidance if it is missing.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    check_x11();

    println!(
        "cargo:rustc-env=BUILD_TARGET={}",
        env::var("TARGET").unwrap_or_default()
    );
    println!("cargo:rustc-env=BUILD_HOST={}", env::var("HOST").unwrap_or_default());
}

fn check_x11() {
    println!("cargo:rerun-if-env-changed=PKG_CONFIG_PATH");

    let output = Command::new("pkg-config").args(["--modversion", "x11"]).output();

    match output {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout);
            println!("cargo:warning=Found X11 version: {}", version.trim());
        }
        _ => {
            println!("cargo:warning=X11 development library not detected via pkg-config.");
            println!("cargo:warning=Cursor control requires an X11 session at runtime.");
            println!("cargo:warning=On Debian/Ubuntu: sudo apt install libx11-dev");
            println!("cargo:warning=On Fedora: sudo dnf install libX11-devel");
        }
    }
}
