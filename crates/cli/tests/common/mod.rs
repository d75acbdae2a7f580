//! Shared helpers for CLI process tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// A command for `bin` running in `dir` with no inherited configuration.
pub fn command(bin: &str, dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(bin).expect("binary should be built");
    cmd.current_dir(dir)
        .env("RUST_LOG", "info")
        .env_remove("AUDIOCONV_CONFIG")
        .env_remove("AUDIOCONV_ENGINE_SOURCE")
        .env_remove("AUDIOCONV_ENGINE_NAME")
        .env_remove("AUDIOCONV_ENGINE_PATH")
        .env_remove("AUDIOCONV_CONVERSION_FORMAT")
        .env_remove("AUDIOCONV_CONVERSION_QUALITY")
        .env_remove("AUDIOCONV_CONVERSION_MONO")
        .env_remove("AUDIOCONV_CONVERSION_STEREO")
        .env_remove("AUDIOCONV_CONVERSION_STRICT");
    cmd
}

/// Creates empty files named `names` inside `dir`.
pub fn touch_all(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"").expect("failed to create input file");
    }
}

/// Writes a stand-in engine that records its arguments into the output file
/// and fails for inputs whose name contains `broken`.
#[cfg(unix)]
pub fn write_stub_engine(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-ffmpeg");
    std::fs::write(
        &script,
        r#"#!/bin/sh
input="$2"
eval "output=\${$(($# - 1))}"
case "$input" in
  *broken*)
    echo "$input: Invalid data found when processing input" >&2
    exit 1
    ;;
esac
printf '%s\n' "$*" > "$output"
"#,
    )
    .expect("failed to write stub engine");

    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();
    script
}
