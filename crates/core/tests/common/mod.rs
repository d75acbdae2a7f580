//! Shared helpers for core integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Creates empty files named `names` inside `dir`.
pub fn touch_all(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"").expect("failed to create input file");
    }
}

/// File names (not paths) of the regular files directly inside `dir`.
pub fn file_names(dir: &Path) -> std::collections::BTreeSet<String> {
    std::fs::read_dir(dir)
        .expect("failed to list dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect()
}

/// Writes an executable shell script named `name` into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join(name);
    std::fs::write(&script, format!("#!/bin/sh\n{body}")).expect("failed to write script");

    let mut perms = std::fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).unwrap();
    script
}

/// Writes a stand-in engine script that mimics ffmpeg's contract.
///
/// It writes its own argument list into the output file and exits 0, or
/// prints a diagnostic to stderr and exits 1 when the input name contains
/// `broken`.
#[cfg(unix)]
pub fn write_stub_engine(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "fake-ffmpeg",
        r#"input="$2"
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
}

/// Writes a stand-in engine that kills itself with SIGKILL.
#[cfg(unix)]
pub fn write_crashing_engine(dir: &Path) -> PathBuf {
    write_script(dir, "crashing-ffmpeg", "kill -9 $$\n")
}
