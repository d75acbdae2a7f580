//! Discovery of convertible audio files.
//!
//! Only the top level of a directory is listed; matching is done on the
//! lowercased file name, never on file contents.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Which input extensions are picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryMode {
    /// Only `.mp3` files.
    Mp3Only,
    /// `.mp3`, `.ogg`, `.m4a` and `.flac` files.
    #[default]
    AllSupported,
}

impl DiscoveryMode {
    /// Extensions accepted by this mode, including the leading dot.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Mp3Only => &[".mp3"],
            Self::AllSupported => &[".mp3", ".ogg", ".m4a", ".flac"],
        }
    }

    /// Label used in run logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mp3Only => "MP3",
            Self::AllSupported => "audio",
        }
    }

    /// Whether `file_name` carries one of this mode's extensions.
    pub fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions().iter().any(|ext| lower.ends_with(ext))
    }
}

/// Lists the regular files in `directory` that `mode` accepts.
///
/// Entries keep the directory listing order. Directories, including
/// symlinks to directories, are skipped; an empty result is not an error.
pub async fn discover(directory: &Path, mode: DiscoveryMode) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(directory).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        // Lossy only for matching; the real path is kept byte for byte.
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        if !mode.matches(&name) {
            continue;
        }

        // Follows symlinks, so a link to a directory is rejected here.
        match tokio::fs::metadata(entry.path()).await {
            Ok(meta) if meta.is_file() => files.push(entry.path()),
            Ok(_) => debug!(entry = %name, "skipping non-file entry"),
            Err(e) => debug!(entry = %name, error = %e, "skipping unreadable entry"),
        }
    }

    Ok(files)
}
