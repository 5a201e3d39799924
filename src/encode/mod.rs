//! Encode capability.
//!
//! The sprite is always written as a lossless WAV first; compressed exports are produced from that
//! file by a [`transcode::Transcoder`].

use std::path::Path;

use crate::foundation::error::SpriteResult;

/// `ffmpeg` subprocess helpers and the `ffmpeg`-backed transcoder.
pub mod ffmpeg;
/// Export targets.
pub mod format;
/// Transcode capability trait.
pub mod transcode;
/// Lossless WAV writer.
pub mod wav;

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> SpriteResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
