use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::Context as _;

use crate::encode::format::OutputFormat;
use crate::encode::transcode::Transcoder;

/// Default export bitrate for lossy formats, in kbit/s.
pub const DEFAULT_BITRATE_KBPS: u32 = 128;

/// [`Transcoder`] that shells out to the system `ffmpeg`.
#[derive(Clone, Debug)]
pub struct FfmpegTranscoder {
    /// `ffmpeg` executable (looked up on `PATH` when not absolute).
    pub program: PathBuf,
    /// Target bitrate for lossy codecs, in kbit/s.
    pub bitrate_kbps: u32,
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
            bitrate_kbps: DEFAULT_BITRATE_KBPS,
        }
    }
}

impl FfmpegTranscoder {
    /// Create a transcoder using `ffmpeg` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, lossless: &Path, target: OutputFormat, dest: &Path) -> anyhow::Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-v", "error", "-y", "-i"])
            .arg(lossless)
            .args(["-vn", "-map_metadata", "-1"])
            .args(target.ffmpeg_args(self.bitrate_kbps))
            .arg(dest);
        run_ffmpeg(cmd, &format!("{target} export"))
    }
}

/// Run a prepared `ffmpeg` command to completion, surfacing stderr on failure.
pub(crate) fn run_ffmpeg(mut cmd: Command, what: &str) -> anyhow::Result<()> {
    tracing::debug!(?cmd, "running ffmpeg");
    let out = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("failed to spawn ffmpeg for {what} (is it installed and on PATH?)"))?;

    if !out.status.success() {
        anyhow::bail!(
            "ffmpeg {what} exited with status {}: {}",
            out.status,
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
