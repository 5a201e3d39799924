use std::path::{Path, PathBuf};
use std::process::Command;

use crate::encode::ffmpeg::run_ffmpeg;
use crate::foundation::core::Clip;
use crate::reconcile::Resampler;

/// [`Resampler`] that re-reads the clip's source file through the system `ffmpeg`.
#[derive(Clone, Debug)]
pub struct FfmpegResampler {
    /// `ffmpeg` executable (looked up on `PATH` when not absolute).
    pub program: PathBuf,
}

impl Default for FfmpegResampler {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
        }
    }
}

impl FfmpegResampler {
    /// Create a resampler using `ffmpeg` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resampler for FfmpegResampler {
    fn resample(&self, clip: &Clip, target_rate: u32, dest: &Path) -> anyhow::Result<()> {
        let codec = pcm_codec(clip.format.bit_depth)?;
        let mut cmd = Command::new(&self.program);
        cmd.args(["-v", "error", "-y", "-i"])
            .arg(&clip.source)
            .args([
                "-vn",
                "-map_metadata",
                "-1",
                "-ar",
                &target_rate.to_string(),
                "-ac",
                &clip.format.channels.to_string(),
                "-c:a",
                codec,
                "-f",
                "wav",
            ])
            .arg(dest);
        run_ffmpeg(cmd, &format!("resample of '{}'", clip.source.display()))
    }
}

/// `ffmpeg` PCM codec preserving `bit_depth`.
fn pcm_codec(bit_depth: u16) -> anyhow::Result<&'static str> {
    Ok(match bit_depth {
        8 => "pcm_u8",
        16 => "pcm_s16le",
        24 => "pcm_s24le",
        32 => "pcm_s32le",
        other => anyhow::bail!("no ffmpeg PCM codec for {other}-bit samples"),
    })
}
