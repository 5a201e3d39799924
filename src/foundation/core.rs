use std::path::{Path, PathBuf};

use crate::foundation::error::{SpriteError, SpriteResult};

/// PCM layout of a decoded clip or of the assembled sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AudioFormat {
    /// Sample rate in Hz, must be non-zero.
    pub sample_rate: u32,
    /// Interleaved channel count, must be non-zero.
    pub channels: u16,
    /// Integer sample width in bits, must be non-zero.
    pub bit_depth: u16,
}

impl AudioFormat {
    /// Create a validated format.
    pub fn new(sample_rate: u32, channels: u16, bit_depth: u16) -> SpriteResult<Self> {
        if sample_rate == 0 {
            return Err(SpriteError::validation("sample rate must be non-zero"));
        }
        if channels == 0 {
            return Err(SpriteError::validation("channel count must be non-zero"));
        }
        if bit_depth == 0 || bit_depth > 32 {
            return Err(SpriteError::validation(format!(
                "bit depth must be within 1..=32, got {bit_depth}"
            )));
        }
        Ok(Self {
            sample_rate,
            channels,
            bit_depth,
        })
    }

    /// Convert a frame count to seconds at this format's sample rate.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        frames as f64 / f64::from(self.sample_rate)
    }
}

/// One decoded input: interleaved integer samples plus their format.
///
/// A clip is consumed once by the assembler; its sample buffer moves into the sprite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clip {
    /// Logical name used as the timeline key (file stem of the source).
    pub name: String,
    /// Base file name of the source, matched against the loop list.
    pub file_name: String,
    /// Path the clip was decoded from.
    pub source: PathBuf,
    /// Interleaved samples.
    pub samples: Vec<i32>,
    /// Sample layout.
    pub format: AudioFormat,
}

impl Clip {
    /// Build a clip from a source path, deriving its logical and base names.
    pub fn from_path(
        source: impl Into<PathBuf>,
        samples: Vec<i32>,
        format: AudioFormat,
    ) -> SpriteResult<Self> {
        let source = source.into();
        let name = clip_name(&source)?;
        let file_name = file_name(&source)?;
        Ok(Self {
            name,
            file_name,
            source,
            samples,
            format,
        })
    }

    /// Number of whole frames, or `None` when the buffer is not frame-aligned.
    pub fn frames(&self) -> Option<u64> {
        let ch = usize::from(self.format.channels);
        if ch == 0 || !self.samples.len().is_multiple_of(ch) {
            return None;
        }
        Some((self.samples.len() / ch) as u64)
    }

    /// Clip duration in seconds (partial trailing frames are ignored).
    pub fn duration_secs(&self) -> f64 {
        let frames = self.samples.len() / usize::from(self.format.channels.max(1));
        self.format.frames_to_secs(frames as u64)
    }
}

/// Derive a clip's logical name: the base file name without its last extension.
pub fn clip_name(path: &Path) -> SpriteResult<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| {
            SpriteError::validation(format!(
                "cannot derive a clip name from '{}'",
                path.display()
            ))
        })
}

fn file_name(path: &Path) -> SpriteResult<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
        .ok_or_else(|| {
            SpriteError::validation(format!(
                "cannot derive a file name from '{}'",
                path.display()
            ))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
