use std::path::Path;

use crate::encode::format::OutputFormat;

/// Capability that converts the lossless sprite into a compressed export.
///
/// `lossless` is always a PCM WAV produced by [`crate::encode::wav::encode_wav`].
pub trait Transcoder {
    /// Write `lossless` re-encoded as `target` to `dest`, replacing `dest` if it exists.
    fn transcode(&self, lossless: &Path, target: OutputFormat, dest: &Path) -> anyhow::Result<()>;
}

impl<T: Transcoder + ?Sized> Transcoder for &T {
    fn transcode(&self, lossless: &Path, target: OutputFormat, dest: &Path) -> anyhow::Result<()> {
        (**self).transcode(lossless, target, dest)
    }
}

impl<T: Transcoder + ?Sized> Transcoder for Box<T> {
    fn transcode(&self, lossless: &Path, target: OutputFormat, dest: &Path) -> anyhow::Result<()> {
        (**self).transcode(lossless, target, dest)
    }
}
