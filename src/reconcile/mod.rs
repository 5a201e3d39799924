//! Sample-rate reconciliation.
//!
//! Every clip that reaches the assembler must share the reference rate fixed by the first clip.
//! Mismatched clips are resampled once here, so the assembler never deals with fractional frames.

use std::path::Path;

use crate::decode::Decoder;
use crate::foundation::core::Clip;
use crate::foundation::error::ReconcileError;

/// `ffmpeg`-backed resampler.
pub mod ffmpeg;
/// In-process linear interpolation resampler.
pub mod linear;

/// Capability that converts a clip to another sample rate.
///
/// Implementations write a PCM WAV with the clip's channel count and bit depth at `target_rate`
/// to `dest`. The reconciler re-decodes that file and removes it afterwards.
pub trait Resampler {
    /// Resample `clip` (from its samples or its source file) into `dest`.
    fn resample(&self, clip: &Clip, target_rate: u32, dest: &Path) -> anyhow::Result<()>;
}

impl<R: Resampler + ?Sized> Resampler for &R {
    fn resample(&self, clip: &Clip, target_rate: u32, dest: &Path) -> anyhow::Result<()> {
        (**self).resample(clip, target_rate, dest)
    }
}

impl<R: Resampler + ?Sized> Resampler for Box<R> {
    fn resample(&self, clip: &Clip, target_rate: u32, dest: &Path) -> anyhow::Result<()> {
        (**self).resample(clip, target_rate, dest)
    }
}

/// Brings decoded clips to a common sample rate.
pub struct RateReconciler<'a> {
    decoder: &'a dyn Decoder,
    resampler: Option<&'a dyn Resampler>,
}

impl<'a> RateReconciler<'a> {
    /// Create a reconciler. Without a resampler any rate mismatch is fatal.
    pub fn new(decoder: &'a dyn Decoder, resampler: Option<&'a dyn Resampler>) -> Self {
        Self { decoder, resampler }
    }

    /// Reconcile `clip` against `reference_rate`, returning the clip and the (possibly new)
    /// reference rate.
    ///
    /// With no reference yet, the clip's own rate becomes the reference.
    pub fn reconcile(
        &self,
        clip: Clip,
        reference_rate: Option<u32>,
    ) -> Result<(Clip, u32), ReconcileError> {
        let Some(target) = reference_rate else {
            let rate = clip.format.sample_rate;
            return Ok((clip, rate));
        };
        if clip.format.sample_rate == target {
            return Ok((clip, target));
        }

        let Some(resampler) = self.resampler else {
            return Err(ReconcileError::ResampleUnavailable {
                name: clip.name,
                from: clip.format.sample_rate,
                to: target,
            });
        };

        tracing::info!(
            clip = %clip.name,
            from = clip.format.sample_rate,
            to = target,
            "resampling clip"
        );

        // Removed on drop, whichever way this function returns.
        let scratch = tempfile::Builder::new()
            .prefix("audiosprite-")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| failed(&clip, format!("failed to create scratch file: {e}")))?;

        resampler
            .resample(&clip, target, scratch.path())
            .map_err(|e| failed(&clip, format!("{e:#}")))?;
        let resampled = self
            .decoder
            .decode(scratch.path())
            .map_err(|e| failed(&clip, format!("cannot decode resampler output: {e}")))?;

        if resampled.format.sample_rate != target {
            return Err(failed(
                &clip,
                format!(
                    "resampler produced {} Hz, expected {target} Hz",
                    resampled.format.sample_rate
                ),
            ));
        }
        if resampled.format.channels != clip.format.channels {
            return Err(failed(
                &clip,
                format!(
                    "resampler changed channel count from {} to {}",
                    clip.format.channels, resampled.format.channels
                ),
            ));
        }

        Ok((
            Clip {
                samples: resampled.samples,
                format: resampled.format,
                ..clip
            },
            target,
        ))
    }
}

fn failed(clip: &Clip, detail: String) -> ReconcileError {
    ReconcileError::ResampleFailed {
        name: clip.name.clone(),
        detail,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reconcile/reconcile.rs"]
mod tests;
