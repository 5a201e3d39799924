//! Sample rate conversion using linear interpolation.
//!
//! Works on the decoded samples directly, so no external tool is needed. Linear interpolation is
//! adequate for short UI/game effects; use [`super::ffmpeg::FfmpegResampler`] for higher quality.

use std::path::Path;

use crate::encode::wav::encode_wav;
use crate::foundation::core::{AudioFormat, Clip};
use crate::reconcile::Resampler;

/// In-process [`Resampler`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearResampler;

impl LinearResampler {
    /// Create a new linear resampler.
    pub fn new() -> Self {
        Self
    }
}

impl Resampler for LinearResampler {
    fn resample(&self, clip: &Clip, target_rate: u32, dest: &Path) -> anyhow::Result<()> {
        anyhow::ensure!(target_rate > 0, "target sample rate must be non-zero");
        let out = resample_interleaved(&clip.samples, clip.format, target_rate);
        let format = AudioFormat {
            sample_rate: target_rate,
            ..clip.format
        };
        encode_wav(&out, format, dest)?;
        Ok(())
    }
}

/// Resample interleaved integer PCM from `format.sample_rate` to `to_rate`.
///
/// The output frame count is the input frame count scaled by `to_rate / from_rate`, rounded to
/// the nearest frame. Trailing samples that do not form a whole frame are dropped.
pub fn resample_interleaved(samples: &[i32], format: AudioFormat, to_rate: u32) -> Vec<i32> {
    let ch = usize::from(format.channels);
    let from_rate = format.sample_rate;
    if ch == 0 || from_rate == 0 || to_rate == 0 {
        return Vec::new();
    }
    let in_frames = samples.len() / ch;
    if from_rate == to_rate {
        return samples[..in_frames * ch].to_vec();
    }
    if in_frames == 0 {
        return Vec::new();
    }

    let num = in_frames as u128 * u128::from(to_rate);
    let den = u128::from(from_rate);
    let out_frames = ((num + den / 2) / den) as usize;

    let (lo, hi) = sample_bounds(format.bit_depth);
    let step = f64::from(from_rate) / f64::from(to_rate);
    let last = in_frames - 1;

    let mut out = Vec::with_capacity(out_frames * ch);
    for j in 0..out_frames {
        let pos = j as f64 * step;
        let idx = (pos.floor() as usize).min(last);
        let next = (idx + 1).min(last);
        let frac = pos - idx as f64;
        for c in 0..ch {
            let a = f64::from(samples[idx * ch + c]);
            let b = f64::from(samples[next * ch + c]);
            let v = (a + (b - a) * frac).round();
            out.push(v.clamp(lo, hi) as i32);
        }
    }
    out
}

fn sample_bounds(bit_depth: u16) -> (f64, f64) {
    let bits = i32::from(bit_depth.clamp(1, 32)) - 1;
    let hi = (1i64 << bits) - 1;
    let lo = -(1i64 << bits);
    (lo as f64, hi as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/reconcile/linear.rs"]
mod tests;
