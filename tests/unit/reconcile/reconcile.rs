use super::*;
use crate::decode::wav::WavDecoder;
use crate::encode::wav::encode_wav;
use crate::foundation::core::AudioFormat;
use crate::foundation::error::ReconcileError;
use std::cell::RefCell;
use std::path::PathBuf;

/// Writes a fixed-length silent WAV at `out_rate` (or fails) and remembers the scratch path.
struct FakeResampler {
    out_rate: Option<u32>,
    fail_after_write: bool,
    seen: RefCell<Option<PathBuf>>,
}

impl FakeResampler {
    fn honest() -> Self {
        Self {
            out_rate: None,
            fail_after_write: false,
            seen: RefCell::new(None),
        }
    }
}

impl Resampler for FakeResampler {
    fn resample(&self, clip: &Clip, target_rate: u32, dest: &Path) -> anyhow::Result<()> {
        *self.seen.borrow_mut() = Some(dest.to_path_buf());
        let rate = self.out_rate.unwrap_or(target_rate);
        let fmt = AudioFormat {
            sample_rate: rate,
            ..clip.format
        };
        let frames = rate as usize / 10;
        encode_wav(&vec![0; frames * usize::from(fmt.channels)], fmt, dest)?;
        if self.fail_after_write {
            anyhow::bail!("tool crashed");
        }
        Ok(())
    }
}

fn clip(name: &str, rate: u32, channels: u16) -> Clip {
    let fmt = AudioFormat::new(rate, channels, 16).unwrap();
    Clip::from_path(format!("{name}.wav"), vec![7; 4 * usize::from(channels)], fmt).unwrap()
}

#[test]
fn first_clip_sets_the_reference_rate() {
    let rec = RateReconciler::new(&WavDecoder, None);
    let c = clip("a", 22_050, 1);
    let (out, rate) = rec.reconcile(c.clone(), None).unwrap();
    assert_eq!(rate, 22_050);
    assert_eq!(out, c);
}

#[test]
fn matching_rate_passes_through_without_resampler() {
    let rec = RateReconciler::new(&WavDecoder, None);
    let c = clip("a", 44_100, 2);
    let (out, rate) = rec.reconcile(c.clone(), Some(44_100)).unwrap();
    assert_eq!(rate, 44_100);
    assert_eq!(out, c);
}

#[test]
fn mismatch_without_resampler_is_unavailable() {
    let rec = RateReconciler::new(&WavDecoder, None);
    let err = rec
        .reconcile(clip("boom", 22_050, 1), Some(44_100))
        .unwrap_err();
    match err {
        ReconcileError::ResampleUnavailable { name, from, to } => {
            assert_eq!(name, "boom");
            assert_eq!(from, 22_050);
            assert_eq!(to, 44_100);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn mismatch_is_resampled_and_scratch_removed() {
    let fake = FakeResampler::honest();
    let rec = RateReconciler::new(&WavDecoder, Some(&fake));

    let (out, rate) = rec.reconcile(clip("boom", 22_050, 2), Some(48_000)).unwrap();
    assert_eq!(rate, 48_000);
    assert_eq!(out.format.sample_rate, 48_000);
    assert_eq!(out.format.channels, 2);
    assert_eq!(out.samples.len(), 4_800 * 2);
    assert_eq!(out.name, "boom");
    assert_eq!(out.file_name, "boom.wav");
    assert_eq!(out.source, PathBuf::from("boom.wav"));

    let scratch = fake.seen.borrow().clone().unwrap();
    assert!(!scratch.exists());
}

#[test]
fn capability_failure_is_resample_failed_and_scratch_removed() {
    let fake = FakeResampler {
        fail_after_write: true,
        ..FakeResampler::honest()
    };
    let rec = RateReconciler::new(&WavDecoder, Some(&fake));

    let err = rec
        .reconcile(clip("boom", 22_050, 1), Some(44_100))
        .unwrap_err();
    assert!(matches!(err, ReconcileError::ResampleFailed { .. }));
    assert!(err.to_string().contains("tool crashed"));

    let scratch = fake.seen.borrow().clone().unwrap();
    assert!(!scratch.exists());
}

#[test]
fn wrong_output_rate_is_rejected() {
    let fake = FakeResampler {
        out_rate: Some(32_000),
        ..FakeResampler::honest()
    };
    let rec = RateReconciler::new(&WavDecoder, Some(&fake));
    let err = rec
        .reconcile(clip("boom", 22_050, 1), Some(44_100))
        .unwrap_err();
    assert!(matches!(err, ReconcileError::ResampleFailed { .. }));
    assert!(err.to_string().contains("32000"));
}

#[test]
fn linear_resampler_reconciles_in_process() {
    let lin = crate::reconcile::linear::LinearResampler;
    let rec = RateReconciler::new(&WavDecoder, Some(&lin));
    let (out, _) = rec.reconcile(clip("up", 22_050, 1), Some(44_100)).unwrap();
    assert_eq!(out.format.sample_rate, 44_100);
    assert_eq!(out.samples.len(), 8);
}
