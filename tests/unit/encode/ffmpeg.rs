use super::*;
use crate::encode::wav::encode_wav;
use crate::foundation::core::AudioFormat;

#[test]
fn missing_program_reports_spawn_failure() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("in.wav");
    encode_wav(&[0, 1, 2, 3], AudioFormat::new(8_000, 1, 16).unwrap(), &src).unwrap();

    let t = FfmpegTranscoder {
        program: dir.path().join("definitely-not-ffmpeg"),
        ..FfmpegTranscoder::default()
    };
    let err = t
        .transcode(&src, OutputFormat::Mp3, &dir.path().join("out.mp3"))
        .unwrap_err();
    assert!(format!("{err:#}").contains("failed to spawn ffmpeg"));
}

#[test]
fn failing_ffmpeg_surfaces_stderr() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let err = FfmpegTranscoder::new()
        .transcode(
            &dir.path().join("missing.wav"),
            OutputFormat::Ac3,
            &dir.path().join("out.ac3"),
        )
        .unwrap_err();
    assert!(err.to_string().contains("exited with status"));
}

#[test]
fn transcodes_wav_to_ac3() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("in.wav");
    let samples: Vec<i32> = (0..48_000).map(|i| ((i % 100) * 300) - 15_000).collect();
    encode_wav(&samples, AudioFormat::new(48_000, 1, 16).unwrap(), &src).unwrap();

    let dest = dir.path().join("out.ac3");
    FfmpegTranscoder::new()
        .transcode(&src, OutputFormat::Ac3, &dest)
        .unwrap();
    assert!(std::fs::metadata(&dest).unwrap().len() > 0);
}
