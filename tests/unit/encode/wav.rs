use super::*;
use crate::decode::Decoder;
use crate::decode::wav::{WavDecoder, decode_wav_reader};

#[test]
fn file_output_decodes_back_to_the_same_pcm() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("nested").join("sprite.wav");
    let fmt = AudioFormat::new(22_050, 2, 16).unwrap();
    let samples = vec![0, 1, -1, 32_767, -32_768, 7];

    encode_wav(&samples, fmt, &dest).unwrap();

    let clip = WavDecoder.decode(&dest).unwrap();
    assert_eq!(clip.format, fmt);
    assert_eq!(clip.samples, samples);
}

#[test]
fn in_memory_image_has_riff_header() {
    let fmt = AudioFormat::new(8_000, 1, 8).unwrap();
    let bytes = encode_wav_bytes(&[-128, 0, 127], fmt).unwrap();
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");

    let clip = decode_wav_reader(std::io::Cursor::new(bytes), Path::new("mem.wav")).unwrap();
    assert_eq!(clip.samples, vec![-128, 0, 127]);
}

#[test]
fn out_of_range_sample_is_write_failed() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("bad.wav");
    let fmt = AudioFormat::new(8_000, 1, 16).unwrap();
    let err = encode_wav(&[70_000], fmt, &dest).unwrap_err();
    assert!(matches!(err, EncodeError::WriteFailed { .. }));
}
