use super::*;

#[test]
fn parse_accepts_case_and_leading_dot() {
    assert_eq!("ogg".parse::<OutputFormat>().unwrap(), OutputFormat::Ogg);
    assert_eq!(".MP3".parse::<OutputFormat>().unwrap(), OutputFormat::Mp3);
    assert_eq!(" m4a ".parse::<OutputFormat>().unwrap(), OutputFormat::M4a);
    let err = "flac".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("flac"));
    assert!(err.contains("opus"));
}

#[test]
fn display_is_the_extension() {
    for f in OutputFormat::ALL {
        assert_eq!(f.to_string(), f.extension());
        assert_eq!(f.extension().parse::<OutputFormat>().unwrap(), f);
    }
}

#[test]
fn only_wav_is_lossless() {
    assert!(!OutputFormat::Wav.is_compressed());
    assert!(
        OutputFormat::ALL
            .iter()
            .filter(|f| **f != OutputFormat::Wav)
            .all(|f| f.is_compressed())
    );
}

#[test]
fn ffmpeg_args_pick_muxer_and_codec() {
    let args = OutputFormat::Ogg.ffmpeg_args(96);
    assert_eq!(args, ["-c:a", "libvorbis", "-b:a", "96k", "-f", "ogg"]);

    let opus = OutputFormat::Opus.ffmpeg_args(64);
    assert!(opus.windows(2).any(|w| w == ["-ar", "48000"]));
    assert_eq!(opus.last().map(String::as_str), Some("opus"));
}
