use super::*;

#[test]
fn format_rejects_zero_fields() {
    assert!(AudioFormat::new(0, 1, 16).is_err());
    assert!(AudioFormat::new(44_100, 0, 16).is_err());
    assert!(AudioFormat::new(44_100, 1, 0).is_err());
    assert!(AudioFormat::new(44_100, 1, 33).is_err());
    AudioFormat::new(44_100, 2, 24).unwrap();
}

#[test]
fn frames_to_secs_is_exact_for_whole_seconds() {
    let fmt = AudioFormat::new(44_100, 1, 16).unwrap();
    assert_eq!(fmt.frames_to_secs(0), 0.0);
    assert_eq!(fmt.frames_to_secs(44_100), 1.0);
    assert_eq!(fmt.frames_to_secs(66_150), 1.5);
}

#[test]
fn clip_name_strips_directory_and_last_extension() {
    assert_eq!(clip_name(Path::new("sfx/attack.wav")).unwrap(), "attack");
    assert_eq!(
        clip_name(Path::new("/abs/music.loop.wav")).unwrap(),
        "music.loop"
    );
    assert_eq!(clip_name(Path::new("noext")).unwrap(), "noext");
    assert!(clip_name(Path::new("/")).is_err());
}

#[test]
fn clip_from_path_fills_names_and_counts_frames() {
    let fmt = AudioFormat::new(8_000, 2, 16).unwrap();
    let clip = Clip::from_path("dir/jump.wav", vec![1, 2, 3, 4, 5, 6], fmt).unwrap();
    assert_eq!(clip.name, "jump");
    assert_eq!(clip.file_name, "jump.wav");
    assert_eq!(clip.frames(), Some(3));

    let ragged = Clip {
        samples: vec![1, 2, 3],
        ..clip
    };
    assert_eq!(ragged.frames(), None);
}
