use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpriteError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SpriteError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        SpriteError::from(AssemblyError::NoClips)
            .to_string()
            .starts_with("assembly error:")
    );
    assert!(
        SpriteError::from(EncodeError::TranscodeFailed("x".into()))
            .to_string()
            .starts_with("encode error:")
    );
}

#[test]
fn decode_errors_name_the_input() {
    let err = DecodeError::NotFound {
        path: PathBuf::from("sfx/missing.wav"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(err.path(), std::path::Path::new("sfx/missing.wav"));
    let msg = SpriteError::from(err).to_string();
    assert!(msg.starts_with("decode error:"));
    assert!(msg.contains("sfx/missing.wav"));
}

#[test]
fn reconcile_errors_name_the_clip_and_rates() {
    let msg = ReconcileError::ResampleUnavailable {
        name: "boom".into(),
        from: 22_050,
        to: 44_100,
    }
    .to_string();
    assert!(msg.contains("boom"));
    assert!(msg.contains("22050"));
    assert!(msg.contains("44100"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpriteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
