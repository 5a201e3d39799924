use super::*;

fn touch(dir: &Path, name: &str) -> PathBuf {
    let p = dir.join(name);
    std::fs::write(&p, b"").unwrap();
    p
}

fn pattern(dir: &Path, tail: &str) -> String {
    dir.join(tail).to_string_lossy().into_owned()
}

#[test]
fn patterns_keep_order_and_sort_each_expansion() {
    let dir = tempfile::tempdir().unwrap();
    let b = touch(dir.path(), "b.wav");
    let a = touch(dir.path(), "a.wav");
    let z = touch(dir.path(), "z.raw");

    let out = expand_inputs(&[pattern(dir.path(), "z.raw"), pattern(dir.path(), "*.wav")]).unwrap();
    assert_eq!(out, vec![z, a, b]);
}

#[test]
fn unmatched_pattern_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.wav");
    let err = expand_inputs(&[pattern(dir.path(), "*.ogg")]).unwrap_err();
    assert!(err.to_string().contains("no files matched pattern"));
}

#[test]
fn literal_name_with_metacharacters_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let odd = touch(dir.path(), "take[1].wav");
    let out = expand_inputs(&[odd.to_string_lossy().into_owned()]).unwrap();
    assert_eq!(out, vec![odd]);
}

#[test]
fn overlapping_patterns_are_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "a.wav");
    let err = expand_inputs(&[pattern(dir.path(), "a.wav"), pattern(dir.path(), "*.wav")])
        .unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn no_patterns_is_no_clips() {
    let err = expand_inputs::<&str>(&[]).unwrap_err();
    assert!(matches!(err, SpriteError::Assembly(AssemblyError::NoClips)));
}

#[test]
fn invalid_pattern_is_rejected() {
    let err = expand_inputs(&["[unclosed"]).unwrap_err();
    assert!(err.to_string().contains("invalid pattern"));
}
