use dictate::domain::{sanitize_filename, AudioFormat};

#[test]
fn given_allowed_extensions_when_checking_filename_then_all_accepted() {
    for name in [
        "clip.wav",
        "clip.mp3",
        "clip.m4a",
        "clip.flac",
        "clip.ogg",
        "clip.aac",
    ] {
        assert!(
            AudioFormat::from_filename(name).is_some(),
            "{name} should be accepted"
        );
    }
}

#[test]
fn given_uppercase_extension_when_checking_filename_then_accepted() {
    assert_eq!(AudioFormat::from_filename("CLIP.WAV"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_filename("clip.Mp3"), Some(AudioFormat::Mp3));
}

#[test]
fn given_disallowed_extension_when_checking_filename_then_rejected() {
    assert_eq!(AudioFormat::from_filename("notes.txt"), None);
    assert_eq!(AudioFormat::from_filename("archive.tar.gz"), None);
    assert_eq!(AudioFormat::from_filename("clip.mp3.txt"), None);
}

#[test]
fn given_filename_without_dot_when_checking_then_rejected() {
    assert_eq!(AudioFormat::from_filename("noextension"), None);
    assert_eq!(AudioFormat::from_filename(""), None);
}

#[test]
fn given_trailing_dot_when_checking_filename_then_rejected() {
    assert_eq!(AudioFormat::from_filename("clip."), None);
}

#[test]
fn given_only_extension_when_checking_filename_then_suffix_decides() {
    // Mirrors the allow-list contract: only the suffix after the last dot
    // matters, even with an empty stem.
    assert_eq!(AudioFormat::from_filename(".wav"), Some(AudioFormat::Wav));
}

#[test]
fn given_format_when_asking_extension_and_mime_then_consistent() {
    for format in [
        AudioFormat::Wav,
        AudioFormat::Mp3,
        AudioFormat::M4a,
        AudioFormat::Flac,
        AudioFormat::Ogg,
        AudioFormat::Aac,
    ] {
        assert_eq!(AudioFormat::from_extension(format.as_str()), Some(format));
        assert!(format.mime_type().starts_with("audio/"));
    }
}

#[test]
fn given_path_components_when_sanitizing_then_only_basename_survives() {
    assert_eq!(sanitize_filename("../../etc/evil.wav"), "evil.wav");
    assert_eq!(sanitize_filename("dir\\sub\\clip.mp3"), "clip.mp3");
    assert_eq!(sanitize_filename("/absolute/clip.ogg"), "clip.ogg");
}

#[test]
fn given_unsafe_characters_when_sanitizing_then_stripped() {
    assert_eq!(sanitize_filename("my clip!.wav"), "myclip.wav");
    assert_eq!(sanitize_filename("a;b|c.mp3"), "abc.mp3");
}

#[test]
fn given_dot_only_names_when_sanitizing_then_falls_back_to_default() {
    assert_eq!(sanitize_filename(".."), "upload");
    assert_eq!(sanitize_filename("..."), "upload");
    assert_eq!(sanitize_filename(""), "upload");
}

#[test]
fn given_hidden_file_name_when_sanitizing_then_leading_dot_removed() {
    assert_eq!(sanitize_filename(".hidden.wav"), "hidden.wav");
}

#[test]
fn given_clean_name_when_sanitizing_then_unchanged() {
    assert_eq!(sanitize_filename("recording_01-final.flac"), "recording_01-final.flac");
}
