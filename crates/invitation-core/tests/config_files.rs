//! Loading invitation configs from disk

use std::io::Write;

use invitation_core::{InvitationConfig, InvitationError};
use tempfile::{NamedTempFile, TempDir};

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_overrides_details_and_tracks() {
    let file = write_config(
        r#"{
            "details": { "city": "上海站", "city_subtitle": "SHANGHAI" },
            "tracks": [
                { "id": 7, "name": "K歌之王", "artist": "Eason Chan", "source": "songs/k.mp3" }
            ]
        }"#,
    );

    let config = InvitationConfig::load(file.path()).unwrap();

    assert_eq!(config.details.city, "上海站");
    assert_eq!(config.details.artist, "EASON CHAN");
    assert_eq!(config.tracks.len(), 1);
    assert_eq!(config.tracks[0].source, "songs/k.mp3");
    assert_eq!(config.catalog().unwrap().len(), 1);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invitation.json");

    let config = InvitationConfig::load_or_default(&path).unwrap();
    assert_eq!(config, InvitationConfig::default());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = InvitationConfig::load(&dir.path().join("nope.json"));
    assert!(matches!(result, Err(InvitationError::Io(_))));
}

#[test]
fn test_malformed_file_is_json_error() {
    let file = write_config("{ not json");
    let result = InvitationConfig::load(file.path());
    assert!(matches!(result, Err(InvitationError::Json(_))));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let file = write_config(r#"{ "timing": { "star_refresh_ms": 0 } }"#);
    let result = InvitationConfig::load(file.path());
    assert!(matches!(result, Err(InvitationError::InvalidConfig(_))));
}
