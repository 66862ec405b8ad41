use super::*;

fn section(name: &str, start: u32, dur: u32) -> Section {
    Section {
        name: name.to_string(),
        text: "x".to_string(),
        start_secs: start,
        duration_secs: dur,
    }
}

#[test]
fn frames_are_seconds_times_thirty() {
    let fps = Fps::new(30, 1).unwrap();
    let meta = VoiceoverMetadata::build(
        "voice",
        &[section("title", 0, 15), section("outro", 295, 5)],
        fps,
    );
    assert_eq!(meta.sections[0].start_frame, 0);
    assert_eq!(meta.sections[0].duration_frames, 450);
    assert_eq!(meta.sections[1].start_frame, 8850);
    assert_eq!(meta.sections[1].duration_frames, 150);
    assert_eq!(meta.sections[1].file, "outro.mp3");
}

#[test]
fn json_uses_camel_case_keys_and_rfc3339_timestamp() {
    let fps = Fps::new(30, 1).unwrap();
    let meta = VoiceoverMetadata::build("v1", &[section("firstPrompt", 30, 45)], fps);
    let json = serde_json::to_value(&meta).unwrap();
    assert_eq!(json["voice"], "v1");
    assert_eq!(json["sections"][0]["name"], "firstPrompt");
    assert_eq!(json["sections"][0]["startFrame"], 900);
    assert_eq!(json["sections"][0]["durationFrames"], 1350);
    let ts = json["generatedAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    assert!(ts.ends_with('Z'));
}

#[test]
fn write_then_read_preserves_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metadata.json");
    let fps = Fps::new(30, 1).unwrap();
    let meta = VoiceoverMetadata::build("v", &[section("stats", 15, 15)], fps);
    meta.write(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'), "metadata should be pretty-printed");
    assert_eq!(VoiceoverMetadata::read(&path).unwrap(), meta);
}

#[test]
fn read_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metadata.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        VoiceoverMetadata::read(&path),
        Err(ReelError::Serde(_))
    ));
}
