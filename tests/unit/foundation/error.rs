use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ReelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ReelError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        ReelError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        ReelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(
        ReelError::synthesis("title", "http 401").to_string(),
        "synthesis error for section 'title': http 401"
    );
}

#[test]
fn missing_input_names_the_path() {
    let err = ReelError::MissingInput(PathBuf::from("../voiceover.md"));
    assert_eq!(err.to_string(), "input file not found: ../voiceover.md");
}

#[test]
fn only_config_and_missing_input_are_fatal() {
    assert!(ReelError::config("no key").is_fatal());
    assert!(ReelError::MissingInput(PathBuf::from("x")).is_fatal());
    assert!(!ReelError::synthesis("title", "boom").is_fatal());
    assert!(!ReelError::evaluation("boom").is_fatal());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ReelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
