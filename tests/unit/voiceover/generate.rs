use std::cell::RefCell;
use std::path::Path;

use super::*;

struct FakeSynth {
    fail: &'static [&'static str],
    calls: RefCell<Vec<String>>,
}

impl FakeSynth {
    fn new(fail: &'static [&'static str]) -> Self {
        Self {
            fail,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Synthesizer for FakeSynth {
    fn voice_id(&self) -> &str {
        "fake-voice"
    }

    fn synthesize(&self, section: &str, text: &str) -> ReelResult<Vec<u8>> {
        self.calls.borrow_mut().push(section.to_string());
        if self.fail.contains(&section) {
            return Err(ReelError::synthesis(section, "http 500"));
        }
        Ok(format!("ID3{text}").into_bytes())
    }
}

const TRANSCRIPT: &str = "\
# Voiceover
## 🎬 TITLE SLIDE (0:00 - 0:15)
> Welcome to markview.
## 📊 STATS SLIDE (0:15 - 0:30)
> *(beat)*
> One hundred and eight prompts.
## 🏁 OUTRO SLIDE (4:55 - 5:00)
> Try it yourself.
";

fn config(dir: &Path) -> VoiceoverConfig {
    let transcript = dir.join("voiceover.md");
    std::fs::write(&transcript, TRANSCRIPT).unwrap();
    let mut cfg = VoiceoverConfig::new(Some("test-key".to_string())).unwrap();
    cfg.transcript_path = transcript;
    cfg.output_dir = dir.join("public").join("audio");
    cfg
}

#[test]
fn writes_one_file_per_section_and_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let synth = FakeSynth::new(&[]);

    let report = generate_voiceover(&cfg, &synth, GenerateOpts::default()).unwrap();
    assert!(report.all_succeeded());
    assert_eq!(report.written.len(), 3);
    for name in ["title", "stats", "outro"] {
        assert!(cfg.output_dir.join(format!("{name}.mp3")).is_file());
    }
    assert_eq!(*synth.calls.borrow(), ["title", "stats", "outro"]);

    let meta = VoiceoverMetadata::read(&report.metadata_path).unwrap();
    assert_eq!(meta.voice, "fake-voice");
    let names: Vec<_> = meta.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["title", "stats", "outro"]);
    assert_eq!(meta.sections[2].start_frame, 8850);
}

#[test]
fn failed_section_is_skipped_and_run_continues() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let synth = FakeSynth::new(&["stats"]);

    let report = generate_voiceover(&cfg, &synth, GenerateOpts::default()).unwrap();
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "stats");
    assert!(!cfg.output_dir.join("stats.mp3").exists());
    assert!(cfg.output_dir.join("outro.mp3").is_file());

    // Metadata still lists every parsed section.
    let meta = VoiceoverMetadata::read(&report.metadata_path).unwrap();
    assert_eq!(meta.sections.len(), 3);
}

#[test]
fn missing_transcript_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(dir.path());
    cfg.transcript_path = dir.path().join("nope.md");
    let synth = FakeSynth::new(&[]);

    let err = generate_voiceover(&cfg, &synth, GenerateOpts::default()).unwrap_err();
    assert!(matches!(err, ReelError::MissingInput(_)));
    assert!(err.is_fatal());
    assert!(synth.calls.borrow().is_empty());
    assert!(!cfg.output_dir.exists());
}

#[test]
fn dry_run_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    let synth = FakeSynth::new(&[]);

    let opts = GenerateOpts {
        dry_run: true,
        ..GenerateOpts::default()
    };
    let report = generate_voiceover(&cfg, &synth, opts).unwrap();
    assert_eq!(report.sections.len(), 3);
    assert!(report.written.is_empty());
    assert!(synth.calls.borrow().is_empty());
    assert!(!cfg.output_dir.exists());
    assert_eq!(
        report.total_chars,
        "Welcome to markview.One hundred and eight prompts.Try it yourself.".len()
    );
}

#[test]
fn existing_output_dir_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    std::fs::create_dir_all(&cfg.output_dir).unwrap();
    std::fs::write(cfg.output_dir.join("title.mp3"), b"old").unwrap();

    generate_voiceover(&cfg, &FakeSynth::new(&[]), GenerateOpts::default()).unwrap();
    let bytes = std::fs::read(cfg.output_dir.join("title.mp3")).unwrap();
    assert!(bytes.starts_with(b"ID3"));
}
