use std::sync::LazyLock;

use regex::Regex;

use crate::script::sections;

/// A narrated section extracted from the voiceover transcript.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Section {
    /// Canonical section name (see [`sections::SECTION_TABLE`]).
    pub name: String,
    /// Narration with whitespace collapsed to single spaces.
    pub text: String,
    /// Nominal start, whole seconds.
    pub start_secs: u32,
    /// Nominal duration, whole seconds.
    pub duration_secs: u32,
}

/// Result of [`parse_transcript`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranscriptParse {
    /// Recognized sections sorted by nominal start.
    pub sections: Vec<Section>,
    /// Slide header keywords that matched no table entry, in discovery order.
    pub unknown_keywords: Vec<String>,
}

impl TranscriptParse {
    /// Total narration characters across all sections.
    pub fn total_chars(&self) -> usize {
        self.sections.iter().map(|s| s.text.chars().count()).sum()
    }
}

// Optional leading token (usually an emoji), then the upper-case keyword right before "SLIDE".
static SLIDE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^## (?:.+? )??([A-Z][A-Z\s]+?) SLIDE").expect("slide header regex is valid")
});

#[derive(Debug)]
struct RawSection {
    keyword: String,
    lines: Vec<String>,
}

/// Split a markdown voiceover transcript into narrated sections.
///
/// Slide headers (`## <emoji> <KEYWORD> SLIDE (<timecode>)`) open a section, `>` lines add
/// narration, and any other `## ` header closes the open section. Quoted lines starting with `*`
/// or `(` are stage directions and are dropped. Unknown keywords are logged and skipped.
#[tracing::instrument(skip(content), fields(bytes = content.len()))]
pub fn parse_transcript(content: &str) -> TranscriptParse {
    let mut raw: Vec<RawSection> = Vec::new();
    let mut current: Option<RawSection> = None;

    for line in content.lines() {
        if line.starts_with("## ") {
            if let Some(done) = current.take() {
                merge_raw(&mut raw, done);
            }
            if !line.contains("SLIDE") {
                continue;
            }
            match extract_keyword(line) {
                Some(keyword) => {
                    current = Some(RawSection {
                        keyword,
                        lines: Vec::new(),
                    });
                }
                None => tracing::warn!(header = line, "slide header without a keyword; skipping"),
            }
        } else if let Some(open) = current.as_mut()
            && let Some(quoted) = line.strip_prefix('>')
        {
            open.lines.push(quoted.trim().to_string());
        }
    }
    if let Some(done) = current.take() {
        merge_raw(&mut raw, done);
    }

    let mut out = TranscriptParse::default();
    for section in raw {
        let Some(spec) = sections::lookup(&section.keyword) else {
            tracing::warn!(keyword = %section.keyword, "unknown transcript section; skipping");
            out.unknown_keywords.push(section.keyword);
            continue;
        };
        let text = narration_text(&section.lines);
        if text.is_empty() {
            tracing::debug!(section = spec.name, "section has no narration; skipping");
            continue;
        }
        out.sections.push(Section {
            name: spec.name.to_string(),
            text,
            start_secs: spec.start_secs,
            duration_secs: spec.duration_secs,
        });
    }

    out.sections.sort_by_key(|s| s.start_secs);
    out
}

fn extract_keyword(header: &str) -> Option<String> {
    let caps = SLIDE_HEADER.captures(header)?;
    let keyword = caps.get(1)?.as_str().trim().to_uppercase();
    if keyword.is_empty() {
        None
    } else {
        Some(keyword)
    }
}

// A keyword seen twice keeps one section; later narration is appended.
fn merge_raw(raw: &mut Vec<RawSection>, section: RawSection) {
    match raw.iter_mut().find(|r| r.keyword == section.keyword) {
        Some(existing) => existing.lines.extend(section.lines),
        None => raw.push(section),
    }
}

fn is_stage_direction(line: &str) -> bool {
    line.starts_with('*') || line.starts_with('(')
}

fn narration_text(lines: &[String]) -> String {
    let kept = lines
        .iter()
        .map(|l| l.as_str())
        .filter(|l| !l.is_empty() && !is_stage_direction(l))
        .collect::<Vec<_>>()
        .join(" ");
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/script/transcript.rs"]
mod tests;
