/// Nominal placement of one narrated section, keyed by the transcript header keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionSpec {
    /// Upper-case keyword as it appears in `## ... <KEYWORD> SLIDE` headers.
    pub keyword: &'static str,
    /// Canonical section name, also the audio file stem.
    pub name: &'static str,
    /// Nominal start, whole seconds.
    pub start_secs: u32,
    /// Nominal duration, whole seconds.
    pub duration_secs: u32,
}

/// Keyword table in presentation order.
pub static SECTION_TABLE: [SectionSpec; 9] = [
    SectionSpec {
        keyword: "TITLE",
        name: "title",
        start_secs: 0,
        duration_secs: 15,
    },
    SectionSpec {
        keyword: "STATS",
        name: "stats",
        start_secs: 15,
        duration_secs: 15,
    },
    SectionSpec {
        keyword: "FIRST PROMPT",
        name: "firstPrompt",
        start_secs: 30,
        duration_secs: 45,
    },
    SectionSpec {
        keyword: "ITERATION",
        name: "iteration",
        start_secs: 75,
        duration_secs: 60,
    },
    SectionSpec {
        keyword: "DIFFICULTIES",
        name: "difficulties",
        start_secs: 135,
        duration_secs: 45,
    },
    SectionSpec {
        keyword: "FEATURES",
        name: "features",
        start_secs: 180,
        duration_secs: 60,
    },
    SectionSpec {
        keyword: "PUBLISH",
        name: "publish",
        start_secs: 240,
        duration_secs: 30,
    },
    SectionSpec {
        keyword: "LESSONS",
        name: "lessons",
        start_secs: 270,
        duration_secs: 25,
    },
    SectionSpec {
        keyword: "OUTRO",
        name: "outro",
        start_secs: 295,
        duration_secs: 5,
    },
];

/// Find the table entry for an already upper-cased, trimmed keyword.
pub fn lookup(keyword: &str) -> Option<&'static SectionSpec> {
    SECTION_TABLE.iter().find(|s| s.keyword == keyword)
}
