use serde::{Deserialize, Serialize};

/// A transcript document as the whisper CLI writes it.
///
/// Only the fields this pipeline consumes are modeled; whatever else the
/// backend emits (full text, language, temperature, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Transcript {
    pub segments: Vec<Segment>,
}

/// A time-bounded chunk of transcribed speech.
#[derive(Debug, Clone, Deserialize)]
pub struct Segment {
    /// Word-level entries. Not every backend emits these for every
    /// segment, so absence is expected rather than an error.
    pub words: Option<Vec<WordEntry>>,
}

/// A single recognized word as whisper reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct WordEntry {
    /// Raw word text, often with a leading space.
    pub word: String,
    pub start: f64,
    pub end: f64,
    pub probability: Option<f64>,
}

/// The clean four-field projection of a [`WordEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTiming {
    /// Word text with surrounding whitespace trimmed.
    pub word: String,
    pub start: f64,
    pub end: f64,
    /// Recognition probability. 1.0 when the backend omitted it, which
    /// also means "no confidence data" is indistinguishable from perfect
    /// confidence in the output.
    pub confidence: f64,
}

impl Transcript {
    /// Total number of word entries across all segments.
    pub fn word_count(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|s| s.words.as_ref())
            .map(Vec::len)
            .sum()
    }
}
