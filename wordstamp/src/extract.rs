use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Transcript, WordTiming};

/// Project a transcript down to its flat word-timing sequence.
///
/// Pure — no I/O. Record order follows document order; segments without a
/// word list contribute nothing. Word text is whitespace-trimmed and a
/// missing probability becomes confidence 1.0.
pub fn extract_words(transcript: &Transcript) -> Vec<WordTiming> {
    let mut records = Vec::with_capacity(transcript.word_count());

    for segment in &transcript.segments {
        let Some(words) = &segment.words else {
            continue;
        };
        for entry in words {
            records.push(WordTiming {
                word: entry.word.trim().to_string(),
                start: entry.start,
                end: entry.end,
                confidence: entry.probability.unwrap_or(1.0),
            });
        }
    }

    records
}

/// Read and parse a whisper transcript JSON file.
///
/// Invalid JSON and documents without a `segments` array both surface as
/// [`Error::MalformedTranscript`]; an unreadable file is an I/O error.
pub fn load_transcript(path: &Path) -> Result<Transcript> {
    let raw = std::fs::read_to_string(path)?;
    let transcript: Transcript =
        serde_json::from_str(&raw).map_err(|e| Error::MalformedTranscript {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(
        path = %path.display(),
        segments = transcript.segments.len(),
        "transcript loaded"
    );
    Ok(transcript)
}

/// Write timing records as a pretty-printed JSON array, overwriting any
/// existing file at `path`.
pub fn save_timings(records: &[WordTiming], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;

    debug!(path = %path.display(), records = records.len(), "timing file written");
    Ok(())
}
