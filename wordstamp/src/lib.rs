pub mod config;
pub mod error;
pub mod extract;
pub mod types;
pub mod whisper;

pub use config::PipelineOptions;
pub use error::{Error, Result};
pub use types::{Segment, Transcript, WordEntry, WordTiming};

use std::path::{Path, PathBuf};

use tracing::info;

/// What a completed pipeline run produced.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Number of timing records written.
    pub words: usize,
    /// Whisper's raw transcript JSON.
    pub transcript_path: PathBuf,
    /// The clean timing JSON, the final artifact.
    pub timing_path: PathBuf,
}

/// Run the full pipeline on an audio file with default options.
pub async fn process_file(audio: impl AsRef<Path>) -> Result<PipelineReport> {
    process_file_with_options(audio, &PipelineOptions::default()).await
}

/// Run the full pipeline: whisper transcription, then word-timing
/// extraction into `<stem>-timing.json` next to the transcript.
///
/// The two steps are strictly sequential; if whisper fails nothing is
/// extracted and no timing file is written.
pub async fn process_file_with_options(
    audio: impl AsRef<Path>,
    options: &PipelineOptions,
) -> Result<PipelineReport> {
    let audio = audio.as_ref();

    let transcript_path = whisper::run_whisper(audio, options).await?;
    let timing_path = whisper::timing_path(audio, &options.output_dir);

    let transcript = extract::load_transcript(&transcript_path)?;
    let records = extract::extract_words(&transcript);
    extract::save_timings(&records, &timing_path)?;

    info!(
        words = records.len(),
        timing = %timing_path.display(),
        "pipeline complete"
    );

    Ok(PipelineReport {
        words: records.len(),
        transcript_path,
        timing_path,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Write an executable stand-in for the whisper binary.
    fn write_stub(dir: &Path, body: &str) -> PathBuf {
        std::fs::create_dir_all(dir).unwrap();
        let path = dir.join("whisper-stub");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    async fn test_pipeline_end_to_end_with_stub() {
        let scratch = std::env::temp_dir().join("wordstamp_pipeline_ok");
        std::fs::remove_dir_all(&scratch).ok();
        let out_dir = scratch.join("out");

        let audio = scratch.join("talk.wav");
        std::fs::create_dir_all(&scratch).unwrap();
        std::fs::write(&audio, b"").unwrap();

        // Stub writes the transcript whisper would have produced.
        let transcript = r#"{"segments": [
            {"words": [{"word": " Hi ", "start": 0.0, "end": 0.3, "probability": 0.95}]},
            {"text": "no words field"}
        ]}"#;
        let stub = write_stub(
            &scratch,
            &format!(
                "mkdir -p {out}\ncat > {out}/talk.json <<'EOF'\n{transcript}\nEOF",
                out = out_dir.display()
            ),
        );

        let options = PipelineOptions::new()
            .whisper_bin(stub.to_str().unwrap())
            .output_dir(&out_dir);
        let report = process_file_with_options(&audio, &options).await.unwrap();

        assert_eq!(report.words, 1);
        assert_eq!(report.timing_path, out_dir.join("talk-timing.json"));

        let raw = std::fs::read_to_string(&report.timing_path).unwrap();
        let records: Vec<WordTiming> = serde_json::from_str(&raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word, "Hi");
        assert_eq!(records[0].confidence, 0.95);

        std::fs::remove_dir_all(&scratch).ok();
    }

    #[tokio::test]
    async fn test_pipeline_whisper_failure_writes_no_timing_file() {
        let scratch = std::env::temp_dir().join("wordstamp_pipeline_fail");
        std::fs::remove_dir_all(&scratch).ok();
        let out_dir = scratch.join("out");

        let audio = scratch.join("talk.wav");
        std::fs::create_dir_all(&scratch).unwrap();
        std::fs::write(&audio, b"").unwrap();

        let stub = write_stub(&scratch, "exit 1");

        let options = PipelineOptions::new()
            .whisper_bin(stub.to_str().unwrap())
            .output_dir(&out_dir);
        let err = process_file_with_options(&audio, &options)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::WhisperFailed { .. }));
        assert!(!out_dir.join("talk-timing.json").exists());

        std::fs::remove_dir_all(&scratch).ok();
    }
}
