use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::PipelineOptions;
use crate::error::{Error, Result};

/// Run the whisper CLI on an audio file.
///
/// Ensures the output directory exists, invokes whisper with word-level
/// timestamps and JSON output, and returns the path of the transcript file
/// whisper is expected to have written (`<output_dir>/<audio stem>.json`).
///
/// Arguments are passed via `.arg()` with no shell in between. A non-zero
/// exit aborts the run; any file whisper managed to write stays on disk.
pub async fn run_whisper(audio: &Path, options: &PipelineOptions) -> Result<PathBuf> {
    if !audio.exists() {
        return Err(Error::AudioNotFound {
            path: audio.to_path_buf(),
        });
    }

    // Check whisper is installed before creating any directories
    let probe = tokio::process::Command::new(&options.whisper_bin)
        .arg("--help")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .output()
        .await;

    if probe.is_err() {
        return Err(Error::WhisperNotFound);
    }

    std::fs::create_dir_all(&options.output_dir)?;

    info!(
        audio = %audio.display(),
        model = %options.model,
        output_dir = %options.output_dir.display(),
        "running whisper transcription"
    );

    let output = tokio::process::Command::new(&options.whisper_bin)
        .args(whisper_args(audio, options))
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        // Limit error message length to avoid dumping huge stderr
        let stderr_truncated: String = stderr.chars().take(1000).collect();
        return Err(Error::WhisperFailed {
            code: output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".into()),
            stderr: stderr_truncated,
        });
    }

    let transcript = transcript_path(audio, &options.output_dir);
    debug!(path = %transcript.display(), "whisper finished");

    Ok(transcript)
}

/// The fixed whisper argument list: audio path first, then
/// `--model M --word_timestamps True --output_format json --language L
/// --output_dir D`. The `--word_timestamps True` spelling is what the
/// openai-whisper CLI expects.
fn whisper_args(audio: &Path, options: &PipelineOptions) -> Vec<OsString> {
    vec![
        audio.as_os_str().to_owned(),
        "--model".into(),
        options.model.clone().into(),
        "--word_timestamps".into(),
        "True".into(),
        "--output_format".into(),
        "json".into(),
        "--language".into(),
        options.language.clone().into(),
        "--output_dir".into(),
        options.output_dir.as_os_str().to_owned(),
    ]
}

/// Transcript path whisper will write: `<dir>/<audio stem>.json`.
pub fn transcript_path(audio: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(with_suffix(audio, ".json"))
}

/// Sibling timing path: `<dir>/<audio stem>-timing.json`.
pub fn timing_path(audio: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(with_suffix(audio, "-timing.json"))
}

fn with_suffix(audio: &Path, suffix: &str) -> OsString {
    let mut name = audio
        .file_stem()
        .unwrap_or_else(|| audio.as_os_str())
        .to_os_string();
    name.push(suffix);
    name
}
