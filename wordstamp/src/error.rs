use std::path::PathBuf;

/// All errors that can occur in wordstamp.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("whisper not found — install with: pip install openai-whisper")]
    WhisperNotFound,

    #[error("whisper exited with {code}: {stderr}")]
    WhisperFailed {
        /// Exit code, or "signal" when the child was killed.
        code: String,
        stderr: String,
    },

    #[error("audio file not found: {path}")]
    AudioNotFound { path: PathBuf },

    #[error("malformed transcript {path}: {message}")]
    MalformedTranscript { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
