use std::path::PathBuf;

/// Options for a pipeline run.
///
/// The defaults reproduce the canonical invocation: the `whisper` binary on
/// PATH, the `medium` model, English, output under `processed/`. Override
/// them when the environment differs (e.g. a stub binary in tests).
pub struct PipelineOptions {
    /// Name or path of the whisper executable.
    pub whisper_bin: String,
    /// Whisper model size passed as `--model`.
    pub model: String,
    /// Language code passed as `--language`.
    pub language: String,
    /// Directory receiving both the transcript and the timing file.
    pub output_dir: PathBuf,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            whisper_bin: "whisper".into(),
            model: "medium".into(),
            language: "en".into(),
            output_dir: PathBuf::from("processed"),
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn whisper_bin(mut self, bin: impl Into<String>) -> Self {
        self.whisper_bin = bin.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
