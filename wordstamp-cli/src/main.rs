use std::path::PathBuf;

use clap::Parser;
use wordstamp::PipelineOptions;

#[derive(Parser)]
#[command(
    name = "wordstamp",
    about = "Transcribe an audio file with whisper and extract word-level timing"
)]
struct Cli {
    /// Audio file to process.
    audio: PathBuf,

    /// Directory for the transcript and timing files.
    #[arg(short, long, default_value = "processed")]
    output_dir: PathBuf,

    /// Whisper model to use.
    #[arg(short, long, default_value = "medium")]
    model: String,

    /// Language code passed to whisper.
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Whisper executable (name on PATH or full path).
    #[arg(long, default_value = "whisper")]
    whisper_bin: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wordstamp=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = PipelineOptions::new()
        .whisper_bin(cli.whisper_bin)
        .model(cli.model)
        .language(cli.language)
        .output_dir(cli.output_dir);

    let report = match wordstamp::process_file_with_options(&cli.audio, &options).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("Processed {} words", report.words);
    println!("Clean timing saved to: {}", report.timing_path.display());
}
