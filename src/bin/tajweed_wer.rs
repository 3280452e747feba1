//! `tajweed-wer` command line: score, batch-score and normalize recitations.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Parser;
use tajweed_wer::report::{read_requests, write_json};
use tajweed_wer::{
    calculate_wer_batch, calculate_wer_with, normalize_arabic_with, WerConfig, WerError, WerReport,
};
use tracing_subscriber::EnvFilter;

/// Word error rate scoring for Quran recitation transcripts.
#[derive(Parser)]
#[command(name = "tajweed-wer", version)]
enum Opts {
    /// Align one transcript against its verse and print the JSON report.
    Score {
        #[clap(short, long)]
        expected: String,
        #[clap(short, long)]
        transcribed: String,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Score a JSON array of `{ "expected", "transcribed" }` objects.
    Batch {
        input: PathBuf,
        /// Defaults to stdout.
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the normalized form of a text.
    Normalize {
        text: String,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<WerConfig, WerError> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading WER config");
            WerConfig::load(path)
        }
        None => Ok(WerConfig::default()),
    }
}

fn main() -> Result<(), WerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Opts::parse() {
        Opts::Score {
            expected,
            transcribed,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let result = calculate_wer_with(&expected, &transcribed, &config.normalizer);
            write_json(std::io::stdout().lock(), &WerReport::from(result))
        }
        Opts::Batch {
            input,
            output,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let requests = read_requests(&input)?;
            let reports: Vec<WerReport> = calculate_wer_batch(&requests, &config.normalizer)
                .into_iter()
                .map(WerReport::from)
                .collect();
            tracing::info!(count = reports.len(), input = %input.display(), "scored batch");

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .map_err(|e| WerError::io("create batch output", e))?;
                    write_json(BufWriter::new(file), &reports)
                }
                None => write_json(std::io::stdout().lock(), &reports),
            }
        }
        Opts::Normalize { text, config } => {
            let config = load_config(config.as_deref())?;
            println!("{}", normalize_arabic_with(&text, &config.normalizer));
            Ok(())
        }
    }
}
