//! Precis — summarize a document into a short summary, keywords and points.

use tracing::info;
use tracing_subscriber::EnvFilter;

mod input;

use input::Source;
use precis_core::{Error, SummarizerConfig};
use precis_extract::{Summarizer, SummaryResponse, validate_document};

fn print_help() {
    println!("Precis — extractive summarizer");
    println!();
    println!("Usage: precis [FILE]");
    println!();
    println!("Reads FILE (or stdin when FILE is absent or '-') and prints a JSON");
    println!("object with summary, keywords, points, metrics and mode.");
    println!();
    println!("Environment:");
    println!("  PRECIS_MAX_POINTS          Sentences in the summary (default 4)");
    println!("  PRECIS_MAX_KEYWORDS        Keywords returned (default 6)");
    println!("  PRECIS_MIN_SENTENCE_CHARS  Sentence length threshold (default 30)");
    println!("  PRECIS_MIN_WORD_CHARS      Word length threshold (default 3)");
    println!("  PRECIS_MIN_INPUT_CHARS     Minimum document length (default 100)");
    println!("  RUST_LOG                   Log filter, logs go to stderr (default warn)");
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let path = match args.get(1).map(String::as_str) {
        Some("--help" | "-h" | "help") => {
            print_help();
            return Ok(());
        }
        Some(arg) if arg.starts_with('-') && arg != "-" => {
            eprintln!("Unknown option: {}. Use 'precis help' for usage.", arg);
            std::process::exit(1);
        }
        other => other,
    };
    if args.len() > 2 {
        eprintln!("Too many arguments. Use 'precis help' for usage.");
        std::process::exit(1);
    }

    let config = SummarizerConfig::from_env()?;
    let source = Source::from_arg(path);
    let text = input::read_document(&source)?;

    match validate_document(&text, config.min_input_chars) {
        Ok(()) => {}
        Err(e @ Error::InputTooShort { .. }) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    }

    let summarizer = Summarizer::new(config);
    let summary = summarizer.summarize(&text);
    let response = SummaryResponse::from_summary(&text, summary);

    info!(
        "Summarized {} words into {} ({}% compression)",
        response.metrics.original_word_count,
        response.metrics.summary_word_count,
        response.metrics.compression_ratio
    );

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
