// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Build a GithubRepoLoader and run load()
// 4. Print the documents and exit with a proper code
//    (0 = documents loaded, 1 = nothing loaded, 2 = error)
//
// Rust concepts used:
// - async/await: the clone runs as a child process we wait on
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use repo_loader::{Document, GithubRepoLoader};
use tracing_subscriber::EnvFilter;

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = at least one document loaded
//   Ok(1) = load finished but produced nothing
//   Err   = anything fatal
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let repo_url = cli.repo_url.clone();
    let json = cli.json;
    let config = cli.into_config().context("Invalid ignore pattern")?;

    let loader = GithubRepoLoader::new(&repo_url, config)?;
    eprintln!("🔍 Loading repository: {}", loader.coordinate().full_name());

    let documents = loader.load().await?;

    print_documents(&documents, json)?;

    if documents.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}

// RUST_LOG wins; otherwise info, or debug with --verbose
fn init_logging(verbose: bool) {
    let default = if verbose {
        "repo_loader=debug"
    } else {
        "repo_loader=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Prints the documents either as a table or JSON
fn print_documents(documents: &[Document], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(documents)?;
        println!("{}", json_output);
    } else {
        print_table(documents);
    }
    Ok(())
}

fn print_table(documents: &[Document]) {
    println!("{:<70} {:>12}", "SOURCE", "BYTES");
    println!("{}", "=".repeat(83));

    for document in documents {
        let source = document.source();
        // Keep long paths inside the column
        let source_display = if source.chars().count() > 67 {
            let tail: String = source
                .chars()
                .rev()
                .take(64)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{}", tail)
        } else {
            source.to_string()
        };

        println!("{:<70} {:>12}", source_display, document.content.len());
    }

    println!();

    let total_bytes: usize = documents.iter().map(|d| d.content.len()).sum();
    println!("📊 Summary:");
    println!("   📄 Documents: {}", documents.len());
    println!("   📦 Bytes: {}", total_bytes);
}
