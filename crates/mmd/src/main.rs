//! mmd CLI - Mermaid post-processor for Pandoc HTML.
//!
//! Rewrites `<pre class="mermaid">` code blocks in a generated HTML file
//! into `<div class="mermaid">` containers and injects the Mermaid loader
//! script and diagram styles. The file is overwritten in place.

mod error;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use error::CliError;
use output::Output;

/// Mermaid post-processor for Pandoc HTML.
#[derive(Parser)]
#[command(name = "mmd", version, about)]
struct Cli {
    /// HTML file to rewrite in place.
    #[arg(default_value = "design.html")]
    file: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(&cli, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, output: &Output) -> Result<(), CliError> {
    mmd_rewrite::process_file(&cli.file)?;
    output.success(&format!(
        "Successfully processed {} with Mermaid JS",
        cli.file.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_defaults_to_design_html() {
        let cli = Cli::parse_from(["mmd"]);
        assert_eq!(cli.file, PathBuf::from("design.html"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_accepts_explicit_file() {
        let cli = Cli::parse_from(["mmd", "out/report.html", "--verbose"]);
        assert_eq!(cli.file, PathBuf::from("out/report.html"));
        assert!(cli.verbose);
    }
}
