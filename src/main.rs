use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use crossterm::tty::IsTty;
use songsort::metadata::LoftyMetadataProvider;
use songsort::organize::organize;
use songsort::progress::{ConsoleReporter, PlainReporter, ProgressReporter};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sort audio files into Artist/Year - Album folders by their tags",
    long_about = None
)]
struct Cli {
    /// Directory scanned recursively for files to organize
    source_dir: String,
    /// Library root that receives the organized files
    target_dir: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        eprintln!("{}", Cli::command().render_usage());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let source = PathBuf::from(shellexpand::tilde(&cli.source_dir).into_owned());
    let target = PathBuf::from(shellexpand::tilde(&cli.target_dir).into_owned());

    if !source.is_dir() {
        bail!("source directory does not exist: {}", source.display());
    }
    println!("Will read all files from {}", source.display());

    println!("Will output to {}", target.display());
    if !target.exists() {
        println!("{} does not exist, attempting to create...", target.display());
        fs::create_dir_all(&target).with_context(|| {
            format!("failed to create target directory '{}'", target.display())
        })?;
        println!("{} created", target.display());
    }

    let provider = LoftyMetadataProvider::new();
    let mut reporter: Box<dyn ProgressReporter> = if io::stdout().is_tty() {
        Box::new(ConsoleReporter::new())
    } else {
        Box::new(PlainReporter)
    };

    // Per-file failures are already accounted for in the summary; the run
    // still exits 0 so the operator can fix causes and re-run.
    organize(&source, &target, &provider, reporter.as_mut())?;

    Ok(())
}
