//! lookout — LLM-backed code quality watcher.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use lookout::analyzer::FileAnalyzer;
use lookout::client::http::HttpTransport;
use lookout::client::LlmClient;
use lookout::config::Config;
use lookout::env::Env;
use lookout::journal::Journal;
use lookout::output;
use lookout::reviewer::ProjectReviewer;
use lookout::watcher;

use cli::args::{Cli, Command, ScanArgs, WatchArgs};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Scan(args)) => run_scan(args).await,
        Some(Command::Watch(args)) => run_watch(args).await,
        None => run_watch(WatchArgs::default()).await,
    }
}

/// Resolve the project root and load the layered configuration.
fn setup(path: &Path) -> Result<(PathBuf, Config)> {
    let root = std::fs::canonicalize(path)
        .with_context(|| format!("--path directory not found: {}", path.display()))?;
    let config = Config::load(Some(&root), &Env::real())
        .context("failed to load configuration")?;
    Ok((root, config))
}

/// Build the shared LLM client from the provider configuration.
fn build_client(config: &Config) -> Result<Arc<LlmClient>> {
    let transport = HttpTransport::new(&config.provider).map_err(|e| anyhow!("{e}"))?;
    Ok(Arc::new(LlmClient::new(
        Arc::new(transport),
        config.provider.max_retries,
    )))
}

/// Watch the project and review every matching create/modify event.
/// Runs until interrupted.
async fn run_watch(args: WatchArgs) -> Result<()> {
    let (root, config) = setup(&args.path)?;
    let client = build_client(&config)?;
    let journal = Journal::new(root.join(&config.notes.path));

    let analyzer = Arc::new(FileAnalyzer::new(
        client,
        journal,
        config.filters.analysis.clone(),
        root.clone(),
    ));

    cli::print_banner(&root, &config.provider.model, &config.provider.host);

    let handle = watcher::start(&root, config.filters.analysis, analyzer)
        .context("failed to start watching")?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for interrupt")?;

    handle.stop();
    output::print_status("stopped");
    Ok(())
}

/// Run a one-shot project-wide review, then exit.
async fn run_scan(args: ScanArgs) -> Result<()> {
    let (root, config) = setup(&args.path)?;
    let client = build_client(&config)?;
    let journal = Journal::new(root.join(&config.notes.path));

    let reviewer = ProjectReviewer::new(client, journal, config.filters.project.clone(), root);

    reviewer.review().await.context("project scan failed")?;
    Ok(())
}
