//! CLI entrypoint for podlens
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use podlens_application::{AnswerService, QueryDispatcher};
use podlens_domain::OverlapPolicy;
use podlens_infrastructure::{ConfigLoader, FileConfig, WolframAlphaClient};
use podlens_presentation::{Cli, ConsoleDisplay, OutputConfig, ReplConfig, run_chat};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    info!("Starting podlens");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration from files (unless --no-config)
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    apply_cli_overrides(&cli, &mut config);

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
        eprintln!("warning: {}", issue.message);
    }
    let errors: Vec<_> = issues.iter().filter(|i| i.is_error()).collect();
    if !errors.is_empty() {
        for issue in &errors {
            eprintln!("error: {}", issue.message);
        }
        bail!("Invalid configuration ({} error(s))", errors.len());
    }

    let output = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color,
        show_progress: config.repl.show_progress && !cli.quiet,
    };
    output.apply_color_preference();

    // === Dependency Injection ===
    let client: Arc<dyn AnswerService> = Arc::new(
        WolframAlphaClient::new(config.service.to_settings())
            .context("Failed to build HTTP client")?,
    );
    let display = ConsoleDisplay::new(output.format).with_progress(output.show_progress);
    let params = config.query_params();

    if cli.is_interactive() {
        let repl_config = ReplConfig {
            history_file: config.repl.history_file.clone(),
        };
        run_chat(client, params, display, repl_config.history_path()).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let dispatcher = QueryDispatcher::new(client, Arc::new(display)).with_params(params);
    let question = cli.question.clone().unwrap_or_default();
    Ok(run_once(dispatcher, question).await)
}

/// Ask a single question; success only when the service answered
async fn run_once(mut dispatcher: QueryDispatcher, question: String) -> ExitCode {
    if let Err(e) = dispatcher.submit(question) {
        info!("Submission refused: {}", e);
        return ExitCode::FAILURE;
    }

    match dispatcher.settle().await {
        Some(outcome) if outcome.is_answered() => ExitCode::SUCCESS,
        Some(outcome) => {
            info!("Query finished without an answer: {:?}", outcome);
            ExitCode::FAILURE
        }
        None => ExitCode::FAILURE,
    }
}

/// Command-line flags take precedence over every config source
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(app_id) = &cli.app_id {
        config.service.app_id = Some(app_id.clone());
    }
    if !cli.formats.is_empty() {
        config.service.formats = cli.formats.clone();
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if cli.allow_overlap {
        config.query.overlap_policy = OverlapPolicy::Allow.as_str().to_string();
    }
    if cli.reject_blank {
        config.query.reject_blank = true;
    }
}

/// Initialize logging based on verbosity level, optionally mirrored to a
/// daily rolling file
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "podlens.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
