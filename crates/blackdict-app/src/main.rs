use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use blackdict_config::{Config, LogFormat, OutputFormat};
use blackdict_types::Language;
use clap::Parser;
use tokio::io::{AsyncBufRead, BufReader};
use tokio::signal;

pub mod controller;
pub mod events;
pub mod logging;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "blackdict", version, about = "Look words up in the Free Dictionary API")]
struct Args {
    /// JSON profile to load instead of environment defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initially selected language code (en, es, fr, ...)
    #[arg(short, long)]
    language: Option<Language>,

    /// Output format: text or html
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Log format: text, json or pretty
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Drop results of searches superseded by a newer one
    #[arg(long)]
    discard_stale: bool,

    /// Words to look up; reads lines from stdin when empty
    words: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    apply_args(&mut config, &args);

    logging::init(&config.logging);

    let interactive = args.words.is_empty() && atty::is(atty::Stream::Stdin);
    config.ui.prompt &= interactive;
    config.ui.commands = args.words.is_empty();

    let input: Box<dyn AsyncBufRead + Unpin + Send> = if args.words.is_empty() {
        Box::new(BufReader::new(tokio::io::stdin()))
    } else {
        Box::new(Cursor::new(args.words.join("\n").into_bytes()))
    };

    let state = Arc::new(AppState::new(config)?);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(input, tokio::io::stdout()).await;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => log_exit(result),
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        log_exit(result);
    }

    Ok(())
}

fn apply_args(config: &mut Config, args: &Args) {
    if let Some(language) = args.language {
        config.lookup.initial_language = language;
    }
    if let Some(output) = args.output {
        config.ui.output = output;
    }
    if let Some(format) = args.log_format {
        config.logging.format = format;
    }
    if args.discard_stale {
        config.lookup.discard_stale_results = true;
    }
}

fn log_exit(result: Result<anyhow::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => tracing::debug!("task exited"),
        Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
        Err(e) => tracing::error!("task panicked: {e}"),
    }
}
