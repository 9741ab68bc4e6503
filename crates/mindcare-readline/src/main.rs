use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mindcare_core::generation::GenerationError;
use mindcare_core::health::HealthInfoProvider;
use mindcare_core::{Journal, MoodTracker, ResponsePipeline};
use mindcare_infrastructure::{ConfigService, JsonFileStore, MindcarePaths, SecretServiceImpl};
use mindcare_interaction::{GeminiApiAgent, HealthFinderClient};

mod app;
mod command;
mod helper;

use app::{App, Outcome};
use command::Command;
use helper::CliHelper;

#[derive(Parser)]
#[command(name = "mindcare")]
#[command(about = "MindCare - mood tracker, journal and supportive chatbot", long_about = None)]
struct Args {
    /// Directory for moodTracker.json and moodJournal.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory holding config.toml, secret.json and logs/
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Seed for reply selection, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Disable Gemini and MyHealthfinder
    #[arg(long)]
    offline: bool,
}

/// Logs go to a daily file so they never interleave with the REPL output.
fn init_tracing(logs_dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, "mindcare.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(guard)
}

async fn build_generator(paths: &MindcarePaths) -> Option<GeminiApiAgent> {
    if let Err(e) = paths.ensure_secret_file() {
        warn!(error = %e, "could not create secret file template");
    }

    let secrets = SecretServiceImpl::new(paths.secret_file());
    match GeminiApiAgent::try_from_secrets(&secrets).await {
        Ok(agent) => {
            info!(model = agent.model(), "Gemini generation enabled");
            Some(agent)
        }
        Err(GenerationError::NotConfigured) => None,
        Err(e) => {
            warn!(error = %e, "Gemini generation disabled");
            None
        }
    }
}

fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Reply(text) => {
            for line in text.lines() {
                println!("{}", line.bright_blue());
            }
            println!();
        }
        Outcome::Panel { title, lines } => {
            println!("{}", format!("[{}]", title).bright_magenta().bold());
            for block in lines {
                for line in block.lines() {
                    println!("  {}", line);
                }
            }
            println!();
        }
        Outcome::Notice(text) => println!("{}", text.bright_black()),
        Outcome::Warning(text) => println!("{}", text.yellow()),
        Outcome::Quit | Outcome::Nothing => {}
    }
}

/// Entry point for the MindCare REPL.
///
/// Resolves directories and configuration, starts file logging, wires the
/// optional remote services into the response pipeline and then reads one
/// line at a time until `quit`, `exit` or CTRL-D.
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // ===== Configuration =====
    let mut paths = MindcarePaths::resolve(args.config_dir.as_deref(), args.data_dir.as_deref())?;
    let config = ConfigService::new(paths.config_file()).get_config()?;
    if args.data_dir.is_none() {
        if let Some(dir) = &config.storage.data_dir {
            paths = paths.with_data_dir(dir);
        }
    }

    let _log_guard = init_tracing(&paths.logs_dir(), &config.logging.level)?;
    info!(
        config_dir = %paths.config_dir().display(),
        data_dir = %paths.data_dir().display(),
        offline = args.offline,
        "starting mindcare"
    );

    // ===== Backend Initialization =====
    let store = Arc::new(JsonFileStore::new(paths.data_dir()));
    let mood = MoodTracker::load(store.clone())?;
    let journal = Journal::load(store)?;

    let mut pipeline = match args.seed {
        Some(seed) => ResponsePipeline::seeded(seed),
        None => ResponsePipeline::new(),
    };

    if !args.offline && config.chat.remote_generation {
        if let Some(agent) = build_generator(&paths).await {
            pipeline = pipeline.with_generator(Arc::new(agent));
        }
    }

    let health: Option<Arc<dyn HealthInfoProvider>> = if !args.offline && config.health.enabled {
        Some(Arc::new(HealthFinderClient::new(config.health.base_url.clone())))
    } else {
        None
    };
    if let Some(provider) = &health {
        pipeline = pipeline.with_health_provider(Arc::clone(provider));
    }

    let remote_enabled = pipeline.has_generator();
    let mut app = App::new(pipeline, mood, journal, health);

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    println!("{}", "=== Mind Care Bot ===".bright_magenta().bold());
    println!(
        "{}",
        "Share what's on your mind, or type '/help' for commands and 'quit' to exit.".bright_black()
    );
    if !remote_enabled {
        println!(
            "{}",
            "Gemini is not configured; using built-in responses.".bright_black()
        );
    }
    println!(
        "{}",
        "In crisis? Call or text 988, or text HOME to 741741.".yellow()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let command = Command::parse(&line);
                if command == Command::Empty {
                    continue;
                }

                let _ = rl.add_history_entry(line.as_str());

                if let Command::Chat(text) = &command {
                    println!("{}", format!("> {}", text).green());
                }

                match app.handle(command).await {
                    Ok(Outcome::Quit) => {
                        println!("{}", "Take care of yourself. Goodbye!".bright_green());
                        break;
                    }
                    Ok(outcome) => render(&outcome),
                    Err(e) => {
                        warn!(error = %e, "command failed");
                        eprintln!("{}", format!("Error: {:#}", e).red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    info!(messages = app.session().context.message_count, "session ended");
    Ok(())
}
