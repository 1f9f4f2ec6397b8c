//! Recap CLI - meeting notes summarisation
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use recap::server::{self, AppState};
use recap::{digest, Config, DigestError, GeminiAgent};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "recap")]
#[command(author, version, about = "Summarise meeting notes with an LLM", long_about = None)]
struct Cli {
    /// Path to a recap.toml (defaults to ./recap.toml, then ~/.config/recap/recap.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web form (default)
    Serve {
        /// Address to listen on, overrides [server].bind
        #[arg(long, env = "RECAP_BIND")]
        bind: Option<String>,
    },
    /// Summarise notes from a file, or stdin when no file is given
    Summarise {
        /// Notes file; "-" reads stdin
        file: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "recap", &mut std::io::stdout());
        }
        Some(Commands::Summarise { file, json }) => {
            let config = load_config(cli.config.as_ref())?;
            let notes = read_notes(file.as_ref())?;
            let agent = GeminiAgent::from_config(&config);

            let result = digest(&notes, &agent)
                .await
                .map_err(DigestError::into_source)
                .map_err(|e| anyhow::anyhow!(e))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", "Summary:".bold());
                println!("{}\n", result.sections.summary);
                println!("{}", "Action Items:".bold());
                println!("{}\n", result.sections.action_items);
                println!("{}", "Key Decisions:".bold());
                println!("{}\n", result.sections.key_decisions);
                println!(
                    "{}",
                    format!(
                        "Original: {} words, Summary: {} words, Compression: {}",
                        result.stats.original_words,
                        result.stats.summary_words,
                        result.stats.compression
                    )
                    .dimmed()
                );
            }
        }
        Some(Commands::Serve { bind }) => {
            let config = load_config(cli.config.as_ref())?;
            run_server(config, bind).await?;
        }
        None => {
            let config = load_config(cli.config.as_ref())?;
            run_server(config, std::env::var("RECAP_BIND").ok()).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load()?,
    };
    Ok(config)
}

async fn run_server(config: Config, bind: Option<String>) -> anyhow::Result<()> {
    let agent = GeminiAgent::from_config(&config);
    if !agent.has_api_key() {
        tracing::warn!(
            "no Gemini API key configured (set GEMINI_API_KEY); summarisation requests will fail"
        );
    }

    let addr = bind.unwrap_or(config.server.bind);
    server::serve(&addr, AppState::new(Arc::new(agent)))
        .await
        .with_context(|| format!("serving on {}", addr))?;
    Ok(())
}

fn read_notes(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut notes = String::new();
            std::io::stdin().read_to_string(&mut notes)?;
            Ok(notes)
        }
    }
}
