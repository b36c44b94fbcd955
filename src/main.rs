//! Command-line interface for spamshield.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use spamshield_core::{
    AnalysisClient, AnalysisResult, Config, ConfigBuilder, InputFields, Orchestrator,
};

#[derive(Parser, Debug)]
#[command(
    name = "spamshield",
    version,
    about = "Check email content against a spam classification service"
)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a spamshield.toml config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL or full analyze endpoint.
    #[arg(long, env = "SPAMSHIELD_API_URL", global = true)]
    api_url: Option<String>,

    /// Client origin used by the endpoint heuristics (e.g. https://myhost:5175).
    #[arg(long, env = "SPAMSHIELD_ORIGIN", global = true)]
    origin: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze email content and print the verdict.
    Analyze(AnalyzeArgs),
    /// Check whether the backend service is reachable and healthy.
    Health,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Sender address, shown for context but never sent to the backend.
    #[arg(long, default_value = "")]
    sender: String,

    /// Email subject line.
    #[arg(long, short, default_value = "")]
    subject: String,

    /// Email body. Reads stdin when neither --body nor --body-file is given.
    #[arg(long, short)]
    body: Option<String>,

    /// Read the email body from a file.
    #[arg(long, conflicts_with = "body")]
    body_file: Option<PathBuf>,

    /// Emit the raw analysis result as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    if let Some(path) = &config.loaded_config_path {
        tracing::debug!("Loaded configuration from {}", path);
    }

    let client = AnalysisClient::new(&config)?;

    match cli.command {
        Command::Analyze(args) => run_analyze(&client, args).await,
        Command::Health => run_health(&client).await,
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_config_path(path);
    }
    if let Some(url) = &cli.api_url {
        builder = builder.with_api_base_url(url);
    }
    if let Some(origin) = &cli.origin {
        builder = builder.with_origin(origin);
    }
    builder.build().context("Failed to assemble configuration")
}

async fn run_analyze(client: &AnalysisClient, args: AnalyzeArgs) -> anyhow::Result<()> {
    let body = match (args.body, args.body_file) {
        (Some(body), _) => body,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read body file '{}'", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read email body from stdin")?;
            buffer
        }
    };

    let fields = InputFields {
        sender_email: args.sender,
        subject: args.subject,
        body,
    };

    if !fields.has_content() {
        eprintln!("Nothing to analyze: the email body is empty.");
        return Ok(());
    }

    let spinner = start_spinner();
    let mut orchestrator = Orchestrator::new();
    orchestrator.analyze(client, &fields).await;
    spinner.finish_and_clear();

    let result = orchestrator
        .result()
        .expect("a guarded analysis always settles");

    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        render_result(&fields, result);
    }
    Ok(())
}

fn start_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static spinner template"),
    );
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn render_result(fields: &InputFields, result: &AnalysisResult) {
    let verdict = if result.is_spam {
        "Likely SPAM"
    } else {
        "Appears Legitimate"
    };
    println!("{}", verdict);
    if !fields.sender_email.is_empty() {
        println!("Sender: {}", fields.sender_email);
    }
    println!("Spam confidence score: {}%", result.score);
    println!();
    println!("Analysis Details:");
    for reason in &result.reasons {
        println!("  - {}", reason);
    }

    if result.is_spam {
        println!();
        println!(
            "Warning: Do not click any links, download attachments, or share \
             personal information. Mark this email as spam and delete it immediately."
        );
    }
}

async fn run_health(client: &AnalysisClient) -> anyhow::Result<()> {
    println!("Backend endpoint: {}", client.endpoint());
    match client.check_health().await {
        Ok(health) => {
            println!(
                "Status: {} ({})",
                health.status.as_deref().unwrap_or("unknown"),
                health.service.as_deref().unwrap_or("unnamed service")
            );
            Ok(())
        }
        Err(e) => {
            println!("Status: unreachable ({})", e);
            std::process::exit(1);
        }
    }
}
