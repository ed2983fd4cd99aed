use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use safegate::config::Config;
use safegate::evaluator::spam::{SpamEvaluator, SpamLabel};
use safegate::evaluator::{helpful, round2};

/// Safegate: rule-based content validators for SEO/marketing pipelines.
///
/// Scores marketing content (blog posts, GBP posts, page sections) against
/// deterministic spam and completeness rules before it goes out the door.
#[derive(Parser)]
#[command(name = "safegate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP validation service
    Serve {
        /// Port to listen on (overrides the PORT env var)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Score a piece of text locally, without the HTTP layer
    Check {
        /// The text to evaluate
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("safegate=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let port = port.unwrap_or(config.port);
            info!(port, bind = %bind, "Starting validators");
            safegate::web::run_server(config, port, &bind).await?;
        }

        Commands::Check { text } => {
            let evaluator = SpamEvaluator::new()?;
            match evaluator.evaluate(&text) {
                Ok(result) => display_check(&result.label, result.combined_score, &text),
                Err(_) => {
                    eprintln!("{}", "No content to evaluate.".red());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Print a local spam + helpfulness verdict for one piece of text.
fn display_check(label: &SpamLabel, combined: f64, text: &str) {
    let spam_line = match label {
        SpamLabel::Spam => format!("spam ({})", round2(combined)).red().bold(),
        SpamLabel::NotSpam => format!("not spam ({})", round2(combined)).green(),
    };
    println!("  {} {}", "Spam:".dimmed(), spam_line);

    if let Ok(result) = helpful::evaluate(text) {
        let helpful_line = match result.label {
            helpful::HelpfulLabel::Helpful => {
                format!("helpful ({})", round2(result.score)).green()
            }
            helpful::HelpfulLabel::NotHelpful => {
                format!("not helpful ({})", round2(result.score)).yellow()
            }
        };
        println!("  {} {}", "Helpful:".dimmed(), helpful_line);
    }
}
