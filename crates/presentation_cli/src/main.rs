//! Outreach CLI
//!
//! Command-line client for a running outreach server.

#![allow(clippy::print_stdout)]

mod client;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use client::{GenerateOutcome, GeneratePayload, ProfileSource, endpoint_url};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_URL: &str = "http://localhost:8000";

/// Outreach CLI
#[derive(Parser)]
#[command(name = "outreach-cli")]
#[command(author, version, about = "Business development email generator CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show server status and pipeline mode
    Status {
        /// Server URL
        #[arg(short, long, env = "OUTREACH_URL", default_value = DEFAULT_URL)]
        url: String,
    },

    /// Check server liveness (exit code 0 when healthy)
    Health {
        /// Server URL
        #[arg(short, long, env = "OUTREACH_URL", default_value = DEFAULT_URL)]
        url: String,
    },

    /// Generate an outreach email
    ///
    /// Example: outreach-cli generate --target-company "Acme Inc." --profile-file acme.txt
    Generate {
        /// Server URL
        #[arg(short, long, env = "OUTREACH_URL", default_value = DEFAULT_URL)]
        url: String,

        /// Your company name
        #[arg(long, default_value = "")]
        your_company: String,

        /// Your name
        #[arg(long, default_value = "")]
        your_name: String,

        /// Your job title
        #[arg(long, default_value = "")]
        your_title: String,

        /// Company the email is addressed to
        #[arg(long, default_value = "")]
        target_company: String,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the raw JSON reply
        #[arg(long)]
        json: bool,
    },
}

/// Exactly one source of company profile text
#[derive(Args)]
#[group(required = true, multiple = false)]
struct ProfileArgs {
    /// Company profile text
    #[arg(long)]
    profile: Option<String>,

    /// Read the company profile from a file
    #[arg(long)]
    profile_file: Option<PathBuf>,
}

impl ProfileArgs {
    fn source(&self) -> ProfileSource<'_> {
        match &self.profile_file {
            Some(path) => ProfileSource::File(path),
            None => ProfileSource::Inline(self.profile.as_deref().unwrap_or_default()),
        }
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status { url } => {
            let resp = client::get_json(&client, &endpoint_url(&url, "/")).await?;

            println!("📊 Server Status:");
            println!("{}", serde_json::to_string_pretty(&resp)?);
        },

        Commands::Health { url } => match client::is_healthy(&client, &url).await {
            Ok(true) => {
                println!("✅ Healthy");
            },
            Ok(false) => {
                println!("❌ Unhealthy: unexpected /healthz payload");
                std::process::exit(1);
            },
            Err(e) => {
                println!("❌ Unhealthy: {e}");
                std::process::exit(1);
            },
        },

        Commands::Generate {
            url,
            your_company,
            your_name,
            your_title,
            target_company,
            profile,
            json,
        } => {
            let payload = GeneratePayload {
                your_company,
                your_name,
                your_title,
                target_company,
                company_profile: profile.source().read()?,
            };

            let reply = client::generate(&client, &url, &payload).await?;
            let outcome = GenerateOutcome::from_reply(&reply);

            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            }

            match outcome {
                GenerateOutcome::Email { body, filename } => {
                    if !json {
                        println!("{body}");
                        println!();
                        println!("📄 Suggested filename: {filename}");
                    }
                },
                GenerateOutcome::Failed { error, hint } => {
                    if !json {
                        println!("❌ {error}");
                        if let Some(hint) = hint {
                            println!("💡 {hint}");
                        }
                    }
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}
