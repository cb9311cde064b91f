//! eval360 - 360° employee evaluations from the terminal
//!
//! # Usage
//!
//! ```bash
//! # Sign in and land on the view for your role
//! eval360 login --email ana@example.com
//!
//! # Where can I go?
//! eval360 nav
//! eval360 open /dashboard-admin/admin/users
//!
//! # Dashboard data
//! eval360 users list
//! eval360 evaluations list
//! eval360 stats
//!
//! # Reports: own, or anyone's for Admin and Manager
//! eval360 report
//! eval360 report <id>
//! ```

mod cmd;
mod context;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use eval360_config::{Config, LogFormat};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::context::AppContext;

/// eval360 - 360° employee evaluations
#[derive(Parser, Debug)]
#[command(name = "eval360")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session
    Login(cmd::auth::LoginArgs),

    /// Create a new account
    Register(cmd::auth::RegisterArgs),

    /// Clear the stored session
    Logout,

    /// Show the stored session
    Status,

    /// Show the navigation header and dashboard sidebar
    Nav(cmd::nav::NavArgs),

    /// Check whether a path would render for the current session
    Open(cmd::nav::OpenArgs),

    /// Manage users (dashboard)
    Users(cmd::users::UsersArgs),

    /// Manage evaluations (dashboard)
    Evaluations(cmd::evaluations::EvaluationsArgs),

    /// Show an employee's evaluation report
    Report(cmd::report::ReportArgs),

    /// Show dashboard statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let log_level = resolve_log_level(cli.log_level.as_deref(), &config);
    init_logging(&log_level, config.log.format)?;

    let ctx = AppContext::new(config);

    match cli.command {
        Command::Login(args) => cmd::auth::run_login(&ctx, args).await,
        Command::Register(args) => cmd::auth::run_register(&ctx, args).await,
        Command::Logout => cmd::auth::run_logout(&ctx),
        Command::Status => cmd::auth::run_status(&ctx),
        Command::Nav(args) => cmd::nav::run_nav(&ctx, args),
        Command::Open(args) => cmd::nav::run_open(&ctx, args),
        Command::Users(args) => cmd::users::run(&ctx, args).await,
        Command::Evaluations(args) => cmd::evaluations::run(&ctx, args).await,
        Command::Report(args) => cmd::report::run_report(&ctx, args).await,
        Command::Stats => cmd::report::run_stats(&ctx).await,
    }
}

/// Load config: explicit path must exist, default path is optional
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load_or_default(Config::default_path())?,
    };
    Ok(config.with_env()?)
}

/// Resolve log level: CLI flag > config file (default "warn")
fn resolve_log_level(cli_level: Option<&str>, config: &Config) -> String {
    cli_level
        .map(str::to_string)
        .unwrap_or_else(|| config.log.level.as_str().to_string())
}

/// Initialize the tracing subscriber for logging
///
/// Logs go to stderr; stdout carries command output.
fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Console => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    Ok(())
}
