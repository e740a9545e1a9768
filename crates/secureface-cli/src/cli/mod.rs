//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use secureface_core::config;
use secureface_core::logging::LoggingConfig;

mod commands;

#[derive(Parser)]
#[command(name = "secureface")]
#[command(version)]
#[command(about = "Terminal client for the SecureFace biometric authentication service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the recognition service (overrides config)
    #[arg(long, global = true, env = "SECUREFACE_API_BASE_URL", value_name = "URL")]
    api_base_url: Option<String>,

    /// Request timeout in seconds, 0 to disable (overrides config)
    #[arg(long, global = true, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive login/register screen (default)
    Ui,

    /// Register a face under a name and email
    Register {
        /// Full name to register
        #[arg(long)]
        name: String,

        /// Email address to register
        #[arg(long)]
        email: String,
    },

    /// Verify identity against registered faces
    Login,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        api_base_url,
        timeout_secs,
    } = cli;

    let load_config = || -> Result<config::Config> {
        let mut config = config::Config::load().context("load config")?;
        config.apply_overrides(api_base_url.as_deref(), timeout_secs);
        Ok(config)
    };

    match command {
        // default to the interactive screen
        None | Some(Commands::Ui) => commands::ui::run(&load_config()?),

        Some(Commands::Register { name, email }) => {
            let config = load_config()?;
            init_stderr_logging(&config)?;
            commands::auth::register(&config, &name, &email).await
        }

        Some(Commands::Login) => {
            let config = load_config()?;
            init_stderr_logging(&config)?;
            commands::auth::login(&config).await
        }

        // Config commands work even when the file is broken.
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

fn init_stderr_logging(config: &config::Config) -> Result<()> {
    LoggingConfig::from_env(&config.log_level)
        .init_stderr()
        .context("init logging")
}
