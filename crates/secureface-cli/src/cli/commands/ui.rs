//! Interactive screen command.

use anyhow::Result;
use secureface_core::config::Config;

#[cfg(feature = "tui")]
pub fn run(config: &Config) -> Result<()> {
    use anyhow::Context;
    use secureface_core::api::ApiClient;
    use secureface_core::config::paths;
    use secureface_core::logging::LoggingConfig;

    // The screen owns the terminal, so logs go to a file.
    let _guard = LoggingConfig::from_env(&config.log_level)
        .init_file(&paths::logs_dir())
        .context("init logging")?;

    let client = ApiClient::from_config(config)?;
    secureface_tui::run_interactive(client)
}

#[cfg(not(feature = "tui"))]
pub fn run(_config: &Config) -> Result<()> {
    anyhow::bail!(
        "This build has no interactive screen (built without the `tui` feature).\n\
         Use `secureface login` or `secureface register --name ... --email ...` instead."
    )
}
