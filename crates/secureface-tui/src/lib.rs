//! Full-screen TUI for the SecureFace client.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
use secureface_core::api::ApiClient;
use secureface_core::config::paths;

/// Runs the interactive login/register screen.
///
/// Blocks until the user quits. Must be called from within a tokio runtime,
/// which carries the spawned requests.
///
/// # Errors
/// Fails when stderr is not a terminal or the terminal cannot be driven.
pub fn run_interactive(client: ApiClient) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive screen requires a terminal.\n\
             Use `secureface login` or `secureface register --name ... --email ...` instead."
        );
    }

    // Printed before the alternate screen takes over.
    let mut err = stderr();
    writeln!(err, "SecureFace")?;
    writeln!(err, "Service: {}", client.base_url())?;
    writeln!(err, "Logs: {}", paths::logs_dir().display())?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(client)?;
    runtime.run()?;
    drop(runtime);

    // Terminal is restored by now.
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
