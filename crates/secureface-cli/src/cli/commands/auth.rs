//! One-shot login/register commands.
//!
//! Each runs exactly one dispatch through the same view-state store the
//! interactive screen uses, then reports the resulting status.

use anyhow::Result;
use secureface_core::api::ApiClient;
use secureface_core::config::Config;
use secureface_core::dispatch::dispatch_once;
use secureface_core::model::{FormData, Mode, StatusKind};
use secureface_core::store::{Completion, ViewStore};
use tracing::debug;

pub async fn register(config: &Config, name: &str, email: &str) -> Result<()> {
    let client = ApiClient::from_config(config)?;
    let mut store = ViewStore::with_form(Mode::Register, FormData::new(name, email));
    run(&mut store, &client).await
}

pub async fn login(config: &Config) -> Result<()> {
    let client = ApiClient::from_config(config)?;
    let mut store = ViewStore::new(Mode::Login);
    run(&mut store, &client).await
}

async fn run(store: &mut ViewStore, client: &ApiClient) -> Result<()> {
    debug!(mode = store.mode().label(), base_url = client.base_url(), "one-shot dispatch");
    let completion = dispatch_once(store, client).await;
    debug!(?completion, "one-shot dispatch finished");
    if completion == Completion::Ignored {
        anyhow::bail!("A request is already in flight");
    }
    report(store)
}

/// Success goes to stdout; an error status becomes the command's error.
fn report(store: &ViewStore) -> Result<()> {
    let status = store.status();
    match status.kind {
        StatusKind::Success => {
            println!("{}", status.message);
            for detail in store.details() {
                println!("  {detail}");
            }
            Ok(())
        }
        StatusKind::Error => anyhow::bail!("{}", status.message),
        StatusKind::None => anyhow::bail!("No response from the service"),
    }
}
