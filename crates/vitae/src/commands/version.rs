use crate::cli::GlobalOptions;
use serde_json::{json, Value};
use vitae_core::Config;

/// Version plus the effective configuration, so `--config` overrides can be checked
pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let config = super::load_config(opts)?;
    println!("{}", serde_json::to_string_pretty(&describe(&config))?);
    Ok(())
}

fn describe(config: &Config) -> Value {
    json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "config": config,
    })
}
