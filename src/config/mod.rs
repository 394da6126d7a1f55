pub mod prober_config;

pub use prober_config::ProberConfig;

use std::env;
use std::error::Error;
use std::path::Path;

/// Load the prober configuration from a YAML file and environment variables.
/// The file is named by the `CONFIG_FILE` environment variable (default
/// `config.yml`); a missing or empty file is not an error, the built-in
/// defaults stand in for it. `TARGET_URL`, `REQUEST_TIMEOUT_MS` and
/// `POLL_INTERVAL_MS` override whatever the file said.
pub fn load_config() -> Result<ProberConfig, Box<dyn Error>> {
    let config_file_location = env::var("CONFIG_FILE").unwrap_or_else(|_| "config.yml".to_string());
    let mut config = load_config_file(Path::new(&config_file_location))?;

    apply_overrides(&mut config, |name| env::var(name).ok())?;

    config.validate()?;
    Ok(config)
}

/// Apply environment overrides on top of the file configuration. The
/// lookup is injected so the override logic can be tested without touching
/// process-global environment state. A non-numeric value for one of the
/// millisecond settings is a fatal configuration error.
fn apply_overrides(
    config: &mut ProberConfig,
    var: impl Fn(&str) -> Option<String>,
) -> Result<(), Box<dyn Error>> {
    if let Some(url) = var("TARGET_URL") {
        config.target_url = url;
    }
    if let Some(ms) = var("REQUEST_TIMEOUT_MS") {
        config.request_timeout_ms = ms.trim().parse()?;
    }
    if let Some(ms) = var("POLL_INTERVAL_MS") {
        config.poll_interval_ms = ms.trim().parse()?;
    }
    Ok(())
}

fn load_config_file(path: &Path) -> Result<ProberConfig, Box<dyn Error>> {
    if !path.exists() {
        return Ok(ProberConfig::default());
    }
    let config_str = std::fs::read_to_string(path)?;
    if config_str.trim().is_empty() {
        // serde_yaml reads an empty document as null, which a struct rejects
        return Ok(ProberConfig::default());
    }
    Ok(serde_yaml::from_str(&config_str)?)
}
