use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Prober settings, deserialized from the YAML config file.
/// Every field has a default matching the original benchmark constants,
/// so a partial, empty, or absent file is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProberConfig {
    /// The URL probed on every iteration.
    /// The default points at the store's `/put` handler, so each probe is
    /// a write against the leader; point this at a read endpoint if
    /// repeated writes are unacceptable for the system under test.
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// Per-request timeout in milliseconds. A probe that gets no response
    /// within this window counts as DOWN.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Fixed delay in milliseconds between the end of one probe and the
    /// start of the next.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_target_url() -> String {
    "http://kv-public:80/put?key=metric&val=test".to_string()
}

fn default_request_timeout_ms() -> u64 {
    500
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            target_url: default_target_url(),
            request_timeout_ms: default_request_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ProberConfig {
    /// The target URL must be parseable; everything else any u64 will do for.
    pub fn validate(&self) -> Result<(), url::ParseError> {
        Url::parse(&self.target_url)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
