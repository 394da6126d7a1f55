use std::io::Write;

use tokio_util::sync::CancellationToken;

use crate::config::ProberConfig;
use crate::http_probe::prelude::*;

const CSV_HEADER: &str = "Timestamp_ms,Status";

/// Polls the configured target on a fixed-delay cadence and writes one CSV
/// record per probe.
pub struct Prober {
    client: reqwest::Client,
    config: ProberConfig,
    shutdown: CancellationToken,
}

impl Prober {
    /// Build the prober and its HTTP client. The client carries the
    /// configured request timeout, so every probe is bounded by it.
    pub fn new(config: ProberConfig, shutdown: CancellationToken) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            config,
            shutdown,
        })
    }

    /// Probe until the shutdown token fires.
    ///
    /// The header line goes out exactly once, before the first probe. The
    /// inter-probe sleep starts after a probe completes, so actual spacing
    /// is probe duration plus the poll interval; the cadence is
    /// best-effort, not fixed-rate. An in-flight probe is bounded by the
    /// request timeout, so cancellation takes effect within roughly that
    /// window. A write error on `out` (e.g. a closed pipe) ends the run.
    pub async fn run<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "{CSV_HEADER}")?;
        out.flush()?;

        loop {
            if self.shutdown.is_cancelled() {
                return Ok(());
            }

            let result = probe_once(&self.client, &self.config.target_url).await;
            writeln!(out, "{}", result.record())?;
            out.flush()?;

            tokio::select! {
                _ = self.shutdown.cancelled() => return Ok(()),
                _ = tokio::time::sleep(self.config.poll_interval()) => {}
            }
        }
    }
}
