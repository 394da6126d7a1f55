use std::io;

use tokio_util::sync::CancellationToken;

pub mod config;
pub mod http_probe;
pub mod prober;
#[cfg(test)]
pub mod test_support;

use prober::Prober;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = config::load_config().expect("Failed to load configuration");

    // stdout carries the CSV trace; everything operational goes to stderr
    // so the trace can be redirected to a file untouched.
    eprintln!(
        "Probing {} every {}ms, request timeout {}ms",
        config.target_url, config.poll_interval_ms, config.request_timeout_ms
    );

    let shutdown = CancellationToken::new();
    let prober = Prober::new(config, shutdown.clone()).expect("Failed to build HTTP client");

    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal.cancel();
        }
    });

    if let Err(e) = prober.run(io::stdout()).await {
        eprintln!("Output stream error: {e}");
    }
    eprintln!("Prober stopped");
}
