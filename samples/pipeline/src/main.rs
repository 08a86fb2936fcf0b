//! pipeline-demo
//!
//! Runs the demonstration pipeline and prints its result.

use std::process::ExitCode;

use pipeline_demo::{DemoConfig, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pipeline_demo=info,iterr=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "failed to read configuration");
            return ExitCode::FAILURE;
        }
    };

    let total = run(config);
    tracing::info!(upper_bound = config.upper_bound, total, "pipeline finished");
    println!("{total}");
    ExitCode::SUCCESS
}
