use anyhow::Context;
use clap::Parser;

use quote_machine::cli::Args;
use quote_machine::logging::{default_log_path, init_tracing};
use quote_machine::ui::runtime;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.resolve_config().context("failed to load configuration")?;

    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);
    if init_tracing(&log_path) {
        tracing::info!(
            endpoint = %config.source.endpoint,
            seed = ?args.seed,
            "quote machine starting"
        );
    }

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let result = runtime::run(config, args.seed, tokio_runtime.handle().clone());
    tokio_runtime.shutdown_background();
    result
}
