use std::sync::Arc;

use tokio::sync::Notify;

use docserve::{config, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Build the Tokio runtime, honoring the configured worker count
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    logger::init(&cfg)?;

    // Bind failure is fatal: the error propagates and the process exits
    // non-zero without retrying
    let addr = cfg.socket_addr()?;
    let listener = server::bind_listener(addr)?;

    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(config::AppState::new(&cfg));
    let shutdown = Arc::new(Notify::new());
    server::spawn_signal_listener(Arc::clone(&shutdown));

    server::run(listener, state, shutdown).await
}
