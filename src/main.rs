use anyhow::Context;
use astra::Server;

use listing_search::app::AppState;
use listing_search::config::AppConfig;
use listing_search::router::serve;

fn main() -> anyhow::Result<()> {
    listing_search::init_tracing();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let state = AppState::from_config(&config);

    tracing::info!(addr = %config.bind_addr, workers = config.max_workers, "starting server");

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);
    server
        .serve(move |req, _info| serve(req, &state))
        .context("server ended with error")?;

    tracing::info!("server shut down cleanly");
    Ok(())
}
