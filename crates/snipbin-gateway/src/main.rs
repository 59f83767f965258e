mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod state;

use crate::cli::CLI;
use crate::state::AppState;
use clap::Parser;
use snipbin_service::PastebinService;
use snipbin_storage::FsSnippetStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        data_dir = %config.data_dir.display(),
        latest_limit = config.latest_limit,
        "starting snipbin gateway"
    );

    let store = FsSnippetStore::open(config.data_dir).await?;
    let service = PastebinService::with_latest_limit(store, config.latest_limit);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app::App::router(AppState::new(service))).await?;

    Ok(())
}
