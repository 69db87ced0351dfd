use clap::{crate_name, Parser};
use log::info;
use tinynotes::error_exit;
use tinynotes::logging::init_tool_logging;
use tinynotes_client::cli::CliConfig;
use tinynotes_client::shell::Shell;
use tinynotes_client::store::http::HttpNoteStore;

fn main() {
    init_tool_logging();

    info!("{} starting up", crate_name!());

    let cli_config = CliConfig::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .thread_name("client-worker")
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap_or_else(|e| error_exit!("failed to create async runtime: {e}"));

    let store = HttpNoteStore::new(cli_config.server_url);
    if let Err(e) = Shell::new(store, runtime).run(cli_config.note) {
        error_exit!("terminal i/o failed: {e}");
    }
}
