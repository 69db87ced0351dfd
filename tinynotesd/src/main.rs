mod cli;
pub mod app_constants;
mod routes;
mod app_setup;

use app_setup::AppSetupFairing;
use clap::{crate_name, Parser};
use log::info;
use rocket::figment::Figment;
use tinynotes::config::figment::FigmentExt;
use tinynotes::error_exit;
use tinynotes::logging::init_daemon_logging;

use crate::cli::CliConfig;

fn main() {
    init_daemon_logging();

    info!("{} starting up", crate_name!());

    let figment = load_figment(&CliConfig::parse());
    let result = rocket::execute(
        rocket
            ::custom(figment)
            .attach(AppSetupFairing::new())
            .launch()
    );
    if let Err(e) = result {
        error_exit!("failed to launch rocket: {}", e);
    }
}

/// Rocket's defaults layered under the app config file, which must exist.
fn load_figment(cli_config: &CliConfig) -> Figment {
    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }
    Figment::from(rocket::Config::default())
        .setup_app_config(&cli_config.config_file)
}
