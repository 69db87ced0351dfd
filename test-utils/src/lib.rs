mod background_reader;
mod build_bin;
mod config_fixture;
mod constants;
mod kill_on_drop;
mod ports;
mod reqwest;
mod unix;

pub use background_reader::{BackgroundReader, BackgroundReaderError};
pub use build_bin::{build_bin, new_configured_command, DAEMON_BIN_PATH};
pub use config_fixture::{setup_basic_config, setup_basic_config_with_data};
pub use kill_on_drop::{ChildKillOnDropExt, KillOnDropChild};
pub use ports::LOCAL_PORT;
pub use reqwest::RQ;
pub use unix::ChildKillTermExt;
