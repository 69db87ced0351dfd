use log::LevelFilter;

/// Interactive binaries always log to stderr.
pub fn init_tool_logging() {
    init_logging_env()
}

/// Daemons switch to syslog in release builds; a debug build stays on
/// stderr so the log is visible where the daemon was launched.
#[cfg(all(unix, not(debug_assertions)))]
pub fn init_daemon_logging() {
    use std::ffi::OsStr;
    use std::path::PathBuf;

    use syslog::{BasicLogger, Facility, Formatter3164};

    log
    ::set_boxed_logger(
        Box::new(
            BasicLogger::new(
                syslog::unix(
                    // for some reason, only 3164 has log crate
                    // integration at the moment
                    Formatter3164 {
                        facility: Facility::LOG_USER,
                        hostname: None,
                        process: std::env::args()
                            .next()
                            .and_then(|name|
                                PathBuf::from(name)
                                    .file_name()
                                    .map(|n|
                                        OsStr::to_string_lossy(n)
                                            .into_owned()
                                    )
                            )
                            .unwrap_or_default(),
                        pid: std::process::id(),
                    }
                ).expect("syslog initialization failed")
            )
        )
    )
        .map(|()| log::set_max_level(log::STATIC_MAX_LEVEL))
        .expect("syslog initialization failed");
}

#[cfg(any(not(unix), debug_assertions))]
pub fn init_daemon_logging() {
    init_logging_env()
}

fn init_logging_env() {
    env_logger::builder()
        .filter_level(
            if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            }
        )
        .init()
}
