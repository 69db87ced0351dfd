use std::time::Duration;

/// How long a child gets to exit after SIGTERM before SIGKILL follows.
pub const TERM_WAIT: Duration = Duration::from_millis(5000);

pub const KILL_CHECK_INTERVAL: Duration = Duration::from_millis(50);
pub const BACKGROUND_READER_CHECK_INTERVAL: Duration = Duration::from_millis(50);
