use std::error::Error;
use std::process::{Child, Command, Stdio};

use assert_fs::TempDir;
use test_utils::{
    BackgroundReader,
    ChildKillOnDropExt,
    ChildKillTermExt,
    DAEMON_BIN_PATH,
    KillOnDropChild,
    LOCAL_PORT,
    new_configured_command,
};

pub const ROCKET_STARTED_STRING: &str = "Rocket has launched from";

pub fn spawn_daemon(
    dir: &TempDir,
) -> Result<(KillOnDropChild, BackgroundReader), Box<dyn Error>> {
    let mut child = new_command(dir).spawn()?.kill_on_drop();
    let stderr = child.stderr.take()
        .expect("failed to get stderr");
    let mut reader = BackgroundReader::new(stderr, Some(30000));
    reader.wait_until(ROCKET_STARTED_STRING)?;
    Ok((child, reader))
}

pub fn shutdown_assert_no_errors(
    child: &mut Child,
    reader: BackgroundReader,
) -> Result<(), Box<dyn Error>> {
    child.kill_term()?;
    let log = reader.read_to_end()?;
    assert!(
        !log.contains("ERROR"),
        "errors in the log: {log}",
    );
    assert!(child.wait()?.success());
    Ok(())
}

fn new_command(dir: &TempDir) -> Command {
    let mut command = new_configured_command(&DAEMON_BIN_PATH, dir);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    command
}

pub fn api_url() -> String {
    let port = LOCAL_PORT.with(|port| *port);
    format!("http://localhost:{port}/api")
}
