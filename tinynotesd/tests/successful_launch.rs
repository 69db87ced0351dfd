use std::error::Error;

use api_data::model::NoteResponse;
use test_utils::{BackgroundReader, ChildKillOnDropExt, RQ};
use test_utils::{setup_basic_config, setup_basic_config_with_data};

use crate::common::base_url;
use crate::common::new_command;
use crate::common::shutdown_assert_no_errors;
use crate::common::spawn_daemon;
use crate::common::url;

mod common;

#[test]
fn launch_serves_web_stub_and_empty_list() -> Result<(), Box<dyn Error>> {
    let dir = setup_basic_config_with_data();
    let (mut child, reader) = spawn_daemon(&dir)?;

    let web = RQ.get(base_url())
        .send()?
        .error_for_status()?
        .text()?;
    assert!(web.contains("tinynotes"), "unexpected web stub: {web}");

    let notes: Vec<NoteResponse> = RQ.get(url("notes"))
        .send()?
        .error_for_status()?
        .json()?;
    assert!(notes.is_empty());

    shutdown_assert_no_errors(&mut child, reader)?;

    Ok(())
}

#[test]
fn launch_fails_without_a_data_directory() -> Result<(), Box<dyn Error>> {
    let dir = setup_basic_config();
    let mut child = new_command(&dir).spawn()?.kill_on_drop();
    let stderr = child.stderr.take()
        .expect("failed to get stderr");
    let reader = BackgroundReader::new(stderr, Some(30000));

    assert!(!child.wait()?.success());
    let log = reader.read_to_end()?;
    assert!(
        log.contains("note storage initialization failed"),
        "unexpected log: {log}",
    );

    Ok(())
}
