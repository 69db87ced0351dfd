use std::ops::{Deref, DerefMut};
use std::process::Child;
use std::thread;
use std::time::Instant;

use crate::constants::{KILL_CHECK_INTERVAL, TERM_WAIT};
use crate::unix::ChildKillTermExt;

/// Keeps a failing test from leaking its daemon: dropping the wrapper sends
/// SIGTERM, waits out the grace period, then falls back to SIGKILL.
#[derive(Debug)]
pub struct KillOnDropChild(Option<Child>);

impl KillOnDropChild {
    pub fn into_child(mut self) -> Child {
        self.0.take()
            .expect("invalid KillOnDropChild with None wrapped")
    }
}

impl Drop for KillOnDropChild {
    fn drop(&mut self) {
        if let Some(ref mut child) = self.0 {
            reap(child);
        }
    }
}

fn reap(child: &mut Child) {
    let id = child.id();

    match child.try_wait() {
        Ok(Some(_)) => return,
        Ok(None) => (),
        Err(e) => {
            eprintln!("failed checking child process {id}: {e}");
            return
        },
    }

    if let Err(e) = child.kill_term() {
        eprintln!("leaking child process {id}, SIGTERM failed: {e}");
        return
    }

    let deadline = Instant::now() + TERM_WAIT;
    while Instant::now() < deadline {
        match child.try_wait() {
            Ok(Some(_)) => return,
            Ok(None) => thread::sleep(KILL_CHECK_INTERVAL),
            Err(e) => {
                eprintln!("failed waiting for child process {id}: {e}");
                return
            },
        }
    }

    eprintln!(
        "child process {id} ignored SIGTERM for {} milliseconds, killing",
        TERM_WAIT.as_millis(),
    );
    if let Err(e) = child.kill() {
        eprintln!("leaking child process {id}, SIGKILL failed: {e}");
    }
}

impl Deref for KillOnDropChild {
    type Target = Child;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
            .expect("invalid KillOnDropChild with None wrapped")
    }
}

impl DerefMut for KillOnDropChild {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
            .expect("invalid KillOnDropChild with None wrapped")
    }
}

pub trait ChildKillOnDropExt {
    fn kill_on_drop(self) -> KillOnDropChild;
}

impl ChildKillOnDropExt for Child {
    fn kill_on_drop(self) -> KillOnDropChild {
        KillOnDropChild(Some(self))
    }
}
