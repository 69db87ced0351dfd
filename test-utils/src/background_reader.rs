use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::constants::BACKGROUND_READER_CHECK_INTERVAL;

/// Collects a child's stderr on a thread so a test can wait for a log line
/// without deadlocking the pipe.
pub struct BackgroundReader {
    thread: JoinHandle<std::io::Result<()>>,
    buf: Arc<Mutex<Vec<u8>>>,
    timeout: Option<Duration>,
}

impl BackgroundReader {
    pub fn new(
        reader: impl Read + Send + 'static,
        timeout_millis: Option<u64>,
    ) -> Self {
        let buf = Arc::new(Mutex::new(Vec::with_capacity(16 * 1024)));
        let thread_buf = buf.clone();
        let thread = thread::spawn(move || read_loop(reader, thread_buf));
        BackgroundReader {
            thread,
            buf,
            timeout: timeout_millis.map(Duration::from_millis),
        }
    }

    /// Blocks until `pattern` shows up in the captured output.
    pub fn wait_until(
        &mut self,
        pattern: &str,
    ) -> Result<(), BackgroundReaderError> {
        let wait_start = Instant::now();
        loop {
            if self.captured().contains(pattern) {
                return Ok(());
            }
            if let Some(timeout) = self.timeout
                && wait_start.elapsed() >= timeout
            {
                return Err(
                    BackgroundReaderError::Timeout {
                        pattern: pattern.to_owned(),
                        log: self.captured(),
                    }
                );
            }
            thread::sleep(BACKGROUND_READER_CHECK_INTERVAL);
        }
    }

    /// Everything captured once the stream closes. The child must already be
    /// on its way out; this joins the reading thread.
    pub fn read_to_end(self) -> Result<String, BackgroundReaderError> {
        self.thread.join()
            .map_err(|_| BackgroundReaderError::ReaderPanicked)??;
        let buf = self.buf.lock()
            .expect("couldn't lock the captured output");
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn captured(&self) -> String {
        let buf = self.buf.lock()
            .expect("couldn't lock the captured output");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn read_loop(
    mut reader: impl Read,
    buf: Arc<Mutex<Vec<u8>>>,
) -> std::io::Result<()> {
    let mut read_buf = [0u8; 16 * 1024];
    loop {
        match reader.read(&mut read_buf) {
            Ok(0) => return Ok(()),
            Ok(bytes_read) => {
                buf.lock()
                    .expect("couldn't lock the captured output")
                    .extend_from_slice(&read_buf[..bytes_read]);
            },
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => (),
            Err(e) => return Err(e),
        }
    }
}

#[derive(Debug, Error)]
pub enum BackgroundReaderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("\"{pattern}\" did not show up in time; captured so far: {log}")]
    Timeout {
        pattern: String,
        log: String,
    },

    #[error("the reading thread panicked")]
    ReaderPanicked,
}
