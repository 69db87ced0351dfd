use std::sync::atomic::{AtomicU16, Ordering};

// starts above the daemon's everyday port so a test run can coexist with a
// locally running instance
static PORT_COUNTER: AtomicU16 = AtomicU16::new(8100);

thread_local! {
    /// The port the current test thread's daemon listens on.
    pub static LOCAL_PORT: u16 = PORT_COUNTER.fetch_add(1, Ordering::Relaxed);
}
