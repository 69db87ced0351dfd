use std::io;
use std::process::Child;

pub trait ChildKillTermExt {
    fn kill_term(&self) -> io::Result<()>;
}

#[cfg(unix)]
impl ChildKillTermExt for Child {
    fn kill_term(&self) -> io::Result<()> {
        // SAFETY: a libc call on a pid we own
        let res = unsafe {
            libc::kill(self.id() as libc::pid_t, libc::SIGTERM)
        };
        if res == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

#[cfg(not(unix))]
impl ChildKillTermExt for Child {
    fn kill_term(&self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::Unsupported))
    }
}
