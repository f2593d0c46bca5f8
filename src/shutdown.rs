//! Process-wide stop flag driven by termination signals.
//!
//! The handler body is async-signal-safe: a single atomic store. The flag
//! is static because a signal handler cannot carry instance state.

use std::sync::atomic::{AtomicBool, Ordering};

use libc::c_int;

use crate::error::{Error, Result};

static REQUESTED: AtomicBool = AtomicBool::new(false);

extern "C" fn on_signal(_signum: c_int) {
    REQUESTED.store(true, Ordering::Release);
}

/// Routes SIGHUP, SIGINT, SIGTERM and SIGQUIT to the stop flag.
pub fn install() -> Result<()> {
    let handler = on_signal as extern "C" fn(c_int);
    for signum in [libc::SIGHUP, libc::SIGINT, libc::SIGTERM, libc::SIGQUIT] {
        let previous = unsafe { libc::signal(signum, handler as libc::sighandler_t) };
        if previous == libc::SIG_ERR {
            return Err(Error::Io(std::io::Error::last_os_error()));
        }
    }
    Ok(())
}

/// True once any handled signal has been delivered.
pub fn requested() -> bool {
    REQUESTED.load(Ordering::Acquire)
}
