//! Process introspection via sysinfo.

use sysinfo::System;

/// Resident set size of the current process in bytes.
///
/// `None` when the pid cannot be resolved or the process table refresh does
/// not cover it; callers treat that as a degraded measurement, not an error.
pub fn resident_set_bytes() -> Option<u64> {
    let pid = sysinfo::get_current_pid().ok()?;

    let mut sys = System::new();
    sys.refresh_processes();

    sys.process(pid).map(|proc| proc.memory())
}
