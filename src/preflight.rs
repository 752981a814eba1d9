//! Host checks that must pass before any package work starts.

use std::process::Command;

use crate::error::SetupError;
use crate::logging::{log_info, log_step};

/// Remount the root filesystem read-write and bail if it stays read-only.
///
/// Immutable hosts (SteamOS and friends) refuse the remount; provisioning
/// cannot proceed there.
pub fn ensure_root_writable() -> Result<(), SetupError> {
    log_step("Checking that the root filesystem is writable");

    let output = Command::new("sudo")
        .args(["mount", "-o", "remount,rw", "/"])
        .output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() || stderr.contains("read-only") {
        return Err(SetupError::ReadOnlyRoot);
    }

    log_info("Root filesystem is writable");
    Ok(())
}
