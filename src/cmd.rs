//! External command dispatch.
//!
//! Every package-manager, mount, modprobe and reboot invocation funnels
//! through here so a failing child reports the command line and carries its
//! exit code back to the caller.

use std::process::Command;

use crate::error::SetupError;
use crate::logging::{log_error, log_info};

/// Run a command to completion, inheriting the terminal.
pub fn run(program: &str, args: &[&str]) -> Result<(), SetupError> {
    log_info(&format!("$ {} {}", program, args.join(" ")));

    let status = Command::new(program).args(args).status()?;
    if !status.success() {
        let code = status.code().unwrap_or(1);
        log_error(&format!(
            "command failed: {} {} (exit code {})",
            program,
            args.join(" "),
            code
        ));
        return Err(SetupError::Command {
            program: program.to_string(),
            code,
        });
    }
    Ok(())
}

/// Run a command and return its trimmed stdout.
pub fn run_capture(program: &str, args: &[&str]) -> Result<String, SetupError> {
    let output = Command::new(program).args(args).output()?;
    if !output.status.success() {
        let code = output.status.code().unwrap_or(1);
        let stderr = String::from_utf8_lossy(&output.stderr);
        log_error(&format!(
            "command failed: {} (exit code {}): {}",
            program,
            code,
            stderr.trim()
        ));
        return Err(SetupError::Command {
            program: program.to_string(),
            code,
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_propagates_the_child_exit_code() {
        match run("sh", &["-c", "exit 7"]) {
            Err(SetupError::Command { program, code }) => {
                assert_eq!(program, "sh");
                assert_eq!(code, 7);
            }
            other => panic!("expected a command error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_run_capture_trims_stdout() {
        let out = run_capture("sh", &["-c", "echo '  banana  '"]).unwrap();
        assert_eq!(out, "banana");
    }
}
