//! Fatal error type for the provisioning flow.

use std::fmt;
use std::io;

/// Everything that can stop a provisioning run.
///
/// All variants are fatal. `exit_code()` decides what the process reports:
/// a failed external command surfaces the child's own exit code, every
/// validation failure surfaces 1.
#[derive(Debug)]
pub enum SetupError {
    /// Host distro is outside the apt family.
    UnsupportedDistro(String),
    /// `/etc/os-release` is absent or unreadable.
    OsReleaseMissing { path: String, reason: String },
    /// `/etc/os-release` carried no `ID=` entry.
    NoDistroId,
    /// The remount probe reported a read-only root filesystem.
    ReadOnlyRoot,
    /// The user gave no download link.
    EmptyUrl,
    /// An external command exited non-zero.
    Command { program: String, code: i32 },
    /// Network failure while talking to GitHub or fetching an asset.
    Http { context: String, reason: String },
    /// Filesystem or stream error.
    Io(io::Error),
    /// Generic error with context.
    Other { context: String, reason: String },
}

impl SetupError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupError::Command { code, .. } => *code,
            _ => 1,
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::UnsupportedDistro(id) => {
                write!(
                    f,
                    "unsupported distribution '{}': only Debian/Ubuntu family hosts are handled",
                    id
                )
            }
            SetupError::OsReleaseMissing { path, reason } => {
                write!(f, "cannot read {}: {}", path, reason)
            }
            SetupError::NoDistroId => write!(f, "no ID= entry found in /etc/os-release"),
            SetupError::ReadOnlyRoot => {
                write!(f, "root filesystem is read-only, cannot provision this host")
            }
            SetupError::EmptyUrl => write!(f, "no download link provided"),
            SetupError::Command { program, code } => {
                write!(f, "{} failed with exit code {}", program, code)
            }
            SetupError::Http { context, reason } => write!(f, "{}: {}", context, reason),
            SetupError::Io(err) => write!(f, "{}", err),
            SetupError::Other { context, reason } => write!(f, "{}: {}", context, reason),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<io::Error> for SetupError {
    fn from(err: io::Error) -> Self {
        SetupError::Io(err)
    }
}

impl From<ureq::Error> for SetupError {
    fn from(err: ureq::Error) -> Self {
        SetupError::Http {
            context: "request failed".to_string(),
            reason: err.to_string(),
        }
    }
}
