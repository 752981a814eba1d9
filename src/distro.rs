//! Distribution detection from `/etc/os-release`.

use std::fs;
use std::path::Path;

use crate::error::SetupError;

pub const OS_RELEASE: &str = "/etc/os-release";

/// Distros the installer knows how to drive (all apt-based).
const APT_FAMILY: &[&str] = &["ubuntu", "debian", "linuxmint", "pop"];

/// Detect the host distro identifier.
pub fn detect() -> Result<String, SetupError> {
    detect_from(Path::new(OS_RELEASE))
}

fn detect_from(path: &Path) -> Result<String, SetupError> {
    let content = fs::read_to_string(path).map_err(|err| SetupError::OsReleaseMissing {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    parse_id(&content).ok_or(SetupError::NoDistroId)
}

/// Extract the `ID=` field: unquoted and lower-cased.
fn parse_id(content: &str) -> Option<String> {
    for line in content.lines() {
        if let Some(value) = line.strip_prefix("ID=") {
            return Some(value.trim().trim_matches('"').to_lowercase());
        }
    }
    None
}

pub fn is_apt_family(id: &str) -> bool {
    APT_FAMILY.contains(&id)
}

/// Per-distro codec/firmware package appended to the install list.
pub fn extra_package(id: &str) -> Option<&'static str> {
    match id {
        "ubuntu" | "pop" => Some("ubuntu-restricted-extras"),
        "linuxmint" => Some("mint-meta-codecs"),
        "debian" => Some("firmware-linux"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const UBUNTU_OS_RELEASE: &str = r#"PRETTY_NAME="Ubuntu 24.04.1 LTS"
NAME="Ubuntu"
VERSION_ID="24.04"
ID="ubuntu"
ID_LIKE=debian
"#;

    #[test]
    fn test_parse_id_strips_quotes_and_lowercases() {
        assert_eq!(parse_id(UBUNTU_OS_RELEASE).as_deref(), Some("ubuntu"));
        assert_eq!(parse_id("ID=arch\n").as_deref(), Some("arch"));
        assert_eq!(parse_id("ID=\"Pop\"\n").as_deref(), Some("pop"));
    }

    #[test]
    fn test_parse_id_ignores_lookalike_fields() {
        // VERSION_ID and ID_LIKE must not satisfy the scan
        assert_eq!(parse_id("VERSION_ID=\"24.04\"\nID_LIKE=debian\n"), None);
    }

    #[test]
    fn test_detect_from_reads_a_release_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(UBUNTU_OS_RELEASE.as_bytes()).unwrap();
        assert_eq!(detect_from(file.path()).unwrap(), "ubuntu");
    }

    #[test]
    fn test_missing_release_file_is_a_fatal_exit_one() {
        let err = detect_from(Path::new("/nonexistent/os-release")).unwrap_err();
        assert!(matches!(err, SetupError::OsReleaseMissing { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_apt_family_membership() {
        assert!(is_apt_family("ubuntu"));
        assert!(is_apt_family("debian"));
        assert!(is_apt_family("linuxmint"));
        assert!(is_apt_family("pop"));
        assert!(!is_apt_family("fedora"));
        assert!(!is_apt_family("arch"));
    }

    #[test]
    fn test_extra_package_mapping() {
        assert_eq!(extra_package("ubuntu"), Some("ubuntu-restricted-extras"));
        assert_eq!(extra_package("debian"), Some("firmware-linux"));
        assert_eq!(extra_package("fedora"), None);
    }
}
