//! Package installation for apt-family hosts.

use crate::cmd;
use crate::distro;
use crate::error::SetupError;
use crate::logging::log_step;

/// Baseline package set for a gaming + virtualization workstation.
const PACKAGES: &[&str] = &[
    "steam",
    "virt-manager",
    "lutris",
    "obs-studio",
    "build-essential",
    "axel",
    "wine",
    "winetricks",
];

const LUTRIS_PPA: &str = "ppa:lutris-team/lutris";

/// Install the workstation package set on distro `id`.
///
/// Refuses non-apt distros before issuing any command. The whole package
/// list goes into a single `apt install` so a failure leaves nothing
/// half-configured by this tool.
pub fn install(id: &str) -> Result<(), SetupError> {
    if !distro::is_apt_family(id) {
        return Err(SetupError::UnsupportedDistro(id.to_string()));
    }

    log_step(&format!("Installing packages for {}", id));
    cmd::run("sudo", &["apt", "update"])?;
    cmd::run("sudo", &["add-apt-repository", "-y", LUTRIS_PPA])?;
    if id == "debian" {
        // Debian has no multiverse; wine wants the i386 arch instead.
        cmd::run("sudo", &["dpkg", "--add-architecture", "i386"])?;
    } else {
        cmd::run("sudo", &["add-apt-repository", "-y", "multiverse"])?;
    }

    let headers = format!("linux-headers-{}", kernel_release()?);
    let mut packages: Vec<&str> = PACKAGES.to_vec();
    packages.push(&headers);
    if let Some(extra) = distro::extra_package(id) {
        packages.push(extra);
    }

    let mut args = vec!["apt", "install", "-y"];
    args.extend(packages);
    cmd::run("sudo", &args)
}

/// Running kernel release, for the matching headers package.
fn kernel_release() -> Result<String, SetupError> {
    cmd::run_capture("uname", &["-r"])
}
