//! rigup - gaming and virtualization workstation bootstrapper
//!
//! Provisions a Debian/Ubuntu-family host for gaming and Windows
//! virtualization: packages, Proton-GE, a Windows disk image, KVM modules,
//! and an optional reboot.

use std::process;

use rigup::config::AppConfig;
use rigup::error::SetupError;
use rigup::logging::{init_logger, log_error, log_info};
use rigup::{distro, image, kmod, packages, preflight, proton, reboot};

const BANNER: &str = r#"
        _
   _ __(_) __ _ _   _ _ __
  | '__| |/ _` | | | | '_ \
  | |  | | (_| | |_| | |_) |
  |_|  |_|\__, |\__,_| .__/
          |___/      |_|
"#;

fn main() {
    // Initialize logging first so the run log captures the whole sequence
    init_logger();
    println!("{}", BANNER);
    log_info("rigup starting up...");

    if let Err(err) = run() {
        log_error(&err.to_string());
        process::exit(err.exit_code());
    }
}

/// The provisioning sequence; the first failure aborts the run.
fn run() -> Result<(), SetupError> {
    preflight::ensure_root_writable()?;

    let id = distro::detect()?;
    log_info(&format!("Detected distribution: {}", id));

    packages::install(&id)?;
    proton::install()?;

    let mut config = AppConfig::load();
    image::download(&mut config)?;

    kmod::load_all()?;
    reboot::confirm_and_reboot()?;

    log_info("Provisioning complete.");
    Ok(())
}
