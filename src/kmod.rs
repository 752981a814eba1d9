//! Virtualization kernel modules.

use crate::cmd;
use crate::error::SetupError;
use crate::logging::log_step;

/// KVM core plus both vendor modules, loaded in order.
const MODULES: &[&str] = &["kvm", "kvm_intel", "kvm_amd"];

/// Load every module in the fixed set; a failing modprobe aborts the run.
pub fn load_all() -> Result<(), SetupError> {
    log_step("Loading virtualization kernel modules");
    for module in MODULES {
        cmd::run("sudo", &["modprobe", module])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_set_covers_both_cpu_vendors() {
        assert_eq!(MODULES, &["kvm", "kvm_intel", "kvm_amd"]);
    }
}
