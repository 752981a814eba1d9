//! rigup - gaming and virtualization workstation bootstrapper
//!
//! Library crate for the individual provisioning steps; the binary wires
//! them into the interactive sequence.

pub mod cmd;
pub mod config;
pub mod distro;
pub mod error;
pub mod github;
pub mod image;
pub mod kmod;
pub mod logging;
pub mod packages;
pub mod paths;
pub mod preflight;
pub mod proton;
pub mod reboot;
pub mod utils;
