//! Logging for provisioning runs.
//!
//! Every run writes a timestamped log file under the data directory and
//! mirrors messages to the console. Warnings and errors go to stderr so a
//! failing run can be diagnosed from the error stream alone.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::process::Command;
use std::sync::{Arc, Mutex, OnceLock};

use crate::rigup_path;

static LOGGER: OnceLock<Arc<Mutex<RigLogger>>> = OnceLock::new();

// ============================================================================
// Host Information
// ============================================================================

/// Host facts recorded at the top of every provisioning log.
#[derive(Debug, Clone)]
pub struct HostInfo {
    pub app_version: String,
    pub distro: String,
    pub kernel: String,
    pub cpu: String,
    pub memory: String,
}

impl HostInfo {
    pub fn detect() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            distro: detect_distro_name(),
            kernel: detect_kernel(),
            cpu: detect_cpu(),
            memory: detect_memory(),
        }
    }

    pub fn to_log_header(&self) -> String {
        format!(
            "----------------------------------------\n\
             rigup v{} - {}\n\
             Distro: {}\n\
             Kernel: {}\n\
             CPU:    {}\n\
             Memory: {}\n\
             ----------------------------------------",
            self.app_version,
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.distro,
            self.kernel,
            self.cpu,
            self.memory
        )
    }
}

fn detect_distro_name() -> String {
    if let Ok(file) = File::open("/etc/os-release") {
        let reader = BufReader::new(file);
        for line in reader.lines().map_while(Result::ok) {
            if line.starts_with("PRETTY_NAME=") {
                return line
                    .trim_start_matches("PRETTY_NAME=")
                    .trim_matches('"')
                    .to_string();
            }
        }
    }
    "Unknown".to_string()
}

fn detect_kernel() -> String {
    if let Ok(output) = Command::new("uname").arg("-r").output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "Unknown".to_string()
}

fn detect_cpu() -> String {
    if let Ok(file) = File::open("/proc/cpuinfo") {
        let reader = BufReader::new(file);
        for line in reader.lines().map_while(Result::ok) {
            if line.starts_with("model name") {
                if let Some(name) = line.split(':').nth(1) {
                    return name.trim().to_string();
                }
            }
        }
    }
    "Unknown".to_string()
}

fn detect_memory() -> String {
    if let Ok(file) = File::open("/proc/meminfo") {
        let reader = BufReader::new(file);
        for line in reader.lines().map_while(Result::ok) {
            if line.starts_with("MemTotal:") {
                if let Some(kb_str) = line.split_whitespace().nth(1) {
                    if let Ok(kb) = kb_str.parse::<u64>() {
                        return format!("{:.1} GB", kb as f64 / 1024.0 / 1024.0);
                    }
                }
            }
        }
    }
    "Unknown".to_string()
}

// ============================================================================
// Log Levels
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Info,
    Step, // Start of a provisioning phase
    Download,
    Warning,
    Error,
}

impl LogLevel {
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO]",
            LogLevel::Step => "[STEP]",
            LogLevel::Download => "[DOWNLOAD]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Error => "[ERROR]",
        }
    }

    fn to_stderr(&self) -> bool {
        matches!(self, LogLevel::Warning | LogLevel::Error)
    }
}

// ============================================================================
// Logger
// ============================================================================

pub struct RigLogger {
    log_file: Option<File>,
}

impl RigLogger {
    pub fn new() -> Self {
        let log_dir = rigup_path!("logs");
        let _ = fs::create_dir_all(&log_dir);

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join(format!("rigup_{}.log", timestamp)))
            .ok();

        let mut logger = Self { log_file };
        logger.write_raw(&HostInfo::detect().to_log_header(), false);
        logger
    }

    fn write_raw(&mut self, msg: &str, to_stderr: bool) {
        if let Some(ref mut file) = self.log_file {
            let _ = writeln!(file, "{}", msg);
            let _ = file.flush();
        }

        if to_stderr {
            eprintln!("{}", msg);
        } else {
            println!("{}", msg);
        }
    }

    pub fn log(&mut self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        let formatted = format!("[{}] {} {}", timestamp, level.prefix(), message);
        self.write_raw(&formatted, level.to_stderr());
    }
}

impl Default for RigLogger {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Global Logger Access
// ============================================================================

/// Initialize the global logger (call once at startup)
pub fn init_logger() {
    LOGGER.get_or_init(|| Arc::new(Mutex::new(RigLogger::new())));
}

fn logger() -> Arc<Mutex<RigLogger>> {
    LOGGER
        .get_or_init(|| Arc::new(Mutex::new(RigLogger::new())))
        .clone()
}

fn log_at(level: LogLevel, message: &str) {
    if let Ok(mut log) = logger().lock() {
        log.log(level, message);
    }
}

// ============================================================================
// Convenience Logging Functions
// ============================================================================

pub fn log_info(message: &str) {
    log_at(LogLevel::Info, message);
}

pub fn log_step(message: &str) {
    log_at(LogLevel::Step, message);
}

pub fn log_download(message: &str) {
    log_at(LogLevel::Download, message);
}

pub fn log_warning(message: &str) {
    log_at(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_at(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_prefixes_are_bracketed() {
        for level in [
            LogLevel::Info,
            LogLevel::Step,
            LogLevel::Download,
            LogLevel::Warning,
            LogLevel::Error,
        ] {
            let prefix = level.prefix();
            assert!(prefix.starts_with('['));
            assert!(prefix.ends_with(']'));
        }
    }

    #[test]
    fn test_only_warnings_and_errors_hit_stderr() {
        assert!(LogLevel::Warning.to_stderr());
        assert!(LogLevel::Error.to_stderr());
        assert!(!LogLevel::Info.to_stderr());
        assert!(!LogLevel::Step.to_stderr());
        assert!(!LogLevel::Download.to_stderr());
    }

    #[test]
    fn test_host_header_names_the_app_version() {
        let info = HostInfo::detect();
        assert!(info.to_log_header().contains(env!("CARGO_PKG_VERSION")));
    }
}
