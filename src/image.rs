//! Windows disk image download.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::cmd;
use crate::config::AppConfig;
use crate::error::SetupError;
use crate::logging::log_step;
use crate::utils::prompt_line;

const IMAGE_FILE: &str = "tiny10.iso";

/// axel splits the transfer across this many connections.
const CONNECTIONS: &str = "10";

/// Prompt for an image link and fetch it with axel.
///
/// The previously used link (if any) is offered as the default; a blank
/// answer with no default aborts before the downloader is invoked.
pub fn download(config: &mut AppConfig) -> Result<(), SetupError> {
    log_step("Downloading the Windows disk image");

    let stdin = io::stdin();
    let url = read_image_url(&mut stdin.lock(), config.image_url.as_deref())?;

    let dest_dir = download_dir(config);
    fs::create_dir_all(&dest_dir)?;
    let dest = dest_dir.join(IMAGE_FILE);
    let dest_str = dest.to_string_lossy();

    cmd::run("axel", &["-n", CONNECTIONS, &url, "-o", &dest_str])?;

    config.image_url = Some(url);
    config.save();
    Ok(())
}

/// Read a non-empty URL, falling back to `default` on blank input.
fn read_image_url(
    input: &mut impl BufRead,
    default: Option<&str>,
) -> Result<String, SetupError> {
    let question = match default {
        Some(prev) => format!("Enter the Windows image download link [{}]:", prev),
        None => "Enter the Windows image download link:".to_string(),
    };

    let answer = prompt_line(&question, input)?.unwrap_or_default();
    if !answer.is_empty() {
        return Ok(answer);
    }
    match default {
        Some(prev) => Ok(prev.to_string()),
        None => Err(SetupError::EmptyUrl),
    }
}

/// Configured override, else the XDG download dir, else ~/Downloads.
fn download_dir(config: &AppConfig) -> PathBuf {
    if let Some(dir) = &config.download_dir {
        return dir.clone();
    }
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("Downloads"))
}
