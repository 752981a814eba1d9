//! Proton-GE download and installation.

use flate2::read::GzDecoder;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tar::Archive;

use crate::error::SetupError;
use crate::github::{self, Asset};
use crate::logging::{log_download, log_info, log_step};

const GE_REPO: &str = "GloriousEggroll/proton-ge-custom";

/// Steam picks up custom runtimes dropped into this directory.
const COMPAT_TOOLS_DIR: &str = ".steam/root/compatibilitytools.d";

/// Install the latest Proton-GE build into Steam's compatibility tools dir.
pub fn install() -> Result<(), SetupError> {
    log_step("Installing Proton-GE");

    let release = github::latest_release(GE_REPO)?;
    let asset = select_tarball(&release.assets).ok_or_else(|| SetupError::Other {
        context: format!("Proton-GE release {}", release.tag_name),
        reason: "no .tar.gz asset published".to_string(),
    })?;
    log_info(&format!("Latest Proton-GE release: {}", release.tag_name));

    let home = dirs::home_dir().ok_or_else(|| SetupError::Other {
        context: "locating home directory".to_string(),
        reason: "HOME is not set".to_string(),
    })?;

    let tarball = home.join("proton-ge.tar.gz");
    download_asset(asset, &tarball)?;

    let install_root = home.join(COMPAT_TOOLS_DIR);
    fs::create_dir_all(&install_root)?;

    log_info("Extracting archive (this may take a moment)...");
    let tar_gz = fs::File::open(&tarball)?;
    let mut archive = Archive::new(GzDecoder::new(tar_gz));
    archive.unpack(&install_root)?;

    fs::remove_file(&tarball)?;

    log_info(&format!(
        "{} installed to {}",
        release.tag_name,
        install_root.display()
    ));
    Ok(())
}

/// The runtime tarball ships next to a .sha512sum companion.
fn select_tarball(assets: &[Asset]) -> Option<&Asset> {
    assets.iter().find(|a| a.name.ends_with(".tar.gz"))
}

/// Stream `asset` to `dest`, logging progress every 10%.
fn download_asset(asset: &Asset, dest: &Path) -> Result<(), SetupError> {
    log_download(&format!("Downloading {}", asset.name));

    let response = ureq::get(&asset.browser_download_url)
        .set("User-Agent", github::USER_AGENT)
        .call()
        .map_err(|err| SetupError::Http {
            context: format!("downloading {}", asset.name),
            reason: err.to_string(),
        })?;

    let total = response
        .header("Content-Length")
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);

    let mut reader = response.into_reader();
    let mut file = fs::File::create(dest)?;
    let mut buffer = [0u8; 65536]; // 64KB buffer for faster downloads
    let mut downloaded: u64 = 0;
    let mut next_report: u64 = 10;

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        file.write_all(&buffer[..bytes_read])?;
        downloaded += bytes_read as u64;

        if total > 0 {
            let percent = downloaded * 100 / total;
            if percent >= next_report {
                log_download(&format!(
                    "{}% ({} / {} MiB)",
                    percent,
                    downloaded >> 20,
                    total >> 20
                ));
                next_report = percent - percent % 10 + 10;
            }
        }
    }
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> Asset {
        Asset {
            name: name.to_string(),
            browser_download_url: format!("https://example.com/{}", name),
        }
    }

    #[test]
    fn test_select_tarball_skips_checksum_companions() {
        let assets = vec![
            asset("GE-Proton10-4.sha512sum"),
            asset("GE-Proton10-4.tar.gz"),
        ];
        assert_eq!(
            select_tarball(&assets).map(|a| a.name.as_str()),
            Some("GE-Proton10-4.tar.gz")
        );
    }

    #[test]
    fn test_select_tarball_handles_empty_release() {
        assert!(select_tarball(&[]).is_none());
        assert!(select_tarball(&[asset("notes.txt")]).is_none());
    }
}
