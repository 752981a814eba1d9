//! GitHub releases API types and queries.

use serde::Deserialize;

use crate::error::SetupError;

const API_ROOT: &str = "https://api.github.com";

/// GitHub rejects requests without a User-Agent.
pub const USER_AGENT: &str = "rigup";

/// GitHub release metadata
#[derive(Deserialize, Debug, Clone)]
pub struct Release {
    pub tag_name: String,
    pub assets: Vec<Asset>,
}

/// GitHub release asset
#[derive(Deserialize, Debug, Clone)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

/// Fetch the latest release of `repo` (in "owner/name" form).
pub fn latest_release(repo: &str) -> Result<Release, SetupError> {
    let url = format!("{}/repos/{}/releases/latest", API_ROOT, repo);
    let release: Release = ureq::get(&url)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|err| SetupError::Http {
            context: format!("fetching latest release of {}", repo),
            reason: err.to_string(),
        })?
        .into_json()?;
    Ok(release)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_deserializes_from_api_shape() {
        let json = r#"{
            "tag_name": "GE-Proton10-4",
            "assets": [
                {"name": "GE-Proton10-4.sha512sum", "browser_download_url": "https://example.com/sum"},
                {"name": "GE-Proton10-4.tar.gz", "browser_download_url": "https://example.com/tar"}
            ]
        }"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "GE-Proton10-4");
        assert_eq!(release.assets.len(), 2);
        assert_eq!(release.assets[1].browser_download_url, "https://example.com/tar");
    }
}
