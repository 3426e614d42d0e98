//! `kuaizhan self-update` — update the kuaizhan binary to a release build.
//!
//! Fetches release metadata from GitHub, picks the asset matching the
//! current platform, verifies the asset digest when the feed carries one,
//! and replaces the running binary in place.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::output;

const REPO: &str = "blksails/kuaizhan";

/// Release feed entry, trimmed to what the updater needs.
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Deserialize)]
struct ReleaseAsset {
    name: String,
    browser_download_url: String,
    /// `sha256:<hex>` when the release feed provides it.
    #[serde(default)]
    digest: String,
}

#[derive(Args)]
pub struct SelfUpdateArgs {
    /// Update to a specific version (e.g., "0.2.0" or "v0.2.0")
    #[arg(long = "target-version")]
    pub target_version: Option<String>,

    /// Just check for updates without installing
    #[arg(long)]
    pub check: bool,
}

pub fn run(args: &SelfUpdateArgs) -> anyhow::Result<()> {
    let current_version = env!("CARGO_PKG_VERSION");

    if cfg!(target_os = "windows") {
        anyhow::bail!(
            "Self-update is not supported on Windows. Download a release from \
             https://github.com/{REPO}/releases"
        );
    }

    // 1. Resolve the target release
    let release = match &args.target_version {
        Some(v) => {
            let tag = if v.starts_with('v') {
                v.clone()
            } else {
                format!("v{v}")
            };
            output::info(&format!("Targeting version {tag}..."));
            fetch_release_by_tag(&tag)?
        }
        None => {
            output::info("Checking for updates...");
            fetch_latest_release()?
        }
    };

    let target_version = release.tag_name.trim_start_matches('v').to_string();

    // 2. Compare versions
    if target_version == current_version {
        output::success(&format!("Already up to date (kuaizhan {current_version})."));
        return Ok(());
    }

    let is_upgrade = version_cmp(&target_version, current_version) == std::cmp::Ordering::Greater;
    let direction = if is_upgrade { "Upgrade" } else { "Downgrade" };
    output::info(&format!("{direction}: {current_version} → {target_version}"));

    if args.check {
        if is_upgrade {
            output::info(&format!(
                "Run `kuaizhan self-update` to install kuaizhan {target_version}."
            ));
            std::process::exit(1); // exit 1 = update available (useful for CI)
        }
        return Ok(());
    }

    // 3. Pick the asset for this platform
    let asset = find_compatible_asset(&release.assets).ok_or_else(|| {
        anyhow::anyhow!(
            "release {} has no asset for {}/{}",
            release.tag_name,
            env::consts::OS,
            env::consts::ARCH
        )
    })?;

    // 4. Download to a temp directory
    output::info(&format!("Downloading {}...", asset.name));
    let tmp_dir = tempfile::TempDir::new()?;
    let download_path = tmp_dir.path().join(&asset.name);
    download_file(&asset.browser_download_url, &download_path)?;

    // 5. Verify the digest when the feed has one
    if let Some(expected) = asset.digest.strip_prefix("sha256:") {
        output::info("Verifying digest...");
        verify_sha256(&download_path, expected)?;
        output::success("Digest verified.");
    }

    // 6. Extract the binary
    let binary_path = extract_binary(&download_path, tmp_dir.path())?;

    // 7. Replace the running binary
    let current_exe = env::current_exe()?;
    replace_binary(&binary_path, &current_exe)?;

    output::success(&format!(
        "Updated kuaizhan {current_version} → {target_version}"
    ));

    Ok(())
}

/// Fetch the newest release from GitHub (first entry of the list feed).
fn fetch_latest_release() -> anyhow::Result<Release> {
    let url = format!("https://api.github.com/repos/{REPO}/releases");
    let mut response = github_get(&url)?;
    let releases: Vec<Release> = response.body_mut().read_json()?;
    releases
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("no releases found"))
}

/// Fetch one release by its tag.
fn fetch_release_by_tag(tag: &str) -> anyhow::Result<Release> {
    let url = format!("https://api.github.com/repos/{REPO}/releases/tags/{tag}");
    let mut response = github_get(&url)?;
    Ok(response.body_mut().read_json()?)
}

fn github_get(url: &str) -> anyhow::Result<ureq::http::Response<ureq::Body>> {
    ureq::get(url)
        .header("Accept", "application/vnd.github+json")
        .header("User-Agent", "kuaizhan-self-update")
        .call()
        .map_err(|e| anyhow::anyhow!("Failed to fetch release metadata: {e}"))
}

/// Pick the first asset whose name matches the current platform.
fn find_compatible_asset(assets: &[ReleaseAsset]) -> Option<&ReleaseAsset> {
    let stems = asset_stems(env::consts::OS, env::consts::ARCH);
    assets.iter().find(|asset| {
        let name = asset.name.to_lowercase();
        stems.iter().any(|stem| name.contains(stem))
    })
}

/// Name stems an asset for `os`/`arch` may carry, in either separator
/// convention. Suffixes (`.tar.gz`, `.zip`) match as substrings.
fn asset_stems(os: &str, arch: &str) -> [String; 2] {
    [
        format!("kuaizhan-{os}-{arch}"),
        format!("kuaizhan_{os}_{arch}"),
    ]
}

/// Download a URL to a local file.
fn download_file(url: &str, dest: &Path) -> anyhow::Result<()> {
    let mut response = ureq::get(url)
        .header("User-Agent", "kuaizhan-self-update")
        .call()
        .map_err(|e| anyhow::anyhow!("Download failed ({url}): {e}"))?;

    let mut reader = response.body_mut().as_reader();
    let mut file = fs::File::create(dest)?;
    std::io::copy(&mut reader, &mut file)?;
    Ok(())
}

/// Verify the SHA256 digest of a downloaded asset.
fn verify_sha256(path: &Path, expected: &str) -> anyhow::Result<()> {
    use std::io::Read;

    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let actual = hex::encode(hasher.finalize());

    if !actual.eq_ignore_ascii_case(expected) {
        anyhow::bail!("Digest mismatch!\n  Expected: {expected}\n  Actual:   {actual}");
    }
    Ok(())
}

/// Turn a downloaded asset into a binary path: extract archives with the
/// system tools, use the raw file otherwise.
fn extract_binary(download: &Path, work_dir: &Path) -> anyhow::Result<PathBuf> {
    let name = download
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let extract_dir = work_dir.join("extracted");
    fs::create_dir_all(&extract_dir)?;

    let status = if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        std::process::Command::new("tar")
            .arg("xzf")
            .arg(download)
            .arg("-C")
            .arg(&extract_dir)
            .status()?
    } else if name.ends_with(".zip") {
        std::process::Command::new("unzip")
            .args(["-o", "-q"])
            .arg(download)
            .arg("-d")
            .arg(&extract_dir)
            .status()?
    } else {
        return Ok(download.to_path_buf());
    };

    if !status.success() {
        anyhow::bail!("Failed to extract {name}");
    }

    find_tool_binary(&extract_dir)
        .ok_or_else(|| anyhow::anyhow!("no kuaizhan binary found in {name}"))
}

/// First regular file in the tree whose name contains the tool name.
fn find_tool_binary(dir: &Path) -> Option<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| {
            entry.file_type().is_file() && entry.file_name().to_string_lossy().contains("kuaizhan")
        })
        .map(|entry| entry.into_path())
}

/// Replace the currently running binary with the new one.
///
/// The old binary moves to a backup location first; on failure the backup
/// is restored.
fn replace_binary(new_binary: &Path, current_exe: &Path) -> anyhow::Result<()> {
    // Resolve symlinks to get the real path
    let real_path = fs::canonicalize(current_exe)?;
    let backup_path = real_path.with_extension("old");

    // Move current → backup
    if let Err(e) = fs::rename(&real_path, &backup_path) {
        anyhow::bail!(
            "Cannot replace binary at {}: {e}\n\
             You may need to run with elevated permissions or update manually.",
            real_path.display()
        );
    }

    // Move new → target
    if let Err(e) = fs::copy(new_binary, &real_path) {
        // Try to restore backup
        let _ = fs::rename(&backup_path, &real_path);
        anyhow::bail!("Failed to install new binary: {e}");
    }

    // Set executable permission on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&real_path, fs::Permissions::from_mode(0o755))?;
    }

    // Clean up backup
    let _ = fs::remove_file(&backup_path);

    Ok(())
}

/// Simple semver comparison for version strings.
fn version_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    let parse = |s: &str| -> (u64, u64, u64) {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() >= 3 {
            (
                parts[0].parse().unwrap_or(0),
                parts[1].parse().unwrap_or(0),
                parts[2].parse().unwrap_or(0),
            )
        } else {
            (0, 0, 0)
        }
    };
    parse(a).cmp(&parse(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn asset(name: &str) -> ReleaseAsset {
        ReleaseAsset {
            name: name.to_string(),
            browser_download_url: format!("https://example.com/{name}"),
            digest: String::new(),
        }
    }

    #[test]
    fn test_version_cmp() {
        assert_eq!(version_cmp("0.2.0", "0.1.7"), Ordering::Greater);
        assert_eq!(version_cmp("1.0.0", "0.9.9"), Ordering::Greater);
        assert_eq!(version_cmp("0.1.7", "0.1.7"), Ordering::Equal);
        assert_eq!(version_cmp("0.1.6", "0.1.7"), Ordering::Less);
    }

    #[test]
    fn test_asset_stems_match_both_separators() {
        let stems = asset_stems("linux", "x86_64");
        let assets = [
            asset("kuaizhan-darwin-aarch64.tar.gz"),
            asset("Kuaizhan_Linux_x86_64.zip"),
        ];
        let hit = assets
            .iter()
            .find(|a| {
                let name = a.name.to_lowercase();
                stems.iter().any(|s| name.contains(s))
            })
            .unwrap();
        assert_eq!(hit.name, "Kuaizhan_Linux_x86_64.zip");
    }

    #[test]
    fn test_asset_stems_reject_other_platforms() {
        let stems = asset_stems("linux", "x86_64");
        let name = "kuaizhan-windows-x86_64.exe".to_lowercase();
        assert!(!stems.iter().any(|s| name.contains(s)));
    }

    #[test]
    fn test_verify_sha256() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("asset");
        fs::write(&path, b"hello world").unwrap();

        verify_sha256(
            &path,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
        )
        .unwrap();
        verify_sha256(
            &path,
            "B94D27B9934D3E08A52E52D7DA7DABFAC484EFE37A5380EE9088F7ACE2EFCDE9",
        )
        .unwrap();
        assert!(verify_sha256(&path, "deadbeef").is_err());
    }

    #[test]
    fn test_find_tool_binary() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("release/notes")).unwrap();
        fs::write(tmp.path().join("release/notes/README.md"), "docs").unwrap();
        fs::write(tmp.path().join("release/kuaizhan"), "bin").unwrap();

        let found = find_tool_binary(tmp.path()).unwrap();
        assert!(found.ends_with("release/kuaizhan"));
        assert!(find_tool_binary(&tmp.path().join("release/notes")).is_none());
    }

    #[test]
    fn test_release_feed_decodes() {
        let feed = r#"[{
            "tag_name": "v0.3.0",
            "assets": [{
                "name": "kuaizhan-linux-x86_64.tar.gz",
                "browser_download_url": "https://example.com/dl",
                "digest": "sha256:abc123"
            }]
        }]"#;
        let releases: Vec<Release> = serde_json::from_str(feed).unwrap();
        assert_eq!(releases[0].tag_name, "v0.3.0");
        assert_eq!(releases[0].assets[0].digest, "sha256:abc123");
    }

    #[test]
    fn test_release_asset_digest_defaults_empty() {
        let raw = r#"{"name": "a", "browser_download_url": "u"}"#;
        let asset: ReleaseAsset = serde_json::from_str(raw).unwrap();
        assert!(asset.digest.is_empty());
    }
}
