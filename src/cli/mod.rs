pub mod change_domain;
pub mod create_site;
pub mod delete_page;
pub mod list;
pub mod publish_page;
pub mod self_update;
pub mod update_page;
pub mod update_site;
pub mod upgrade;
pub mod upload;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::client::Client;
use crate::config::{Settings, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(
    name = "kuaizhan",
    about = "Batch management CLI for Kuaizhan sites",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (default: ./kuaizhan.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Application key (overrides the config file)
    #[arg(long, global = true, env = "KUAIZHAN_APP_KEY")]
    pub app_key: Option<String>,

    /// Application secret (overrides the config file)
    #[arg(long, global = true, env = "KUAIZHAN_APP_SECRET")]
    pub app_secret: Option<String>,

    /// API root, e.g. a staging environment
    #[arg(long, global = true, env = "KUAIZHAN_BASE_URL")]
    pub base_url: Option<String>,

    /// Log full request and response wire traffic
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create sites under fresh random domains
    CreateSite(create_site::CreateSiteArgs),

    /// List sites and their pages
    List(list::ListArgs),

    /// Mirror a source page onto sites and publish everything
    Upload(upload::UploadArgs),

    /// Rename pages
    UpdatePage(update_page::UpdatePageArgs),

    /// Delete pages
    DeletePage(delete_page::DeletePageArgs),

    /// Open a billing package for existing sites
    Upgrade(upgrade::UpgradeArgs),

    /// Rotate sites to fresh random domains
    ChangeDomain(change_domain::ChangeDomainArgs),

    /// Update site metadata
    UpdateSite(update_site::UpdateSiteArgs),

    /// Publish one site and one of its pages
    PublishPage(publish_page::PublishPageArgs),

    /// Update the kuaizhan binary to the latest release
    SelfUpdate(self_update::SelfUpdateArgs),
}

impl Cli {
    /// Build an API client from flags, environment, and the config file,
    /// in that order of precedence.
    pub fn client(&self) -> anyhow::Result<Client> {
        let settings = self.settings()?;

        let app_key = self.app_key.clone().or(settings.app_key).ok_or_else(|| {
            anyhow::anyhow!(
                "no app key configured: pass --app-key, set KUAIZHAN_APP_KEY, \
                 or add app_key to {DEFAULT_CONFIG_FILE}"
            )
        })?;
        let app_secret = self
            .app_secret
            .clone()
            .or(settings.app_secret)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no app secret configured: pass --app-secret, set KUAIZHAN_APP_SECRET, \
                     or add app_secret to {DEFAULT_CONFIG_FILE}"
                )
            })?;

        let mut builder = Client::builder(app_key, app_secret).debug(self.debug);
        if let Some(base_url) = self.base_url.clone().or(settings.base_url) {
            builder = builder.base_url(base_url);
        }
        Ok(builder.build())
    }

    /// Settings from `--config`, or from `./kuaizhan.toml` when present.
    /// An explicit `--config` must exist; the default path may be absent.
    fn settings(&self) -> anyhow::Result<Settings> {
        match &self.config {
            Some(path) => Ok(Settings::load(path)?),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Ok(Settings::load(default)?)
                } else {
                    Ok(Settings::default())
                }
            }
        }
    }
}
