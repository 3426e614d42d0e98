use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kuaizhan::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging; --debug also turns on wire capture in the client
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Command::CreateSite(args) => kuaizhan::cli::create_site::run(args, &cli)?,
        Command::List(args) => kuaizhan::cli::list::run(args, &cli)?,
        Command::Upload(args) => kuaizhan::cli::upload::run(args, &cli)?,
        Command::UpdatePage(args) => kuaizhan::cli::update_page::run(args, &cli)?,
        Command::DeletePage(args) => kuaizhan::cli::delete_page::run(args, &cli)?,
        Command::Upgrade(args) => kuaizhan::cli::upgrade::run(args, &cli)?,
        Command::ChangeDomain(args) => kuaizhan::cli::change_domain::run(args, &cli)?,
        Command::UpdateSite(args) => kuaizhan::cli::update_site::run(args, &cli)?,
        Command::PublishPage(args) => kuaizhan::cli::publish_page::run(args, &cli)?,
        Command::SelfUpdate(args) => kuaizhan::cli::self_update::run(args)?,
    }

    Ok(())
}
