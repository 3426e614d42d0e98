use clap::Args;

use crate::cli::Cli;
use crate::output;

#[derive(Args)]
pub struct PublishPageArgs {
    /// Site the page belongs to
    #[arg(short = 'i', long)]
    pub site_id: u64,

    /// Page to publish
    #[arg(short, long)]
    pub page_id: u64,
}

pub fn run(args: &PublishPageArgs, cli: &Cli) -> anyhow::Result<()> {
    let client = cli.client()?;

    let site = client.publish_site(args.site_id)?;
    output::success(&format!("published site {}: {}", args.site_id, site.url));

    let page = client.publish_page(args.site_id, args.page_id)?;
    output::success(&format!("published page {}: {}", args.page_id, page.url));

    Ok(())
}
