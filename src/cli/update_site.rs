use clap::Args;

use crate::cli::Cli;
use crate::output;

#[derive(Args)]
pub struct UpdateSiteArgs {
    /// New site name
    #[arg(short, long)]
    pub name: String,

    /// Site ids to update
    #[arg(short = 'i', long, value_delimiter = ',', required = true)]
    pub site_ids: Vec<u64>,
}

pub fn run(args: &UpdateSiteArgs, cli: &Cli) -> anyhow::Result<()> {
    let client = cli.client()?;

    for &site_id in &args.site_ids {
        client.update_site_info(site_id, &args.name)?;
        output::success(&format!("renamed site {site_id} to {:?}", args.name));
    }

    Ok(())
}
