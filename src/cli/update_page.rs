use clap::Args;

use crate::cli::Cli;
use crate::output;

#[derive(Args)]
pub struct UpdatePageArgs {
    /// New page name
    #[arg(short, long)]
    pub name: String,

    /// Page ids to rename
    #[arg(short = 'i', long, value_delimiter = ',', required = true)]
    pub page_ids: Vec<u64>,
}

pub fn run(args: &UpdatePageArgs, cli: &Cli) -> anyhow::Result<()> {
    let client = cli.client()?;

    for &page_id in &args.page_ids {
        client.update_page_name(page_id, &args.name)?;
        output::success(&format!("renamed page {page_id} to {:?}", args.name));
    }

    Ok(())
}
