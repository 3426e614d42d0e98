use clap::Args;

use crate::cli::Cli;
use crate::output;

#[derive(Args)]
pub struct DeletePageArgs {
    /// Page ids to delete
    #[arg(short = 'i', long, value_delimiter = ',', required = true)]
    pub page_ids: Vec<u64>,
}

pub fn run(args: &DeletePageArgs, cli: &Cli) -> anyhow::Result<()> {
    let client = cli.client()?;

    for &page_id in &args.page_ids {
        client.delete_site_page(page_id)?;
        output::success(&format!("deleted page {page_id}"));
    }

    Ok(())
}
