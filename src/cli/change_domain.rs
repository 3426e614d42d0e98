use clap::Args;

use crate::cli::Cli;
use crate::domains;
use crate::output;

#[derive(Args)]
pub struct ChangeDomainArgs {
    /// Site ids to move to fresh domains
    #[arg(short = 'i', long, value_delimiter = ',', required = true)]
    pub site_ids: Vec<u64>,
}

pub fn run(args: &ChangeDomainArgs, cli: &Cli) -> anyhow::Result<()> {
    let client = cli.client()?;

    for &site_id in &args.site_ids {
        let domain = domains::random_label();
        client.change_domain(site_id, &domain, true)?;
        output::success(&format!("site {site_id} moved to {domain}"));
    }

    Ok(())
}
