use clap::Args;

use crate::cli::Cli;
use crate::output;

#[derive(Args)]
pub struct UpgradeArgs {
    /// Billing package to open
    #[arg(short, long, default_value = "SITE_EXCLUSIVE_YEAR")]
    pub business_type: String,

    /// Site ids to upgrade
    #[arg(short = 'i', long, value_delimiter = ',', required = true)]
    pub site_ids: Vec<u64>,
}

pub fn run(args: &UpgradeArgs, cli: &Cli) -> anyhow::Result<()> {
    let client = cli.client()?;

    for &site_id in &args.site_ids {
        client.open_business_package(&args.business_type, site_id, None, None)?;
        output::success(&format!(
            "opened {} for site {site_id}",
            args.business_type
        ));
    }

    Ok(())
}
