use clap::Args;

use crate::cli::Cli;
use crate::domains;
use crate::output;

#[derive(Args)]
pub struct CreateSiteArgs {
    /// How many sites to create
    #[arg(short, long, default_value_t = 5)]
    pub size: usize,

    /// Name for the created sites
    #[arg(short, long)]
    pub name: String,

    /// Site type
    #[arg(short = 't', long, default_value = "FAST")]
    pub site_type: String,

    /// Billing package opened for each new site
    #[arg(short, long, default_value = "SITE_EXCLUSIVE_YEAR")]
    pub business_type: String,
}

pub fn run(args: &CreateSiteArgs, cli: &Cli) -> anyhow::Result<()> {
    let client = cli.client()?;

    for _ in 0..args.size {
        let domain = domains::random_label();
        let site = client.create_site(&args.name, &domain, &args.site_type, true)?;
        let site_id: u64 = site
            .site_id
            .parse()
            .map_err(|_| anyhow::anyhow!("remote returned a non-numeric site id: {:?}", site.site_id))?;

        client.open_business_package(&args.business_type, site_id, None, None)?;
        output::success(&format!("created site {} ({})", site.site_id, site.site_domain));
    }

    Ok(())
}
