use clap::Args;

use crate::cli::Cli;
use crate::output;

#[derive(Args)]
pub struct ListArgs {
    /// Show sites only, without their pages
    #[arg(short, long)]
    pub only_sites: bool,
}

pub fn run(args: &ListArgs, cli: &Cli) -> anyhow::Result<()> {
    let client = cli.client()?;
    let site_ids = client.site_ids()?;

    output::header(&format!(
        "{} site{}",
        site_ids.len(),
        if site_ids.len() == 1 { "" } else { "s" }
    ));
    println!(
        "{:<12} {:<20} {:<8} {:<28} {:<20} {:>4}",
        "SITE", "NAME", "TYPE", "DOMAIN", "PACKAGE", "DAYS"
    );
    for site_id in site_ids {
        // One unreadable site should not abort the listing.
        let info = match client.site_info(site_id) {
            Ok(info) => info,
            Err(e) => {
                output::error(&format!("site {site_id}: {e}"));
                continue;
            }
        };
        println!(
            "{:<12} {:<20} {:<8} {:<28} {:<20} {:>4}",
            site_id,
            info.site_name,
            info.site_type,
            info.domain,
            info.package_name,
            info.package_remaining_days
        );

        if args.only_sites {
            continue;
        }
        match client.page_names(site_id) {
            Ok(pages) => {
                for page in pages {
                    println!(
                        "    {:<12} {:<24} {}/{}",
                        page.page_id, page.title, info.domain, page.page_id
                    );
                }
            }
            Err(e) => output::warning(&format!("pages of site {site_id} unavailable: {e}")),
        }
    }

    Ok(())
}
