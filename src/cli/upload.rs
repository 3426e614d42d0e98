use clap::Args;

use crate::cli::Cli;
use crate::output;
use crate::scrape;

#[derive(Args)]
pub struct UploadArgs {
    /// Page whose <body> content gets mirrored
    #[arg(short, long)]
    pub source_url: String,

    /// Target site ids
    #[arg(short = 'i', long, value_delimiter = ',', required = true)]
    pub site_ids: Vec<u64>,

    /// Name given to the target pages
    #[arg(short, long)]
    pub name: String,

    /// How many pages to create per site when none are given
    #[arg(short, long, default_value_t = 1)]
    pub pages: usize,

    /// Template for created pages
    #[arg(short, long, default_value = "WHITE")]
    pub tpl: String,

    /// Use these existing pages instead of creating new ones
    #[arg(short = 'g', long, value_delimiter = ',')]
    pub page_ids: Vec<u64>,

    /// Poll an earlier batch task instead of submitting a new one
    #[arg(short = 'a', long)]
    pub task_id: Option<String>,
}

pub fn run(args: &UploadArgs, cli: &Cli) -> anyhow::Result<()> {
    let client = cli.client()?;

    let content = scrape::fetch_page_body(&args.source_url)?;
    output::info(&format!(
        "fetched {} bytes of body content from {}",
        content.len(),
        args.source_url
    ));

    if let Some(task_id) = &args.task_id {
        let data = client.batch_publish_page_js(&args.site_ids, &[], &content, true, Some(task_id))?;
        let task = data.task;
        output::info(&format!(
            "task {task_id}: {} ({} ok, {} failed, {} waiting)",
            task.task_status,
            task.succeed_pages.len(),
            task.failed_pages.len(),
            task.waiting_pages.len()
        ));
        for page in &task.failed_pages {
            output::warning(&format!(
                "page {} on site {}: {}",
                page.page_id, page.site_id, page.error_msg
            ));
        }
        return Ok(());
    }

    let mut all_page_ids = Vec::new();
    if !args.page_ids.is_empty() {
        for &page_id in &args.page_ids {
            client.update_page_name(page_id, &args.name)?;
        }
        all_page_ids.extend_from_slice(&args.page_ids);
    }

    for &site_id in &args.site_ids {
        client.publish_site(site_id)?;

        if args.page_ids.is_empty() {
            for _ in 0..args.pages {
                let page = client.create_site_page(site_id, &args.tpl)?;
                client.update_page_name(page.page_id, &args.name)?;
                all_page_ids.push(page.page_id);
            }
            output::info(&format!("created {} page(s) on site {site_id}", args.pages));
        }
    }

    if all_page_ids.is_empty() {
        anyhow::bail!("nothing to upload: no pages were given or created");
    }

    let data = client.batch_publish_page_js(&args.site_ids, &all_page_ids, &content, true, None)?;
    output::success(&format!(
        "submitted batch publish task {} for {} page(s)",
        data.task_id,
        all_page_ids.len()
    ));
    output::info(&format!(
        "poll it with: kuaizhan upload --source-url {} --site-ids {} --name {} --task-id {}",
        args.source_url,
        args.site_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(","),
        args.name,
        data.task_id
    ));

    Ok(())
}
