//! Source page scraping for the upload flow.
//!
//! The upload command mirrors an existing page: fetch its HTML and keep
//! everything inside `<body>`, which then becomes the script content
//! pushed through the batch publish operation.

use std::time::Duration;

use scraper::{Html, Selector};

use crate::error::{Error, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch `url` and return the inner HTML of its `<body>`.
pub fn fetch_page_body(url: &str) -> Result<String> {
    let agent = ureq::Agent::new_with_config(
        ureq::config::Config::builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build(),
    );
    let mut response = agent.get(url).call()?;
    let html = response.body_mut().read_to_string()?;
    extract_body(&html)
}

/// Inner HTML of the document's `<body>` element.
pub fn extract_body(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("body").map_err(|e| Error::Scrape(e.to_string()))?;
    match document.select(&selector).next() {
        Some(body) => Ok(body.inner_html()),
        None => Err(Error::Scrape("document has no <body> element".to_string())),
    }
}
