//! Typed client for the Kuaizhan website-building API.
//!
//! Every call is signed with the application's secret and dispatched
//! through a small operation catalog; responses arrive in a common
//! `{code, msg, data}` envelope. The companion binary drives the same
//! client for batch site management.
//!
//! ```no_run
//! use kuaizhan::Client;
//!
//! # fn main() -> kuaizhan::Result<()> {
//! let client = Client::new("app-key", "app-secret");
//! for site_id in client.site_ids()? {
//!     println!("site {site_id}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod domains;
pub mod error;
pub mod output;
pub mod scrape;
pub mod sign;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
