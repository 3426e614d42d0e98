//! Wire shapes: the response envelope and the request/response pair for
//! every catalog operation.
//!
//! Request structs serialize with their camelCase wire names; adding an
//! operation means adding its two shapes here and one descriptor in
//! [`ops`](super::ops). Response payloads default-fill missing fields the
//! way the remote has been observed to omit them.

use serde::{Deserialize, Serialize};

/// Envelope code the server uses for success.
pub const ENVELOPE_OK: i64 = 200;

/// The `{code, msg, data}` wrapper common to every response.
///
/// One endpoint (create site) has shipped the message under `message`
/// instead of `msg`; the alias accepts either spelling everywhere rather
/// than betting on per-endpoint uniformity.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default, alias = "message")]
    pub msg: String,
    pub data: Option<T>,
}

// --- create site ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteRequest {
    pub site_name: String,
    pub domain: String,
    pub site_type: String,
    pub https_forward: bool,
}

/// Unlike every other payload this one uses snake_case wire keys, and the
/// site id arrives as a string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateSiteData {
    pub site_id: String,
    pub site_domain: String,
    pub site_status: String,
}

// --- site / page id listings ---

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetSiteIdsRequest {}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteIdsData {
    pub site_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPageIdsRequest {
    pub site_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageIdsData {
    pub page_ids: Vec<u64>,
}

// --- page creation and publishing ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSitePageRequest {
    pub site_id: u64,
    pub tpl: String,
}

/// Successive API revisions have returned the new page id, the page URL,
/// or both; keep both and let the absent one default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSitePageData {
    pub page_id: u64,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishSiteRequest {
    pub site_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PublishSiteData {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishPageRequest {
    pub site_id: u64,
    pub page_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PublishPageData {
    pub url: String,
}

// --- page maintenance ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSitePageRequest {
    pub page_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeleteSitePageData {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageNameRequest {
    pub page_id: u64,
    pub page_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdatePageNameData {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPageNamesRequest {
    pub site_id: u64,
}

/// `getPageName` returns its list directly as the envelope data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageNameEntry {
    pub page_id: u64,
    pub title: String,
}

// --- site info and metadata ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSiteInfoRequest {
    pub site_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteInfoData {
    pub site_id: String,
    pub site_name: String,
    pub site_type: String,
    pub domain: String,
    pub package_name: String,
    pub package_remaining_days: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteInfoRequest {
    pub site_id: u64,
    pub site_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdateSiteInfoData {
    pub status: String,
}

// --- script content ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyPageJsRequest {
    pub site_id: u64,
    /// The modify endpoint addresses pages by string id.
    pub page_id: String,
    pub content: String,
    pub is_encrypt_content: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModifyPageJsData {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPublishPageJsRequest {
    pub site_ids: Vec<u64>,
    pub page_ids: Vec<u64>,
    pub content: String,
    pub is_secure: bool,
    /// Set when resuming an earlier batch task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

/// Data payload of the batch operation.
///
/// A fresh submission answers with a bare task id string; polling an
/// existing task answers with the full [`Task`] record. The wire carries
/// no discriminator, so decoding tries the string form first and falls
/// back to the record (see the `Deserialize` impl). Exactly one of the
/// two fields ends up populated; the other keeps its default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchPublishData {
    pub task_id: String,
    pub task: Task,
}

impl<'de> Deserialize<'de> for BatchPublishData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        if let Ok(task_id) = String::deserialize(&raw) {
            return Ok(BatchPublishData {
                task_id,
                task: Task::default(),
            });
        }
        let task = Task::deserialize(&raw).map_err(serde::de::Error::custom)?;
        Ok(BatchPublishData {
            task_id: String::new(),
            task,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub task_create_time: i64,
    pub task_status: String,
    pub succeed_pages: Vec<PageOutcome>,
    pub failed_pages: Vec<PageOutcome>,
    pub waiting_pages: Vec<PageOutcome>,
}

/// Per-page outcome inside a batch task. `site_id` shows up in live
/// traffic even though older clients never read it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageOutcome {
    pub page_id: u64,
    pub site_id: u64,
    pub status: String,
    pub error_msg: String,
}

// --- billing and domains ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenBusinessPackageRequest {
    pub business_type: String,
    pub site_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpenBusinessPackageData {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDomainRequest {
    pub site_id: u64,
    pub domain: String,
    pub https_forward: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChangeDomainData {
    pub status: String,
}
