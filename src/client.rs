//! Client facade: credential pair, shared HTTP agent, and one typed
//! method per catalog operation.

use std::time::Duration;

use crate::api::ops;
use crate::api::types::*;
use crate::error::Result;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://cloud.kuaizhan.com/api/v1";

/// Global timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Handle to the remote API.
///
/// Immutable after construction and sharable across threads; all
/// operations go through one blocking agent. The secret is signing key
/// material only and is never transmitted.
pub struct Client {
    app_key: String,
    app_secret: String,
    base_url: String,
    agent: ureq::Agent,
    debug: bool,
}

/// Builder returned by [`Client::builder`].
pub struct ClientBuilder {
    app_key: String,
    app_secret: String,
    base_url: String,
    timeout: Duration,
    debug: bool,
}

impl ClientBuilder {
    /// Point the client at a different API root, e.g. a staging host or a
    /// local test server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Emit full request and response wire captures through
    /// `tracing::debug!`.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn build(self) -> Client {
        let agent = ureq::Agent::new_with_config(
            ureq::config::Config::builder()
                .timeout_global(Some(self.timeout))
                .http_status_as_error(false)
                .build(),
        );
        Client {
            app_key: self.app_key,
            app_secret: self.app_secret,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            agent,
            debug: self.debug,
        }
    }
}

impl Client {
    /// Client for the production API with default settings.
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Client {
        Client::builder(app_key, app_secret).build()
    }

    pub fn builder(app_key: impl Into<String>, app_secret: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }

    pub(crate) fn app_key(&self) -> &str {
        &self.app_key
    }

    pub(crate) fn app_secret(&self) -> &str {
        &self.app_secret
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn agent(&self) -> &ureq::Agent {
        &self.agent
    }

    pub(crate) fn debug(&self) -> bool {
        self.debug
    }

    pub fn create_site(
        &self,
        site_name: &str,
        domain: &str,
        site_type: &str,
        https_forward: bool,
    ) -> Result<CreateSiteData> {
        ops::CREATE_SITE.invoke(
            self,
            &CreateSiteRequest {
                site_name: site_name.to_string(),
                domain: domain.to_string(),
                site_type: site_type.to_string(),
                https_forward,
            },
        )
    }

    /// Ids of every site the application owns.
    pub fn site_ids(&self) -> Result<Vec<u64>> {
        let data = ops::GET_SITE_IDS.invoke(self, &GetSiteIdsRequest::default())?;
        Ok(data.site_ids)
    }

    pub fn page_ids(&self, site_id: u64) -> Result<Vec<u64>> {
        let data = ops::GET_PAGE_IDS.invoke(self, &GetPageIdsRequest { site_id })?;
        Ok(data.page_ids)
    }

    pub fn create_site_page(&self, site_id: u64, tpl: &str) -> Result<CreateSitePageData> {
        ops::CREATE_SITE_PAGE.invoke(
            self,
            &CreateSitePageRequest {
                site_id,
                tpl: tpl.to_string(),
            },
        )
    }

    pub fn publish_site(&self, site_id: u64) -> Result<PublishSiteData> {
        ops::PUBLISH_SITE.invoke(self, &PublishSiteRequest { site_id })
    }

    pub fn publish_page(&self, site_id: u64, page_id: u64) -> Result<PublishPageData> {
        ops::PUBLISH_PAGE.invoke(self, &PublishPageRequest { site_id, page_id })
    }

    pub fn delete_site_page(&self, page_id: u64) -> Result<DeleteSitePageData> {
        ops::DELETE_SITE_PAGE.invoke(self, &DeleteSitePageRequest { page_id })
    }

    pub fn update_page_name(&self, page_id: u64, page_name: &str) -> Result<UpdatePageNameData> {
        ops::UPDATE_PAGE_NAME.invoke(
            self,
            &UpdatePageNameRequest {
                page_id,
                page_name: page_name.to_string(),
            },
        )
    }

    /// Titles of every page of a site, with their page ids.
    pub fn page_names(&self, site_id: u64) -> Result<Vec<PageNameEntry>> {
        ops::GET_PAGE_NAMES.invoke(self, &GetPageNamesRequest { site_id })
    }

    pub fn site_info(&self, site_id: u64) -> Result<SiteInfoData> {
        ops::GET_SITE_INFO.invoke(self, &GetSiteInfoRequest { site_id })
    }

    /// Replace the script content of one page. The modify endpoint
    /// addresses pages by string id, unlike the rest of the catalog.
    pub fn modify_page_js(
        &self,
        site_id: u64,
        page_id: &str,
        content: &str,
        is_encrypt_content: bool,
    ) -> Result<ModifyPageJsData> {
        ops::MODIFY_PAGE_JS.invoke(
            self,
            &ModifyPageJsRequest {
                site_id,
                page_id: page_id.to_string(),
                content: content.to_string(),
                is_encrypt_content,
            },
        )
    }

    /// Push `content` to every listed page and publish, as one remote
    /// task. Without `task_id` this submits a new task and the result
    /// carries its id; with `task_id` it polls that task and the result
    /// carries the task record.
    pub fn batch_publish_page_js(
        &self,
        site_ids: &[u64],
        page_ids: &[u64],
        content: &str,
        is_secure: bool,
        task_id: Option<&str>,
    ) -> Result<BatchPublishData> {
        ops::BATCH_PUBLISH_PAGE_JS.invoke(
            self,
            &BatchPublishPageJsRequest {
                site_ids: site_ids.to_vec(),
                page_ids: page_ids.to_vec(),
                content: content.to_string(),
                is_secure,
                task_id: task_id.map(str::to_string),
            },
        )
    }

    /// Open a paid package for a site. `app_id` and `phone_no` are only
    /// sent when given.
    pub fn open_business_package(
        &self,
        business_type: &str,
        site_id: u64,
        app_id: Option<&str>,
        phone_no: Option<&str>,
    ) -> Result<OpenBusinessPackageData> {
        ops::OPEN_BUSINESS_PACKAGE.invoke(
            self,
            &OpenBusinessPackageRequest {
                business_type: business_type.to_string(),
                site_id,
                app_id: app_id.map(str::to_string),
                phone_no: phone_no.map(str::to_string),
            },
        )
    }

    pub fn change_domain(
        &self,
        site_id: u64,
        domain: &str,
        https_forward: bool,
    ) -> Result<ChangeDomainData> {
        ops::CHANGE_DOMAIN.invoke(
            self,
            &ChangeDomainRequest {
                site_id,
                domain: domain.to_string(),
                https_forward,
            },
        )
    }

    pub fn update_site_info(&self, site_id: u64, site_name: &str) -> Result<UpdateSiteInfoData> {
        ops::UPDATE_SITE_INFO.invoke(
            self,
            &UpdateSiteInfoRequest {
                site_id,
                site_name: site_name.to_string(),
            },
        )
    }
}
