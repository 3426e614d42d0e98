//! Operation catalog: one const descriptor per remote operation.

use super::types::*;
use super::Endpoint;

pub const CREATE_SITE: Endpoint<CreateSiteRequest, CreateSiteData> =
    Endpoint::post_form("/tbk/createSite");

pub const GET_SITE_IDS: Endpoint<GetSiteIdsRequest, SiteIdsData> =
    Endpoint::post_form("/tbk/getSiteIds");

pub const GET_PAGE_IDS: Endpoint<GetPageIdsRequest, PageIdsData> =
    Endpoint::post_form("/tbk/getPageIds");

pub const CREATE_SITE_PAGE: Endpoint<CreateSitePageRequest, CreateSitePageData> =
    Endpoint::post_form("/tbk/createSitePage");

pub const PUBLISH_SITE: Endpoint<PublishSiteRequest, PublishSiteData> =
    Endpoint::post_form("/tbk/publishSite");

pub const PUBLISH_PAGE: Endpoint<PublishPageRequest, PublishPageData> =
    Endpoint::post_form("/tbk/publishPage");

pub const DELETE_SITE_PAGE: Endpoint<DeleteSitePageRequest, DeleteSitePageData> =
    Endpoint::post_form("/tbk/deleteSitePage");

/// Rename sends the typed request as a JSON body.
pub const UPDATE_PAGE_NAME: Endpoint<UpdatePageNameRequest, UpdatePageNameData> =
    Endpoint::post_json("/tbk/updatePageName");

/// The page name listing is the catalog's only GET; its data is a bare
/// array.
pub const GET_PAGE_NAMES: Endpoint<GetPageNamesRequest, Vec<PageNameEntry>> =
    Endpoint::get("/tbk/getPageName");

pub const GET_SITE_INFO: Endpoint<GetSiteInfoRequest, SiteInfoData> =
    Endpoint::post_form("/tbk/getSiteInfo");

pub const MODIFY_PAGE_JS: Endpoint<ModifyPageJsRequest, ModifyPageJsData> =
    Endpoint::post_form("/tbk/modifyPageJs");

pub const BATCH_PUBLISH_PAGE_JS: Endpoint<BatchPublishPageJsRequest, BatchPublishData> =
    Endpoint::post_json("/tbk/batchModifyPublishPageJs");

pub const OPEN_BUSINESS_PACKAGE: Endpoint<OpenBusinessPackageRequest, OpenBusinessPackageData> =
    Endpoint::post_form("/agent/openBusinessPackage");

pub const CHANGE_DOMAIN: Endpoint<ChangeDomainRequest, ChangeDomainData> =
    Endpoint::post_form("/tbk/changeDomain");

pub const UPDATE_SITE_INFO: Endpoint<UpdateSiteInfoRequest, UpdateSiteInfoData> =
    Endpoint::post_form("/tbk/updateSiteSetting");
