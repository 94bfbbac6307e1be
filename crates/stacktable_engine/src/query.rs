use url::Url;

use crate::fetch::FetchSettings;
use crate::{FailureKind, FetchError};

/// Sort and paging parameters for one page fetch. `page_index` is 0-based
/// here; the endpoint's `page` parameter is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub sort: String,
    pub order: String,
    pub page_index: u32,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub endpoint: String,
    pub site: String,
    pub filter: String,
    pub page_size: u32,
    pub fetch: FetchSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.stackexchange.com/2.2/questions".to_string(),
            site: "stackoverflow".to_string(),
            filter: "default".to_string(),
            page_size: 10,
            fetch: FetchSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Default settings aimed at a different endpoint; used by tests.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// Builds the search URL for one page. An empty `order` still appears as an
/// empty parameter, matching what the sort header emits before the user
/// picks a direction.
pub fn request_url(config: &EngineConfig, request: &PageRequest) -> Result<Url, FetchError> {
    let pagesize = config.page_size.to_string();
    let page = (request.page_index + 1).to_string();
    let params = [
        ("site", config.site.as_str()),
        ("order", request.order.as_str()),
        ("sort", request.sort.as_str()),
        ("filter", config.filter.as_str()),
        ("pagesize", pagesize.as_str()),
        ("page", page.as_str()),
    ];
    Url::parse_with_params(&config.endpoint, params)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}
