//! GitHub adapter
//!
//! Implements [`RawFileSource`] against the raw content host and
//! [`RepositoryLister`] against the repository search API, both with a
//! blocking `reqwest` client shared for the whole run.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::config::GithubEndpoints;
use crate::core::models::RepositoryId;
use crate::core::ports::{RawFileSource, RawResponse, RepositoryLister};
use crate::error::{AuditError, Result};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const SEARCH_PAGE_SIZE: usize = 100;
// The search API never returns more than 1000 results
const SEARCH_RESULT_LIMIT: usize = 1000;
const API_MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("repo-audit/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding an optional GitHub token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// GitHub HTTP client
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    endpoints: GithubEndpoints,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    total_count: usize,
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    full_name: String,
}

impl GithubClient {
    /// Build a client for the given endpoints
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Fetch`] if the HTTP client cannot be built.
    pub fn new(endpoints: GithubEndpoints, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AuditError::Fetch {
                url: endpoints.raw_url.clone(),
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoints,
            token,
        })
    }

    /// Build a client, reading the token from `GITHUB_TOKEN`
    pub fn from_env(endpoints: GithubEndpoints) -> Result<Self> {
        let token = std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty());
        if token.is_none() {
            log::debug!("{TOKEN_ENV} not set, using unauthenticated requests");
        }
        Self::new(endpoints, token)
    }

    /// URL of a file on a branch
    ///
    /// Every path segment is percent-encoded.
    pub fn raw_url(&self, repository: &RepositoryId, branch: &str, path: &str) -> Result<Url> {
        let mut url = parse_base(&self.endpoints.raw_url)?;
        url.path_segments_mut()
            .map_err(|()| invalid_base(&self.endpoints.raw_url))?
            .pop_if_empty()
            .extend([repository.owner(), repository.name(), branch])
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    fn search_url(&self, organization: &str, topic: &str, page: usize) -> Result<Url> {
        let mut url = parse_base(&self.endpoints.api_url)?;
        url.path_segments_mut()
            .map_err(|()| invalid_base(&self.endpoints.api_url))?
            .pop_if_empty()
            .extend(["search", "repositories"]);
        url.query_pairs_mut()
            .append_pair("q", &format!("org:{organization} topic:{topic}"))
            .append_pair("per_page", &SEARCH_PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    fn get(&self, url: &Url, accept: Option<&str>) -> Result<Response> {
        let mut request = self.client.get(url.clone());
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        request.send().map_err(|e| AuditError::Fetch {
            url: url.to_string(),
            message: if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                format!("connection failed: {e}")
            } else {
                e.to_string()
            },
        })
    }
}

fn parse_base(base: &str) -> Result<Url> {
    Url::parse(base).map_err(|e| AuditError::Fetch {
        url: base.to_string(),
        message: format!("invalid base URL: {e}"),
    })
}

fn invalid_base(base: &str) -> AuditError {
    AuditError::Fetch {
        url: base.to_string(),
        message: "base URL cannot carry a path".to_string(),
    }
}

impl RawFileSource for GithubClient {
    fn get_raw(&self, repository: &RepositoryId, branch: &str, path: &str) -> Result<RawResponse> {
        let url = self.raw_url(repository, branch, path)?;
        log::debug!("GET {url}");

        let response = self.get(&url, None)?;
        let status = response.status();
        if !status.is_success() {
            return Ok(RawResponse::Missing(status.as_u16()));
        }

        response.text().map(RawResponse::Found).map_err(|e| AuditError::Fetch {
            url: url.to_string(),
            message: format!("failed to read body: {e}"),
        })
    }
}

impl RepositoryLister for GithubClient {
    fn list_by_topic(&self, organization: &str, topic: &str) -> Result<Vec<String>> {
        let mut repositories = Vec::new();

        for page in 1.. {
            let url = self.search_url(organization, topic, page)?;
            log::debug!("GET {url}");

            let response = self.get(&url, Some(API_MEDIA_TYPE))?;
            let status = response.status();
            if status != StatusCode::OK {
                return Err(AuditError::Fetch {
                    url: url.to_string(),
                    message: format!("HTTP {status}"),
                });
            }

            let body: SearchPage = response.json().map_err(|e| AuditError::Fetch {
                url: url.to_string(),
                message: format!("unexpected search response: {e}"),
            })?;

            let received = body.items.len();
            repositories.extend(body.items.into_iter().map(|item| item.full_name));

            if received < SEARCH_PAGE_SIZE
                || repositories.len() >= body.total_count
                || repositories.len() >= SEARCH_RESULT_LIMIT
            {
                break;
            }
        }

        Ok(repositories)
    }
}
