//! Upstream API client.
//!
//! # Responsibilities
//! - Build resource URLs from the configured base
//! - Issue a single GET per relayed request
//! - Turn connection errors, non-2xx answers and bad bodies into `UpstreamError`
//!
//! # Design Decisions
//! - Constructed once at startup and shared read-only
//! - No timeout or retry; the call runs to completion or fails
//! - Keys are pushed as encoded path segments, never spliced as raw text

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::relay::error::UpstreamError;
use crate::relay::resource::Resource;

/// Client for the public-data API behind every relay route.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Create a client for the configured upstream.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(&config.base_url)?;
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(UpstreamError::Transport)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full upstream URL for `resource`, with `key` as the last path segment.
    pub fn resource_url(&self, resource: Resource, key: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(resource.upstream_path())
                .extend(key);
        }

        let query = resource.upstream_query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    /// GET `url` and decode the body as JSON.
    pub async fn get_json(&self, url: Url) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let response = response.error_for_status().map_err(UpstreamError::Status)?;

        response
            .json::<Value>()
            .await
            .map_err(UpstreamError::Decode)
    }
}
