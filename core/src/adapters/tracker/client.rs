//! Tracker API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;
use urlencoding::encode;

use super::xml::parse_document;
use crate::config::Config;
use crate::domain::document::Node;
use crate::domain::ports::{StoryFilter, TrackerClient, RESULT_LIMIT};
use crate::error::TrackerError;

/// Header carrying the static API token (`X-TrackerToken`)
pub const TOKEN_HEADER: &str = "x-trackertoken";

/// HTTP implementation of the tracker client
pub struct HttpTrackerClient {
    http: Client,
    base_url: String,
}

impl HttpTrackerClient {
    pub fn new(config: &Config) -> Result<Self, TrackerError> {
        let mut headers = HeaderMap::new();
        let mut token =
            HeaderValue::from_str(&config.api_token).map_err(|_| TrackerError::InvalidToken)?;
        token.set_sensitive(true);
        headers.insert(HeaderName::from_static(TOKEN_HEADER), token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/xml"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for a resource, with the filter query when given
    pub fn resource_url(&self, resource: &str, filter: Option<&StoryFilter>) -> String {
        let url = format!("{}{}", self.base_url, resource);
        match filter {
            Some(filter) => format!(
                "{}?filter={}&limit={}",
                url,
                encode(&filter.to_filter_string()),
                RESULT_LIMIT
            ),
            None => url,
        }
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Node, TrackerError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            parse_document(&body)
        } else if status.as_u16() == 401 {
            Err(TrackerError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(TrackerError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl TrackerClient for HttpTrackerClient {
    async fn fetch(
        &self,
        resource: &str,
        filter: Option<&StoryFilter>,
    ) -> Result<Node, TrackerError> {
        let url = self.resource_url(resource, filter);
        tracing::debug!(%url, "Fetching tracker resource");

        let response = self.http.get(&url).send().await?;
        self.handle_response(response).await
    }
}
