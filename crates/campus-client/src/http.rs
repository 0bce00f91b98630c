//! `reqwest`-backed discussion API client.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;

use campus_model::{Discussion, DiscussionReply, NewDiscussion, NewReply};

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};
use crate::gateway::DiscussionGateway;

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("campus-client/", env!("CARGO_PKG_VERSION"));

/// Discussion API client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDiscussionApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpDiscussionApi {
    /// Create a client for the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn discussions_url(&self, course_id: &str, chapter_id: &str) -> String {
        format!(
            "{}/courses/{}/chapters/{}/discussions",
            self.config.base_url, course_id, chapter_id
        )
    }

    fn discussion_url(&self, course_id: &str, chapter_id: &str, discussion_id: &str) -> String {
        format!(
            "{}/{}",
            self.discussions_url(course_id, chapter_id),
            discussion_id
        )
    }

    fn replies_url(&self) -> String {
        format!("{}/discussion-replies", self.config.base_url)
    }

    fn reply_children_url(&self, reply_id: &str) -> String {
        format!("{}/discussion-replies/{}/children", self.config.base_url, reply_id)
    }

    /// Bearer token for credentialed operations; fails before any I/O
    /// when none is configured.
    fn credentials(&self) -> Result<&str> {
        self.config
            .auth_token
            .as_deref()
            .ok_or(ClientError::MissingCredentials)
    }

    /// Check the status and decode the JSON body.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let error = ClientError::Api {
                status: status.as_u16(),
                message,
            };
            tracing::warn!("discussion API request failed: {error}");
            return Err(error);
        }

        response.json::<T>().await.map_err(|e| {
            let error = ClientError::from(e);
            tracing::warn!("discussion API response decode failed: {error}");
            error
        })
    }
}

impl DiscussionGateway for HttpDiscussionApi {
    async fn list_discussions(
        &self,
        course_id: &str,
        chapter_id: &str,
    ) -> Result<Vec<Discussion>> {
        let url = self.discussions_url(course_id, chapter_id);
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    async fn get_discussion(
        &self,
        course_id: &str,
        chapter_id: &str,
        discussion_id: &str,
    ) -> Result<Discussion> {
        let url = self.discussion_url(course_id, chapter_id, discussion_id);
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    async fn create_discussion(
        &self,
        course_id: &str,
        chapter_id: &str,
        payload: &NewDiscussion,
    ) -> Result<Discussion> {
        let token = self.credentials()?;
        let url = self.discussions_url(course_id, chapter_id);
        tracing::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn create_reply(&self, payload: &NewReply) -> Result<DiscussionReply> {
        let token = self.credentials()?;
        let url = self.replies_url();
        tracing::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn reply_children(&self, reply_id: &str) -> Result<Vec<DiscussionReply>> {
        let token = self.credentials()?;
        let url = self.reply_children_url(reply_id);
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).bearer_auth(token).send().await?;
        Self::handle_response(response).await
    }
}
