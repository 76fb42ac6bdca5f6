//! HTTP transport for the TrafficView backend.
//!
//! Wraps a [`reqwest::Client`] with the backend's base URL, a bounded
//! per-request timeout, and envelope decoding. Transport failures, non-2xx
//! statuses and non-success envelope codes all surface as [`TrafficViewError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::error::{Result, TrafficViewError};
use crate::models::{Envelope, QueryPage, QueryParams};
use crate::query::RecordSearch;

/// Thin client for the backend's JSON-over-HTTP interface.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a client for the given base URL with a per-request timeout.
    ///
    /// A trailing slash on `base_url` is tolerated; endpoint paths always
    /// start with `/`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET` an endpoint and return the unwrapped envelope `data`.
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.client.get(self.url(path)).send().await?.error_for_status()?;
        unwrap_envelope(resp.json::<Envelope<T>>().await?)
    }

    /// `GET` an endpoint with query-string parameters.
    pub async fn get_data_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let resp = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        unwrap_envelope(resp.json::<Envelope<T>>().await?)
    }

    /// `POST` a JSON body to an endpoint and return the unwrapped `data`.
    pub async fn post_data<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        unwrap_envelope(resp.json::<Envelope<T>>().await?)
    }
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T> {
    if envelope.code != config::SUCCESS_CODE {
        return Err(TrafficViewError::Api {
            code: envelope.code,
            msg: envelope.msg,
        });
    }
    envelope
        .data
        .ok_or_else(|| TrafficViewError::Shape("success envelope without data field".into()))
}

#[async_trait]
impl RecordSearch for ApiClient {
    async fn search(&self, params: &QueryParams) -> Result<QueryPage> {
        self.post_data(config::QUERY_PATH, params).await
    }
}
