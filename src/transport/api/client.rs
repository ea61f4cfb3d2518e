//! JSON client for the listing API.
//!
//! Every call resolves to `Option<T>`: transport errors, non-2xx statuses and
//! bodies that do not decode as `T` are logged here and surface to callers as
//! `None`. There are no retries and no timeouts.

use crate::domain::car::Car;
use crate::domain::search::SearchCriteria;
use crate::infra::config::SiteConfig;
use crate::transport::api::types::{MakesResponse, ModelsResponse};
use anyhow::Context;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// `base` is the API root, e.g. `http://127.0.0.1:8000/api`.
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let base = Url::parse(base).with_context(|| format!("invalid API base URL '{}'", base))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("API base URL '{}' cannot carry a path", base);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn from_config(config: &SiteConfig) -> anyhow::Result<Self> {
        Self::new(&config.api_base())
    }

    /// Appends percent-encoded path segments to the API root.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET `url` and decode the body as `T`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Option<T> {
        match self.try_fetch(url.clone()).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::error!(%url, "Error fetching data: {:#}", e);
                None
            }
        }
    }

    /// POST `body` as JSON to `url` and decode the response as `T`.
    pub async fn post_json<B, T>(&self, url: Url, body: &B) -> Option<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.try_post(url.clone(), body).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::error!(%url, "Error posting data: {:#}", e);
                None
            }
        }
    }

    async fn try_fetch<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<T> {
        let response = self.http.get(url).send().await.context("request failed")?;
        decode(response).await
    }

    async fn try_post<B, T>(&self, url: Url, body: &B) -> anyhow::Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // `.json` sets `Content-Type: application/json`.
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .context("request failed")?;
        decode(response).await
    }

    pub async fn featured_cars(&self) -> Option<Vec<Car>> {
        self.fetch_json(self.endpoint(&["featured"])).await
    }

    pub async fn all_cars(&self) -> Option<Vec<Car>> {
        self.fetch_json(self.endpoint(&["cars"])).await
    }

    pub async fn car(&self, id: i64) -> Option<Car> {
        self.fetch_json(self.endpoint(&["cars", &id.to_string()])).await
    }

    pub async fn makes(&self) -> Option<MakesResponse> {
        self.fetch_json(self.endpoint(&["makes"])).await
    }

    pub async fn models(&self, make: &str) -> Option<ModelsResponse> {
        self.fetch_json(self.endpoint(&["models", make])).await
    }

    pub async fn search(&self, criteria: &SearchCriteria) -> Option<Vec<Car>> {
        self.post_json(self.endpoint(&["cars", "search"]), criteria)
            .await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> anyhow::Result<T> {
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("HTTP error! status: {}", status);
    }
    response.json::<T>().await.context("unexpected response body")
}
