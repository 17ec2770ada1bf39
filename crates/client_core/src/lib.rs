use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Character, protocol::ResponseEnvelope};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Endpoint of the people listing every default service talks to.
pub const PEOPLE_URL: &str = "http://swapi.co/api/people/";

#[async_trait]
pub trait FetchService: Send + Sync {
    /// Issues one GET to the people listing and resolves to the raw response.
    ///
    /// Transport, status and decode failures are returned as-is.
    async fn fetch_characters(&self) -> Result<ResponseEnvelope>;
}

#[async_trait]
impl<T> FetchService for Arc<T>
where
    T: FetchService + ?Sized,
{
    async fn fetch_characters(&self) -> Result<ResponseEnvelope> {
        (**self).fetch_characters().await
    }
}

pub struct MissingFetchService;

#[async_trait]
impl FetchService for MissingFetchService {
    async fn fetch_characters(&self) -> Result<ResponseEnvelope> {
        Err(anyhow!("character fetch service is unavailable"))
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetchService {
    http: Client,
    url: String,
}

impl HttpFetchService {
    pub fn new() -> Self {
        Self::with_url(PEOPLE_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpFetchService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchService for HttpFetchService {
    async fn fetch_characters(&self) -> Result<ResponseEnvelope> {
        debug!(url = %self.url, "requesting characters");
        let res = self.http.get(&self.url).send().await?.error_for_status()?;
        let status = res.status().as_u16();
        let headers = res
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let data = res.json().await?;
        Ok(ResponseEnvelope {
            status,
            headers,
            data,
        })
    }
}

/// View-bound state of [`MainController`].
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Scope {
    pub users: Option<Vec<Character>>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch characters: {source}")]
    Fetch { source: anyhow::Error },
    #[error("character response body is not a JSON object (status {status})")]
    NonObjectBody { status: u16 },
}

pub struct MainController<S: FetchService> {
    service: S,
    pub scope: Scope,
}

impl<S: FetchService> MainController<S> {
    /// Builds the controller and runs the initial load.
    ///
    /// A failed initial load never reaches the caller: `scope.users` stays
    /// unset and the error is only logged.
    pub async fn new(service: S) -> Self {
        let mut controller = Self::unloaded(service);
        if let Err(error) = controller.load_characters().await {
            warn!(%error, "initial character load failed; users left unset");
        }
        controller
    }

    pub fn unloaded(service: S) -> Self {
        Self {
            service,
            scope: Scope::default(),
        }
    }

    /// Fetches the listing and replaces `scope.users` with `data.results`.
    ///
    /// On failure, or when the body is not an object, the scope is left as it was.
    pub async fn load_characters(&mut self) -> Result<(), LoadError> {
        let response = self
            .service
            .fetch_characters()
            .await
            .map_err(|source| LoadError::Fetch { source })?;
        if !response.data.is_object() {
            return Err(LoadError::NonObjectBody {
                status: response.status,
            });
        }

        let users = response.results().map(<[Character]>::to_vec);
        match &users {
            Some(users) => info!(count = users.len(), "characters loaded"),
            None => debug!(
                status = response.status,
                "response body has no results array"
            ),
        }
        self.scope.users = users;
        Ok(())
    }

    pub fn users(&self) -> Option<&[Character]> {
        self.scope.users.as_deref()
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
