use reqwest::Client;

use crate::config::ResourcesConfig;
use crate::resources::error::FetchError;
use crate::resources::model::{take_top, CodingResource};

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the coding resources listing.
///
/// Every call to [`ResourceClient::fetch_top_resources`] issues exactly one
/// `GET` against the configured endpoint. There is no retry and no request
/// timeout: the call settles when the server answers or the transport fails.
#[derive(Clone)]
pub struct ResourceClient {
    client: Client,
    endpoint: String,
    limit: usize,
}

impl ResourceClient {
    pub fn new(config: &ResourcesConfig) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: config.endpoint.clone(),
            limit: config.limit,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Fetch the listing and keep the first `limit` entries in received order.
    pub async fn fetch_top_resources(&self) -> Result<Vec<CodingResource>, FetchError> {
        let result = self.fetch_all().await;
        match result {
            Ok(all) => {
                let received = all.len();
                let top = take_top(all, self.limit);
                tracing::info!(
                    endpoint = %self.endpoint,
                    received,
                    kept = top.len(),
                    "Loaded coding resources"
                );
                Ok(top)
            }
            Err(err) => {
                tracing::error!(
                    endpoint = %self.endpoint,
                    kind = err.kind(),
                    error = %err.details(),
                    "Failed to load coding resources"
                );
                Err(err)
            }
        }
    }

    async fn fetch_all(&self) -> Result<Vec<CodingResource>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            endpoint: self.endpoint.clone(),
            source,
        })
    }
}
