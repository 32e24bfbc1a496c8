use crate::domain::entities::NeoBrowsePage;
use crate::domain::errors::CatalogError;
use crate::domain::ports::NeoCatalog;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

// The clients defined here are for reqwest clients to communicate with external services.

// NeoWs can stall on bad days; cap outbound calls rather than inheriting
// no timeout at all.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

// Error body shape NeoWs returns for rejected lookups.
#[derive(Debug, Deserialize)]
struct NeoWsErrorBody {
    error_message: String,
}

// Thin wrapper around reqwest for NASA NeoWs calls.
#[derive(Clone)]
pub struct NasaNeoClient {
    http: Client,
    base: Url,
    api_key: String,
}

impl NasaNeoClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, url::ParseError> {
        // A trailing slash makes Url::join append to the path instead of
        // replacing its last segment.
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        // Builder only fails when no TLS backend is available, which is the
        // same condition Client::new panics on.
        let http = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("failed to construct HTTP client");

        Ok(Self {
            http,
            base,
            api_key: api_key.into(),
        })
    }

    // Compose the endpoint URL and inject the credential as a query parameter.
    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        let mut url = self
            .base
            .join(path)
            .map_err(|err| CatalogError::Transport(err.to_string()))?;
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, CatalogError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.to_string()))?;
        let status = res.status();

        // Keep upstream status/message for diagnostics; the external
        // contract collapses every failure to the same 500.
        if !status.is_success() {
            let message = res
                .json::<NeoWsErrorBody>()
                .await
                .ok()
                .map(|body| body.error_message);
            return Err(CatalogError::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        Ok(res)
    }
}

#[async_trait]
impl NeoCatalog for NasaNeoClient {
    async fn browse(&self) -> Result<NeoBrowsePage, CatalogError> {
        let url = self.endpoint("neo/browse")?;
        let res = self.get(url).await?;

        // Parse the browse body into the typed page.
        res.json::<NeoBrowsePage>()
            .await
            .map_err(|err| CatalogError::Decode(err.to_string()))
    }

    async fn lookup(&self, neo_id: &str) -> Result<Value, CatalogError> {
        let url = self.endpoint(&format!("neo/{neo_id}"))?;
        let res = self.get(url).await?;

        // The detail record is passed through verbatim, so keep it untyped.
        res.json::<Value>()
            .await
            .map_err(|err| CatalogError::Decode(err.to_string()))
    }
}
