/*---------- Imports ----------*/
use crate::errors::RelayError;
use crate::models::cadence_import::UpstreamResponse;
use crate::utils::config::RelayConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

/// The single upstream call the relay makes.
#[async_trait]
pub trait CadenceImportApi: Send + Sync {
    /// Posts `payload` as JSON. `authorization` is forwarded byte for byte,
    /// and left off entirely when the caller sent none. Any status code the
    /// upstream answers with is a successful call.
    async fn create_cadence_import(
        &self,
        authorization: Option<&[u8]>,
        payload: &Value,
    ) -> Result<UpstreamResponse, RelayError>;
}

pub struct SalesloftClient {
    http: reqwest::Client,
    url: String,
}

impl SalesloftClient {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            url: config.cadence_imports_url.to_owned(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Debug for SalesloftClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesloftClient")
            .field("url", &self.url)
            .finish()
    }
}

#[async_trait]
impl CadenceImportApi for SalesloftClient {
    async fn create_cadence_import(
        &self,
        authorization: Option<&[u8]>,
        payload: &Value,
    ) -> Result<UpstreamResponse, RelayError> {
        let body = serde_json::to_vec(payload)?;

        let mut request = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        if let Some(raw_value) = authorization {
            let mut header_value = HeaderValue::from_bytes(raw_value)?;
            header_value.set_sensitive(true);

            request = request.header(AUTHORIZATION, header_value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        // Decoded as UTF-8 whatever charset the upstream declares.
        let raw_body = response.bytes().await?;
        let body = String::from_utf8_lossy(&raw_body).into_owned();

        Ok(UpstreamResponse { status, body })
    }
}
