use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Result, WordBankError};

/// A single GET against one of the upstream word services.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
}

impl HttpRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers.push(("Authorization", format!("Bearer {token}")));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Fetches raw response bodies. Exactly one attempt is made per call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: HttpRequest) -> Result<Vec<u8>>;
}

/// Performs the request and decodes the body as JSON.
pub async fn get_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: HttpRequest,
) -> Result<T> {
    let body = transport.get(request).await?;
    serde_json::from_slice(&body).map_err(|error| WordBankError::Decoding(error.to_string()))
}

pub(crate) fn parse_url(base: &str) -> Result<Url> {
    Url::parse(base).map_err(|error| WordBankError::InvalidUrl(format!("{base}: {error}")))
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: HttpRequest) -> Result<Vec<u8>> {
        debug!(url = %request.url, "GET");
        let mut req = self.client.get(request.url.clone());
        for (name, value) in &request.headers {
            req = req.header(*name, value);
        }
        let res = req
            .send()
            .await
            .map_err(|error| WordBankError::Network(error.to_string()))?;
        let status = res.status();
        if status != StatusCode::OK {
            return Err(WordBankError::Network(format!(
                "HTTP {} {} from {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                request.url
            )));
        }
        let body = res
            .bytes()
            .await
            .map_err(|error| WordBankError::Network(error.to_string()))?;
        Ok(body.to_vec())
    }
}
