use crate::core::{Credential, Transport};
use crate::utils::error::{InspectorError, Result};
use reqwest::{Client, StatusCode};
use url::Url;

/// 以 HTTP Basic 認證呼叫 JIRA，每次只送出一個請求、不重試
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &Url, credential: &Credential) -> Result<serde_json::Value> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url.clone())
            .basic_auth(credential.email(), Some(credential.token()))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        match status {
            s if s.is_success() => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(InspectorError::AuthError {
                status: status.as_u16(),
                url: url.to_string(),
            }),
            _ => Err(InspectorError::TransportError {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}
