/// HTTP access to the CHZZK APIs
///
/// The search service only needs "GET this URL, give me JSON back", so that is the
/// whole of the `ChzzkFetcher` trait. `ChzzkHttpClient` is the reqwest-backed
/// implementation and owns headers and session cookies.
use crate::error::{AppError, AppResult};
use reqwest::{
    header::{HeaderMap, HeaderValue, COOKIE, USER_AGENT},
    Client as HttpClient, Url,
};
use serde_json::Value;

const CHZZK_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Issues a GET against an absolute URL and returns the decoded JSON body
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChzzkFetcher: Send + Sync {
    async fn fetch_json(&self, url: &Url) -> AppResult<Value>;
}

/// Naver session cookies sent with authenticated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChzzkAuth {
    pub nid_aut: String,
    pub nid_ses: String,
}

impl ChzzkAuth {
    fn cookie(&self) -> String {
        format!("NID_AUT={}; NID_SES={}", self.nid_aut, self.nid_ses)
    }
}

#[derive(Clone)]
pub struct ChzzkHttpClient {
    http_client: HttpClient,
    auth: Option<ChzzkAuth>,
}

impl ChzzkHttpClient {
    pub fn new(auth: Option<ChzzkAuth>) -> Self {
        Self {
            http_client: HttpClient::new(),
            auth,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CHZZK_USER_AGENT));

        if let Some(auth) = &self.auth {
            match HeaderValue::from_str(&auth.cookie()) {
                Ok(value) => {
                    headers.insert(COOKIE, value);
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Auth cookies are not valid header text, sending anonymously"
                    );
                }
            }
        }

        headers
    }
}

impl Default for ChzzkHttpClient {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait::async_trait]
impl ChzzkFetcher for ChzzkHttpClient {
    async fn fetch_json(&self, url: &Url) -> AppResult<Value> {
        let response = self
            .http_client
            .get(url.clone())
            .headers(self.headers())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "CHZZK API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(url = %url, bytes = response_text.len(), "Raw CHZZK API response");

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                "Failed to parse CHZZK response body"
            );
            AppError::malformed(url.path(), e)
        })
    }
}
