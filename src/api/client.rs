//! The single configured HTTP client every resource module goes through.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::error::{ApiError, ApiResult};

const USER_AGENT: &str = concat!("finboard/", env!("CARGO_PKG_VERSION"));

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Setup {
                reason: e.to_string(),
            })?;

        Ok(ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get_with_query(path, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = self.url(path, query)?;
        self.execute(self.http.get(url)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        self.execute(self.http.post(url).json(body)).await
    }

    /// Issues a DELETE. Whatever body comes back is ignored.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path, &[])?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<Url> {
        let mut url =
            Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| ApiError::Setup {
                reason: format!("invalid URL {}{}: {e}", self.base_url, path),
            })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        let body = response.bytes().await.map_err(transport_error)?;

        serde_json::from_slice(&body).map_err(|e| {
            debug!(error = %e, "Response body did not match the expected shape");
            ApiError::Malformed {
                reason: e.to_string(),
            }
        })
    }

    #[instrument(name = "BackendRequest", skip_all)]
    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!(url = %response.url(), %status, "Received backend response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| d.as_str().map(str::to_string));

        Err(ApiError::Server {
            status: status.as_u16(),
            detail,
        })
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    debug!(error = %err, "Request failed before a response arrived");
    if err.is_builder() {
        ApiError::Setup {
            reason: err.to_string(),
        }
    } else {
        ApiError::NoResponse {
            reason: err.to_string(),
        }
    }
}
