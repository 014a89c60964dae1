//! Blocking HTTP client for an OpenSearch-compatible engine.

use reqwest::Method;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use csvix_model::IndexSchema;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::interfaces::SearchBackend;
use crate::types::{BulkResponse, CountResponse};

pub struct SearchClient {
    http: Client,
    base_url: String,
    username: String,
    password: Option<String>,
}

impl SearchClient {
    /// Builds the HTTP client from resolved connection settings.
    ///
    /// Credentials are attached to every request; the TLS trust policy
    /// follows `config.verify_certs`.
    pub fn connect(config: &SearchConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_certs)
            .build()?;
        debug!(base_url = %config.base_url(), "search client ready");
        Ok(Self {
            http,
            base_url: config.base_url(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/{path}", self.base_url))
            .basic_auth(&self.username, self.password.as_deref())
    }

    fn ensure_success(
        operation: &'static str,
        index: &str,
        response: Response,
    ) -> Result<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            Err(SearchError::UnexpectedStatus {
                operation,
                index: index.to_string(),
                status,
                body,
            })
        }
    }
}

impl SearchBackend for SearchClient {
    fn index_exists(&self, index: &str) -> Result<bool> {
        let response = self.request(Method::HEAD, index).send()?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(SearchError::UnexpectedStatus {
                operation: "index exists",
                index: index.to_string(),
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            }),
        }
    }

    fn delete_index(&self, index: &str) -> Result<()> {
        let response = self.request(Method::DELETE, index).send()?;
        Self::ensure_success("index delete", index, response)?;
        Ok(())
    }

    fn create_index(&self, index: &str, schema: &IndexSchema) -> Result<()> {
        let response = self.request(Method::PUT, index).json(schema).send()?;
        Self::ensure_success("index create", index, response)?;
        Ok(())
    }

    fn bulk(&self, index: &str, body: String) -> Result<BulkResponse> {
        let response = self
            .request(Method::POST, &format!("{index}/_bulk"))
            .header(CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()?;
        let response = Self::ensure_success("bulk index", index, response)?;
        response
            .json::<BulkResponse>()
            .map_err(|e| SearchError::InvalidResponse {
                message: e.to_string(),
            })
    }

    fn refresh(&self, index: &str) -> Result<()> {
        let response = self
            .request(Method::POST, &format!("{index}/_refresh"))
            .send()?;
        Self::ensure_success("index refresh", index, response)?;
        Ok(())
    }

    fn count(&self, index: &str) -> Result<u64> {
        let response = self
            .request(Method::GET, &format!("{index}/_count"))
            .send()?;
        let response = Self::ensure_success("index count", index, response)?;
        let parsed =
            response
                .json::<CountResponse>()
                .map_err(|e| SearchError::InvalidResponse {
                    message: e.to_string(),
                })?;
        Ok(parsed.count)
    }
}
