//! Minimal GraphQL client for the Slab API.

use std::{error::Error, fmt};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

pub use reqwest::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.slab.com/v1/graphql";

#[derive(Debug)]
pub enum ClientError {
    /// The endpoint answered with a non-2xx status.
    Status { status: u16 },
    /// The envelope carried a non-empty `errors` list, serialized as JSON.
    GraphQl(String),
    Request(reqwest::Error),
    Decode(String),
    InvalidToken,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { status } => write!(f, "HTTP error! status: {status}"),
            Self::GraphQl(errors) => write!(f, "GraphQL errors: {errors}"),
            Self::Request(err) => write!(f, "request failed: {err}"),
            Self::Decode(message) => write!(f, "invalid response body: {message}"),
            Self::InvalidToken => write!(f, "API token is not a valid header value"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err)
    }
}

/// Connection settings for the Slab GraphQL endpoint.
#[derive(Debug)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub token: SecretString,
}

impl ClientConfig {
    #[must_use]
    pub const fn new(endpoint: Url, token: SecretString) -> Self {
        Self { endpoint, token }
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Map<String, Value>,
}

#[derive(Deserialize)]
struct GraphQlEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

impl GraphQlEnvelope {
    /// Returns the error list when it carries at least one entry.
    fn errors(&self) -> Option<&Value> {
        self.errors.as_ref().filter(|errors| match errors {
            Value::Null => false,
            Value::Array(list) => !list.is_empty(),
            _ => true,
        })
    }
}

/// Client for a single GraphQL endpoint authenticated with a static token.
#[derive(Clone)]
pub struct SlabClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SlabClient {
    /// Builds a client with the authorization and content-type headers baked in.
    ///
    /// # Errors
    /// Returns `ClientError::InvalidToken` if the token cannot be sent as a
    /// header, or `ClientError::Request` if the HTTP client fails to build.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut authorization = HeaderValue::from_str(config.token.expose_secret())
            .map_err(|_| ClientError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    /// Posts `query` with `variables` and returns the unwrapped `data` payload.
    ///
    /// A missing `data` field yields `Value::Null`.
    ///
    /// # Errors
    /// Returns `ClientError::Status` for non-2xx responses, `ClientError::GraphQl`
    /// when the envelope lists errors, and `ClientError::Request` or
    /// `ClientError::Decode` for network and body failures.
    pub async fn execute(
        &self,
        query: &str,
        variables: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "graphql response received");
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let envelope: GraphQlEnvelope = serde_json::from_slice(&body)
            .map_err(|err| ClientError::Decode(err.to_string()))?;

        if let Some(errors) = envelope.errors() {
            return Err(ClientError::GraphQl(errors.to_string()));
        }

        Ok(envelope.data.unwrap_or(Value::Null))
    }
}

impl fmt::Debug for SlabClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlabClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}
