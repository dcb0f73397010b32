//! HTTP client for the Financial Modeling Prep REST API.

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    options::RequestOptions,
    params::{resolve, Params, ResolvedRequest},
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameter carrying the API key on every request.
const API_KEY_PARAM: &str = "apikey";

/// Connection settings for a [`Client`].
#[derive(Clone)]
pub struct ClientConfig {
    /// API root, without the `/api/v3` or `/stable` prefix.
    pub base_url: String,
    pub api_key: String,
    /// Client-wide request timeout. [`RequestOptions::timeout`] overrides it per call.
    pub timeout: Duration,
    pub user_agent: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &mask(&self.api_key))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("fmp_api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Reads `FMP_API_KEY`, `FMP_BASE_URL` and `FMP_TIMEOUT_SECS`, falling back
    /// to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(api_key) = std::env::var("FMP_API_KEY") {
            config.api_key = api_key;
        }
        if let Ok(base_url) = std::env::var("FMP_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(secs) = std::env::var("FMP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = api_key.to_string();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Raw HTTP response, returned when the caller decodes the body itself.
#[derive(Clone, Debug)]
pub struct RawResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl RawResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_status(&self, status: StatusCode) -> bool {
        self.status == status
    }

    /// The `Content-Type` header sent by the server, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice::<T>(&self.body).map_err(|e| {
            let snippet = truncate_body(&self.text());
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::decode(e)
        })
    }
}

/// HTTP client for the Financial Modeling Prep API.
///
/// Holds one `reqwest::Client` and no other state; calls may be issued
/// concurrently from any number of tasks.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &mask(&self.api_key))
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client pointing at the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::default().with_api_key(api_key))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::from_config(
            ClientConfig::default()
                .with_base_url(base_url)
                .with_api_key(api_key),
        )
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", config.base_url, e);
            Error::InvalidUrl(e)
        })?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request_url(&self, resolved: &ResolvedRequest) -> Url {
        let mut url = resolved.apply_to(&self.base_url);
        url.query_pairs_mut()
            .append_pair(API_KEY_PARAM, &self.api_key);
        url
    }

    /// Issues one request and returns the raw response.
    ///
    /// `template` may contain `:name` placeholders, filled from `params`.
    /// Missing parameters are reported before any network activity. A non-2xx
    /// status fails with [`Error::HttpStatus`] unless it is listed in
    /// `options.ignored_status_codes`.
    pub async fn call<P>(
        &self,
        method: Method,
        template: &str,
        params: &P,
        options: &RequestOptions,
    ) -> Result<RawResponse, Error>
    where
        P: Params + ?Sized,
    {
        if self.api_key.is_empty() {
            return Err(Error::missing(API_KEY_PARAM));
        }
        let resolved = resolve(template, params)?;
        let url = self.request_url(&resolved);
        tracing::debug!("{} {}", method, redact(&url));

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, options.content_type());
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let exchange = async {
            let resp = request.send().await.map_err(transport_error)?;
            let status = resp.status();
            let content_type = resp
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = resp.bytes().await.map_err(transport_error)?;
            Ok::<_, Error>(RawResponse {
                status,
                content_type,
                body: body.to_vec(),
            })
        };

        let response = match &options.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!("Request to {} cancelled", template);
                        return Err(Error::Cancelled);
                    }
                    result = exchange => result?,
                }
            }
            None => exchange.await?,
        };

        if !response.status.is_success() && !options.ignores(response.status) {
            let snippet = truncate_body(&response.text());
            tracing::error!(
                "Request failed with status {}: {}",
                response.status,
                snippet
            );
            return Err(Error::HttpStatus {
                status: response.status.as_u16(),
                body: snippet,
            });
        }

        Ok(response)
    }

    /// Issues one request and decodes the body as JSON into `T`.
    pub async fn call_json<T, P>(
        &self,
        method: Method,
        template: &str,
        params: &P,
        options: &RequestOptions,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Params + ?Sized,
    {
        self.call(method, template, params, options).await?.json()
    }

    pub(crate) async fn get<T, P>(
        &self,
        template: &str,
        params: &P,
        options: &RequestOptions,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Params + ?Sized,
    {
        self.call_json(Method::GET, template, params, options).await
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        tracing::error!("Request deadline exceeded: {}", e);
        Error::DeadlineExceeded
    } else {
        tracing::error!("Failed to get resource: {}", e);
        Error::Transport(e)
    }
}

fn mask(api_key: &str) -> &'static str {
    if api_key.is_empty() {
        ""
    } else {
        "***"
    }
}

/// Copy of `url` safe to log: the API key is masked.
fn redact(url: &Url) -> Url {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_masks_api_key() {
        let url =
            Url::parse("https://example.com/api/v3/quote/AAPL?limit=1&apikey=secret").unwrap();
        let redacted = redact(&url).to_string();
        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("apikey=***") || redacted.contains("apikey=%2A%2A%2A"));
        assert!(redacted.contains("limit=1"));
    }

    #[test]
    fn debug_output_masks_api_key() {
        let config = ClientConfig::default().with_api_key("secret-key");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-key"));
        assert!(printed.contains(r#"api_key: "***""#));

        let client = Client::from_config(config).unwrap();
        let printed = format!("{:?}", client);
        assert!(!printed.contains("secret-key"));
        assert!(printed.contains("https://financialmodelingprep.com"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = Client::with_base_url("not a url", "key").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn request_url_appends_api_key_last() {
        let client = Client::with_base_url("https://example.com", "k").unwrap();
        let resolved = resolve("/api/v3/stock_market/gainers", &()).unwrap();
        insta::assert_snapshot!(
            client.request_url(&resolved).to_string(),
            @"https://example.com/api/v3/stock_market/gainers?apikey=k"
        );
    }

    #[tokio::test]
    async fn empty_api_key_fails_before_network() {
        let client = Client::with_base_url("http://127.0.0.1:9", "").unwrap();
        let options = RequestOptions::default();
        let err = client
            .call(Method::GET, "/api/v3/stock_market/gainers", &(), &options)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter { ref name } if name == "apikey"));
    }
}
