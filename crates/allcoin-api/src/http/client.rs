/*
[INPUT]:  API credentials, client configuration, endpoint path and parameters
[OUTPUT]: Decoded JSON responses or typed errors
[POS]:    HTTP layer - core client implementation and request dispatch
[UPDATE]: When adding connection options or changing dispatch/response rules
*/

use crate::http::config::ClientConfig;
use crate::http::diagnostics::{DiagnosticHook, RequestDiagnostics};
use crate::http::signature::{RequestSigner, order_params};
use crate::http::{AllcoinError, Params, RequestOptions, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Credentials for signed requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// The API key (sent with signed requests)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The secret used for signing. Never log or transmit it.
    pub fn expose_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Main HTTP client for the Allcoin API
pub struct AllcoinClient {
    http_client: Client,
    api_root: Url,
    credentials: Credentials,
    request_options: RequestOptions,
    diagnostics: Option<Arc<dyn DiagnosticHook>>,
}

impl fmt::Debug for AllcoinClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllcoinClient")
            .field("api_root", &self.api_root.as_str())
            .field("credentials", &self.credentials)
            .field("request_options", &self.request_options)
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

impl AllcoinClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.connect_timeout);

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str())
                .map_err(|err| AllcoinError::Config(format!("invalid proxy {proxy}: {err}")))?;
            builder = builder.proxy(proxy);
        }

        let api_root = Url::parse(&format!(
            "{}/{}/",
            config.base_url.trim_end_matches('/'),
            config.api_version.trim_matches('/')
        ))?;

        Ok(Self {
            http_client: builder.build()?,
            api_root,
            credentials,
            request_options: config.request_options,
            diagnostics: None,
        })
    }

    /// Register an observer called around every request
    pub fn with_diagnostic_hook(mut self, hook: impl DiagnosticHook + 'static) -> Self {
        self.diagnostics = Some(Arc::new(hook));
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build full URL for an endpoint path
    pub fn api_url(&self, path: &str) -> Result<Url> {
        Ok(self.api_root.join(path.trim_start_matches('/'))?)
    }

    /// Send a request with the client's configured transport options
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        signed: bool,
        params: &Params,
    ) -> Result<Value> {
        self.send_with(method, path, signed, params, &RequestOptions::default())
            .await
    }

    /// Send a request, overlaying `options` on the configured transport options.
    ///
    /// Signed requests get `api_key` and `sign` attached to a copy of
    /// `params`. The outgoing set is canonically ordered and sent as the
    /// query string for GET and as a form body otherwise.
    pub async fn send_with(
        &self,
        method: Method,
        path: &str,
        signed: bool,
        params: &Params,
        options: &RequestOptions,
    ) -> Result<Value> {
        if !matches!(
            method,
            Method::GET | Method::POST | Method::PUT | Method::DELETE
        ) {
            return Err(AllcoinError::Config(format!(
                "unsupported HTTP method: {method}"
            )));
        }

        let url = self.api_url(path)?;
        let options = self.request_options.merged(options);
        let timeout = options.effective_timeout();

        let outgoing = if signed {
            RequestSigner::new(&self.credentials).sign_params(params)
        } else {
            params.clone()
        };
        let ordered = order_params(&outgoing);

        let mut builder = self
            .http_client
            .request(method.clone(), url.clone())
            .timeout(timeout);
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !ordered.is_empty() {
            builder = if method == Method::GET {
                builder.query(&ordered)
            } else {
                builder.form(&ordered)
            };
        }

        tracing::debug!(
            method = %method,
            url = %url,
            signed,
            params = ?ordered.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
            timeout_ms = timeout.as_millis() as u64,
            "sending allcoin request"
        );
        if let Some(hook) = &self.diagnostics {
            hook.on_request(&RequestDiagnostics {
                method: &method,
                url: &url,
                params: &ordered,
                timeout,
            });
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if let Some(hook) = &self.diagnostics {
            hook.on_response(status, &body);
        }

        let result = handle_response(status, &body);
        if let Err(err) = &result {
            tracing::warn!(method = %method, url = %url, error = %err, "allcoin request failed");
        }
        result
    }
}

/// Translate a raw response into a decoded JSON value or a typed error.
///
/// Allcoin reports some failures inside a 2xx body, so a decoded object
/// carrying `error_code` is an error too.
pub fn handle_response(status: StatusCode, body: &str) -> Result<Value> {
    if !status.is_success() {
        return Err(AllcoinError::from_response(status, body));
    }

    let value: Value =
        serde_json::from_str(body).map_err(|_| AllcoinError::Request(body.to_string()))?;
    if value.get("error_code").is_some() {
        return Err(AllcoinError::from_response(status, body));
    }
    Ok(value)
}
