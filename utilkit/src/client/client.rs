//! Plain HTTP GET client.
//!
//! Supports HTTP basic auth and an **optional HTTP proxy** used for every
//! request. Supported proxy formats:
//! * `http://USERNAME:PASSWORD@IP:PORT`
//! * `http://IP:PORT`
//! * `IP:PORT` *(`http://` is assumed)*
//!
//! TLS certificates are verified unless the caller opts out through
//! [`FetchConfig::accept_invalid_certs`].

use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

use reqwest::{Client, ClientBuilder, Proxy, Response};
use tracing::{debug, warn};

use crate::error::{Result, UtilkitError};

/// Basic-auth credentials attached to every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    pub credentials: Option<Credentials>,
    /// Optional HTTP proxy, see the module docs for accepted formats.
    pub proxy: Option<String>,
    /// Skip TLS certificate verification. Only for hosts with self-signed
    /// certificates you already trust by other means.
    pub accept_invalid_certs: bool,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Client for one-shot GET requests.
#[derive(Clone)]
pub struct FetchClient {
    pub proxy: Option<String>,
    pub http: Client,
    credentials: Option<Credentials>,
}

impl Debug for FetchClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchClient")
            .field("proxy", &self.proxy)
            .field("http", &"reqwest::Client")
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl FetchClient {
    /// Construct a new [`FetchClient`].
    ///
    /// Without a configured proxy the client connects directly; the
    /// `HTTP_PROXY` family of environment variables is ignored.
    ///
    /// # Errors
    /// [`UtilkitError::InvalidProxy`] if the proxy URL is malformed, or
    /// [`UtilkitError::ReqwestError`] if the TLS backend cannot be set up.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .use_rustls_tls();

        let proxy = config
            .proxy
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(normalize_proxy);
        builder = match proxy {
            Some(ref full) => {
                let req_proxy = Proxy::all(full).map_err(|source| UtilkitError::InvalidProxy {
                    url: full.clone(),
                    source,
                })?;
                builder.proxy(req_proxy)
            }
            None => builder.no_proxy(),
        };

        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for this client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            proxy,
            http: builder.build()?,
            credentials: config.credentials,
        })
    }

    async fn get(&self, url: &str) -> Result<Response> {
        let mut req = self.http.get(url);
        if let Some(creds) = &self.credentials {
            req = req.basic_auth(&creds.username, Some(&creds.password));
        }

        debug!(url, proxy = ?self.proxy, "GET");
        let resp = req.send().await?;
        debug!(url, status = resp.status().as_u16(), "response");
        Ok(resp)
    }

    /// GET `url` and return the raw body, whatever the HTTP status.
    ///
    /// Transport and body-read errors are returned as-is; nothing is retried.
    pub async fn read_url(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.get(url).await?;
        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// GET `url` and parse the body as JSON **iff** the status is success.
    pub async fn read_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.get(url).await?;
        parse_json_if_ok(resp).await
    }
}

/// Parse the body as JSON **iff** the response status is success.
pub async fn parse_json_if_ok<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    let bytes = resp.bytes().await?;

    if !status.is_success() {
        return Err(UtilkitError::HttpStatus {
            code: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).to_string(),
        });
    }

    serde_json::from_slice::<T>(&bytes).map_err(UtilkitError::SerdeError)
}

/// One-shot GET with basic auth and an optional proxy.
///
/// Builds a throwaway [`FetchClient`]; hold on to a client instead when
/// making more than a handful of requests.
pub async fn read_url(
    url: &str,
    username: &str,
    password: &str,
    proxy: Option<&str>,
) -> Result<Vec<u8>> {
    let client = FetchClient::new(FetchConfig {
        credentials: Some(Credentials::new(username, password)),
        proxy: proxy.map(str::to_string),
        ..FetchConfig::default()
    })?;
    client.read_url(url).await
}

fn normalize_proxy(p: &str) -> String {
    if p.starts_with("http://") || p.starts_with("https://") {
        p.to_string()
    } else {
        format!("http://{p}")
    }
}
