//! HTTP client for the portal backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use thiserror::Error;

use super::session::SessionStore;
use super::traits::PortalApi;
use crate::config::PortalConfig;
use crate::state::CardSummary;

/// Default portal address
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Endpoint returning the caller's primary stored card
const PRIMARY_CARD_PATH: &str = "/payment/primary_card/";

/// Query parameter name the backend expects the anti-forgery token under
const CSRF_PARAM: &str = "csrfmiddlewaretoken";

/// Failure modes of a portal request. Callers decide whether a failure is
/// surfaced; the card fetch deliberately swallows all of these.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the portal backend over HTTP/JSON
pub struct PortalClient {
    http: reqwest::Client,
    base_url: Url,
    card_url: Url,
    csrf_token: Option<String>,
}

impl PortalClient {
    /// Build a client from config. The base URL can be overridden with
    /// `PORTAL_BASE_URL`; session cookies come from the configured cookie
    /// file (or its default location), tolerating absence.
    pub fn new(config: &PortalConfig) -> Result<Self> {
        let base_url = std::env::var("PORTAL_BASE_URL")
            .ok()
            .or_else(|| config.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url)
            .with_context(|| format!("invalid portal base URL: {base_url}"))?;
        let card_url = base_url
            .join(PRIMARY_CARD_PATH)
            .context("invalid primary card endpoint")?;

        let session = match config
            .cookie_file
            .clone()
            .or_else(SessionStore::default_path)
        {
            Some(path) => SessionStore::load(&path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "cookie file unreadable; continuing without session");
                SessionStore::default()
            }),
            None => SessionStore::default(),
        };
        let csrf_token = session.csrf_token().map(str::to_string);
        if csrf_token.is_none() {
            // The request is still issued; the backend's rejection lands in
            // the silent-failure path.
            tracing::debug!("no csrftoken cookie in session store");
        }

        let http = reqwest::Client::builder()
            .cookie_provider(session.cookie_jar(&base_url))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            card_url,
            csrf_token,
        })
    }
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn check_connection(&self) -> bool {
        self.http
            .get(self.base_url.clone())
            .send()
            .await
            .is_ok()
    }

    async fn primary_card(&self) -> Result<CardSummary, ClientError> {
        let mut req = self.http.get(self.card_url.clone());
        if let Some(token) = &self.csrf_token {
            req = req.query(&[(CSRF_PARAM, token.as_str())]);
        }

        let resp = req.send().await.map_err(ClientError::Transport)?;
        if !resp.status().is_success() {
            return Err(ClientError::Status(resp.status()));
        }

        // An account without a stored card answers "{}", which fails the
        // decode and lands in the no-card path.
        resp.json::<CardSummary>().await.map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_default_config() {
        let config = PortalConfig::default();
        let client = PortalClient::new(&config).unwrap();
        assert_eq!(client.base_url.as_str(), "http://127.0.0.1:8000/");
    }

    #[test]
    fn test_config_base_url_is_used() {
        let config = PortalConfig {
            base_url: Some("https://portal.example.com".to_string()),
            ..Default::default()
        };
        let client = PortalClient::new(&config).unwrap();
        assert_eq!(client.base_url.host_str(), Some("portal.example.com"));
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        let config = PortalConfig {
            base_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(PortalClient::new(&config).is_err());
    }

    #[test]
    fn test_primary_card_url_joins_cleanly() {
        let config = PortalConfig {
            base_url: Some("https://portal.example.com".to_string()),
            ..Default::default()
        };
        let client = PortalClient::new(&config).unwrap();
        assert_eq!(
            client.card_url.as_str(),
            "https://portal.example.com/payment/primary_card/"
        );
    }

    #[test]
    fn test_client_error_display() {
        let err = ClientError::Status(StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "unexpected status 403 Forbidden");
    }
}
