//! Session cookie store for the portal backend
//!
//! The portal authenticates through its ordinary browser session; this client
//! reads the exported session cookies from a JSON file (`{"csrftoken": "...",
//! "sessionid": "..."}`). A missing or unreadable file degrades to an empty
//! store so the client still starts, and the fetch fails silently server-side.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use directories::ProjectDirs;
use reqwest::cookie::Jar;
use reqwest::Url;

/// Name of the anti-forgery cookie the backend expects echoed back
pub const CSRF_COOKIE: &str = "csrftoken";

/// Cookies for the portal session, keyed by cookie name
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    cookies: HashMap<String, String>,
}

impl SessionStore {
    /// Default cookie file location under the user data directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "gluu", "portal-tui")
            .map(|dirs| dirs.data_dir().join("cookies.json"))
    }

    /// Load the store from a cookie file. A missing file yields an empty
    /// store; only unreadable or malformed content is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no cookie file; starting with empty session");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a cookie map from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let cookies: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { cookies })
    }

    /// The anti-forgery token, if the session carries one
    pub fn csrf_token(&self) -> Option<&str> {
        self.cookies.get(CSRF_COOKIE).map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Build a cookie jar holding every session cookie for `base_url`
    pub fn cookie_jar(&self, base_url: &Url) -> Arc<Jar> {
        let jar = Jar::default();
        for (name, value) in &self.cookies {
            jar.add_cookie_str(&format!("{name}={value}"), base_url);
        }
        Arc::new(jar)
    }
}
