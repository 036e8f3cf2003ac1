use crate::api::error::VraAPIError;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a vRA instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VraConfig {
    /// Base URL of the platform, e.g. `https://vra.example.com`
    pub url: String,
    /// Refresh token exchanged for a bearer token on login
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Bearer token used as-is
    #[serde(default)]
    pub access_token: Option<String>,
    /// Accept invalid TLS certificates
    #[serde(default)]
    pub insecure: bool,
    /// Value of the `apiVersion` query parameter on catalog calls
    #[serde(default)]
    pub api_version: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout", alias = "timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl VraConfig {
    /// Creates a config for `url` authenticating with a refresh token
    pub fn new(url: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        VraConfig {
            url: url.into(),
            refresh_token: Some(refresh_token.into()),
            access_token: None,
            insecure: false,
            api_version: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Reads the config from `VRA_URL`, `VRA_REFRESH_TOKEN`, `VRA_ACCESS_TOKEN`,
    /// `VRA_INSECURE`, `VRA_API_VERSION` and `VRA_TIMEOUT`
    pub fn from_env() -> Result<Self, VraAPIError> {
        Self::from_figment(Self::figment(None))
    }

    /// Reads a YAML file, with `VRA_*` environment variables taking precedence
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VraAPIError> {
        Self::from_figment(Self::figment(Some(path.as_ref())))
    }

    /// Layered providers: the optional YAML file first, then the environment
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed("VRA_"))
    }

    /// Extracts and validates the config
    pub fn from_figment(figment: Figment) -> Result<Self, VraAPIError> {
        let mut config: VraConfig = figment
            .extract()
            .map_err(|e| VraAPIError::Config(e.to_string()))?;
        config.refresh_token = config.refresh_token.filter(|t| !t.is_empty());
        config.access_token = config.access_token.filter(|t| !t.is_empty());
        config.api_version = config.api_version.filter(|v| !v.is_empty());
        config.validate()?;
        debug!("Loaded configuration for {}", config.url);
        Ok(config)
    }

    /// Checks that the URL parses and that some credential is present
    pub fn validate(&self) -> Result<(), VraAPIError> {
        if self.url.is_empty() {
            return Err(VraAPIError::Config("url is required".to_string()));
        }
        self.base_url()?;
        if self.refresh_token.is_none() && self.access_token.is_none() {
            return Err(VraAPIError::Config(
                "one of refresh_token or access_token is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL with a trailing slash so relative API paths join below it
    pub fn base_url(&self) -> Result<Url, VraAPIError> {
        let mut url = Url::parse(&self.url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
