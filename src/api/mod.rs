use crate::api::config::VraConfig;
use crate::api::error::VraAPIError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, ClientBuilder, RequestBuilder};
use std::time::Duration;
use types::session::Session;
use url::Url;

/// Module holding the API types
pub mod types;

/// Response handling helpers
pub mod utils;

/// Error type
pub mod error;

/// Connection settings
pub mod config;

/// Catalog entitlement methods
pub mod entitlements;

/// Session Handling
pub mod login;

/// Authenticated client for one vRA instance
#[derive(Debug, Clone)]
pub struct VraAPI {
    client: Client,
    base_url: Url,
    api_version: Option<String>,
    refresh_token: Option<String>,
    pub(crate) session: Session,
}

impl VraAPI {
    /// Builds the client; no request is made until [`VraAPI::login`] or an API call
    pub fn new(config: &VraConfig) -> Result<Self, VraAPIError> {
        config.validate()?;
        let client = VraAPI::build_client(config).build()?;
        let session = match &config.access_token {
            Some(token) => Session::with_token(token.clone()),
            None => Session::default(),
        };
        Ok(VraAPI {
            client,
            base_url: config.base_url()?,
            api_version: config.api_version.clone(),
            refresh_token: config.refresh_token.clone(),
            session,
        })
    }

    fn build_client(config: &VraConfig) -> ClientBuilder {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("vra-entitlements/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.insecure)
    }

    /// Current session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resolves `path` below the base URL and appends `apiVersion` when configured
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, VraAPIError> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if let Some(version) = &self.api_version {
            url.query_pairs_mut().append_pair("apiVersion", version);
        }
        Ok(url)
    }

    fn authorized_get_client(&self, url: Url) -> Result<RequestBuilder, VraAPIError> {
        self.set_authorization_header(self.client.get(url))
    }

    fn authorized_post_client(&self, url: Url) -> Result<RequestBuilder, VraAPIError> {
        self.set_authorization_header(self.client.post(url))
    }

    fn authorized_delete_client(&self, url: Url) -> Result<RequestBuilder, VraAPIError> {
        self.set_authorization_header(self.client.delete(url))
    }

    fn set_authorization_header(&self, rb: RequestBuilder) -> Result<RequestBuilder, VraAPIError> {
        match self.session.authorization() {
            Some(value) => Ok(rb.header("Authorization", value)),
            None => Err(VraAPIError::InvalidCredentials(
                "no access token, login first".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VraAPI;
    use crate::api::config::VraConfig;
    use crate::api::error::VraAPIError;

    #[test]
    fn endpoint_appends_api_version() {
        let mut config = VraConfig::new("https://vra.example.com", "refresh");
        config.api_version = Some("2020-08-25".to_string());
        let api = VraAPI::new(&config).unwrap();
        assert_eq!(
            api.endpoint("/catalog/api/admin/entitlements").unwrap().as_str(),
            "https://vra.example.com/catalog/api/admin/entitlements?apiVersion=2020-08-25"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let config = VraConfig::new("https://vra.example.com/proxy", "refresh");
        let api = VraAPI::new(&config).unwrap();
        assert_eq!(
            api.endpoint("catalog/api/admin/entitlements").unwrap().as_str(),
            "https://vra.example.com/proxy/catalog/api/admin/entitlements"
        );
    }

    #[test]
    fn unauthenticated_requests_are_refused() {
        let config = VraConfig::new("https://vra.example.com", "refresh");
        let api = VraAPI::new(&config).unwrap();
        let url = api.endpoint("catalog/api/admin/entitlements").unwrap();
        assert!(matches!(
            api.authorized_get_client(url).err(),
            Some(VraAPIError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn access_token_starts_authenticated() {
        let config = VraConfig {
            access_token: Some("token".to_string()),
            refresh_token: None,
            ..VraConfig::new("https://vra.example.com", "unused")
        };
        let api = VraAPI::new(&config).unwrap();
        assert!(api.session().is_authenticated());
    }
}
