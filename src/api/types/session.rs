use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of the refresh token exchange
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest<'a> {
    pub refresh_token: &'a str,
}

/// Token issued by `/iaas/api/login`
#[allow(missing_docs)]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token_type: Option<String>,
    pub token: String,
}

/// Structure that holds the session state
///
/// Needed for every authorized call
#[allow(missing_docs)]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) access_token: Option<String>,
    pub token_type: Option<String>,
    pub obtained_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Session wrapping a token the caller already has
    pub fn with_token(token: impl Into<String>) -> Self {
        Session {
            access_token: Some(token.into()),
            token_type: None,
            obtained_at: Some(Utc::now()),
        }
    }

    /// Replaces the token with a freshly issued one
    pub fn update(&mut self, login: LoginResponse) {
        self.access_token = Some(login.token);
        self.token_type = login.token_type;
        self.obtained_at = Some(Utc::now());
    }

    /// Whether a token is present
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Value of the `Authorization` header
    pub(crate) fn authorization(&self) -> Option<String> {
        let token = self.access_token.as_ref().filter(|t| !t.is_empty())?;
        Some(format!(
            "{} {}",
            self.token_type.as_deref().unwrap_or("Bearer"),
            token
        ))
    }
}
