use crate::api::error::VraAPIError;
use crate::api::types::session::{LoginRequest, LoginResponse};
use crate::api::utils::send_json;
use crate::api::VraAPI;
use log::{error, info};

impl VraAPI {
    /// Exchanges the configured refresh token for a bearer token
    ///
    /// Without a refresh token the configured access token is kept as-is.
    pub async fn login(&mut self) -> Result<(), VraAPIError> {
        let refresh_token = match &self.refresh_token {
            Some(token) => token.clone(),
            None => {
                if self.session.is_authenticated() {
                    return Ok(());
                }
                return Err(VraAPIError::InvalidCredentials(
                    "no refresh_token or access_token configured".to_string(),
                ));
            }
        };
        let url = self.base_url.join("iaas/api/login")?;
        info!("Logging in to {}", self.base_url);
        let rb = self.client.post(url).json(&LoginRequest {
            refresh_token: &refresh_token,
        });
        let login: LoginResponse = send_json(rb).await?;
        if login.token.is_empty() {
            error!("Login returned an empty token");
            return Err(VraAPIError::InvalidCredentials(
                "login returned an empty token".to_string(),
            ));
        }
        self.session.update(login);
        info!("Logged in");
        Ok(())
    }
}
