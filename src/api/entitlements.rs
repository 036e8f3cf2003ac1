use crate::api::error::VraAPIError;
use crate::api::types::entitlement::Entitlement;
use crate::api::utils::{send, send_json};
use crate::api::VraAPI;
use async_trait::async_trait;
use log::debug;

const ENTITLEMENTS_PATH: &str = "catalog/api/admin/entitlements";

/// Remote calls the entitlement resource needs
///
/// Implemented by [`VraAPI`]; resources take it as a parameter so any client can be injected.
#[async_trait]
pub trait EntitlementApi: Send + Sync {
    /// Creates an entitlement and returns the server record
    async fn create_entitlement(&self, entitlement: &Entitlement)
        -> Result<Entitlement, VraAPIError>;

    /// Lists entitlements, restricted to one project when `project_id` is given
    async fn list_entitlements(
        &self,
        project_id: Option<&str>,
    ) -> Result<Vec<Entitlement>, VraAPIError>;

    /// Deletes an entitlement by id
    async fn delete_entitlement(&self, id: &str) -> Result<(), VraAPIError>;
}

#[async_trait]
impl EntitlementApi for VraAPI {
    async fn create_entitlement(
        &self,
        entitlement: &Entitlement,
    ) -> Result<Entitlement, VraAPIError> {
        let url = self.endpoint(ENTITLEMENTS_PATH)?;
        debug!("POST {}", url);
        send_json(self.authorized_post_client(url)?.json(entitlement)).await
    }

    async fn list_entitlements(
        &self,
        project_id: Option<&str>,
    ) -> Result<Vec<Entitlement>, VraAPIError> {
        let mut url = self.endpoint(ENTITLEMENTS_PATH)?;
        if let Some(project_id) = project_id {
            url.query_pairs_mut().append_pair("projectId", project_id);
        }
        debug!("GET {}", url);
        send_json(self.authorized_get_client(url)?).await
    }

    async fn delete_entitlement(&self, id: &str) -> Result<(), VraAPIError> {
        if id.is_empty() {
            return Err(VraAPIError::InvalidParams(
                "entitlement id is empty".to_string(),
            ));
        }
        let mut url = self.endpoint(ENTITLEMENTS_PATH)?;
        url.path_segments_mut()
            .map_err(|_| VraAPIError::Config(format!("{} cannot be a base", self.base_url)))?
            .push(id);
        debug!("DELETE {}", url);
        send(self.authorized_delete_client(url)?).await?;
        Ok(())
    }
}
