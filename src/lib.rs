#![deny(missing_docs)]
#![cfg_attr(test, deny(warnings))]

//! # vRA Entitlements
//!
//! Catalog source entitlements for VMware Aria Automation (vRA), managed as
//! declarative resources.
//!
//! ## Current functionality
//!  - Refresh token login
//!  - Create, list and delete catalog entitlements
//!  - `vra_catalog_source_entitlement` resource: create, read, delete, import
//!
//! ```no_run
//! use vra_entitlements::{api::config::VraConfig, Vra};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), vra_entitlements::api::error::VraAPIError> {
//! let mut vra = Vra::new(VraConfig::from_env()?)?;
//! vra.login().await?;
//! let state = vra
//!     .create(
//!         "vra_catalog_source_entitlement",
//!         json!({"catalog_source_id": "11111111-2222-3333-4444-555555555555", "project_id": "proj-a"}),
//!     )
//!     .await?;
//! vra.delete("vra_catalog_source_entitlement", state).await?;
//! # Ok(())
//! # }
//! ```

use log::info;
use serde_json::Value;

use crate::api::config::VraConfig;
use crate::api::error::VraAPIError;
use crate::api::types::session::Session;
use crate::api::VraAPI;
use crate::resource::ResourceType;

/// Module for authenticated API communication
pub mod api;

/// Declarative resources backed by the API
pub mod resource;

/// Struct to manage the resources of one vRA instance
#[derive(Debug, Clone)]
pub struct Vra {
    api: VraAPI,
}

impl Vra {
    /// Creates new object
    pub fn new(config: VraConfig) -> Result<Self, VraAPIError> {
        Ok(Vra {
            api: VraAPI::new(&config)?,
        })
    }

    /// Check whether a token is available
    pub fn is_logged_in(&self) -> bool {
        self.api.session.is_authenticated()
    }

    /// Get session details
    pub fn session(&self) -> Session {
        self.api.session.clone()
    }

    /// Perform login with the configured credentials
    pub async fn login(&mut self) -> Result<(), VraAPIError> {
        self.api.login().await
    }

    /// The underlying API client
    pub fn api(&self) -> &VraAPI {
        &self.api
    }

    /// Creates a resource of `resource_type` from its declared attributes
    pub async fn create(&self, resource_type: &str, attributes: Value) -> Result<Value, VraAPIError> {
        let t: ResourceType = resource_type.parse()?;
        info!("create {}", t);
        t.create(&self.api, attributes).await
    }

    /// Reads a resource; `None` when it is gone from the server
    pub async fn read(
        &self,
        resource_type: &str,
        attributes: Value,
    ) -> Result<Option<Value>, VraAPIError> {
        let t: ResourceType = resource_type.parse()?;
        info!("read {}", t);
        t.read(&self.api, attributes).await
    }

    /// Deletes a resource
    pub async fn delete(&self, resource_type: &str, attributes: Value) -> Result<(), VraAPIError> {
        let t: ResourceType = resource_type.parse()?;
        info!("delete {}", t);
        t.delete(&self.api, attributes).await
    }

    /// Adopts an existing record by id
    pub async fn import(&self, resource_type: &str, id: &str) -> Result<Option<Value>, VraAPIError> {
        let t: ResourceType = resource_type.parse()?;
        info!("import {} {}", t, id);
        t.read(&self.api, t.import(id)).await
    }
}
