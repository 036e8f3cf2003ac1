use crate::api::entitlements::EntitlementApi;
use crate::api::error::VraAPIError;
use crate::api::types::entitlement::{ContentDefinition, Entitlement};
use crate::resource::schema::{Attribute, Schema};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type name the host uses for this resource
pub const TYPE_NAME: &str = "vra_catalog_source_entitlement";

/// Entitlement of a project to a catalog source
///
/// An empty `id` means the resource is absent: never created, deleted, or gone from the server.
#[allow(missing_docs)]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSourceEntitlement {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub catalog_source_id: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub definition: Vec<Definition>,
}

/// Flattened view of what the entitlement grants
#[allow(missing_docs)]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definition {
    pub description: String,
    pub id: String,
    pub name: String,
    pub number_of_items: i64,
    pub source_type: String,
    #[serde(rename = "type")]
    pub type_field: String,
}

impl From<&ContentDefinition> for Definition {
    fn from(d: &ContentDefinition) -> Self {
        Definition {
            description: d.description.clone().unwrap_or_default(),
            id: d.id.clone().unwrap_or_default(),
            name: d.name.clone().unwrap_or_default(),
            number_of_items: d.num_items.unwrap_or_default(),
            source_type: d.source_type.clone().unwrap_or_default(),
            type_field: d.type_field.clone().unwrap_or_default(),
        }
    }
}

impl CatalogSourceEntitlement {
    /// Declared, not yet created entitlement
    pub fn new(catalog_source_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        CatalogSourceEntitlement {
            catalog_source_id: catalog_source_id.into(),
            project_id: project_id.into(),
            ..Default::default()
        }
    }

    /// State holding only the server id, filled in by the next [`read`](Self::read)
    pub fn import(id: impl Into<String>) -> Self {
        CatalogSourceEntitlement {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Attributes declared by this resource
    pub fn schema() -> Schema {
        Schema {
            attributes: vec![
                Attribute::required_string_force_new("catalog_source_id"),
                Attribute::computed_set(
                    "definition",
                    vec![
                        Attribute::computed_string("description"),
                        Attribute::computed_string("id"),
                        Attribute::computed_string("name"),
                        Attribute::computed_int("number_of_items"),
                        Attribute::computed_string("source_type"),
                        Attribute::computed_string("type"),
                    ],
                ),
                Attribute::required_string_force_new("project_id"),
            ],
        }
    }

    /// Parses a flat attribute bag
    pub fn from_attributes(attributes: Value) -> Result<Self, VraAPIError> {
        serde_json::from_value(attributes)
            .map_err(|e| VraAPIError::InvalidParams(format!("{}: {}", TYPE_NAME, e)))
    }

    /// Renders the flat attribute bag
    pub fn to_attributes(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Whether the resource has no server-side identity
    pub fn is_absent(&self) -> bool {
        self.id.is_empty()
    }

    /// Creates the entitlement, then reads it back
    pub async fn create<C>(&mut self, client: &C) -> Result<(), VraAPIError>
    where
        C: EntitlementApi + ?Sized,
    {
        info!("starting to create {} resource", TYPE_NAME);
        let missing = Self::schema().missing_required(&self.to_attributes());
        if !missing.is_empty() {
            return Err(VraAPIError::InvalidParams(format!(
                "{} requires {}",
                TYPE_NAME,
                missing.join(", ")
            )));
        }

        let request = Entitlement::for_catalog_source(&self.catalog_source_id, &self.project_id);
        let created = client.create_entitlement(&request).await?;
        self.id = created
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| VraAPIError::Decode("create response carried no id".to_string()))?;
        info!("Finished creating {} resource with id {}", TYPE_NAME, self.id);

        self.read(client).await
    }

    /// Refreshes the state from the server, clearing `id` when no matching record exists
    pub async fn read<C>(&mut self, client: &C) -> Result<(), VraAPIError>
    where
        C: EntitlementApi + ?Sized,
    {
        info!("Reading the {} resource with id {}", TYPE_NAME, self.id);
        let project = Some(self.project_id.as_str()).filter(|p| !p.is_empty());
        let entitlements = client.list_entitlements(project).await?;
        debug!("{} entitlements listed", entitlements.len());

        // Imported state only knows its own id.
        let found = if self.catalog_source_id.is_empty() {
            entitlements
                .iter()
                .find(|e| !self.id.is_empty() && e.id.as_deref() == Some(self.id.as_str()))
        } else {
            entitlements
                .iter()
                .find(|e| e.definition_id() == self.catalog_source_id)
        };

        match found {
            Some(entitlement) => {
                self.set_fields(entitlement);
                info!("Finished reading the {} resource with id {}", TYPE_NAME, self.id);
            }
            None => {
                debug!("No entitlement matches, marking {} absent", TYPE_NAME);
                self.id.clear();
            }
        }
        Ok(())
    }

    /// Deletes the entitlement by id
    pub async fn delete<C>(&mut self, client: &C) -> Result<(), VraAPIError>
    where
        C: EntitlementApi + ?Sized,
    {
        info!("Starting to delete the {} resource with id {}", TYPE_NAME, self.id);
        if self.is_absent() {
            return Err(VraAPIError::InvalidParams(format!(
                "{} has no id to delete",
                TYPE_NAME
            )));
        }
        client.delete_entitlement(&self.id).await?;
        self.id.clear();
        info!("Finished deleting the {} resource", TYPE_NAME);
        Ok(())
    }

    fn set_fields(&mut self, entitlement: &Entitlement) {
        self.id = entitlement.id.clone().unwrap_or_default();
        self.project_id = entitlement.project_id.clone().unwrap_or_default();
        if self.catalog_source_id.is_empty() {
            self.catalog_source_id = entitlement.definition_id().to_string();
        }
        self.definition = entitlement
            .definition
            .as_ref()
            .map(|d| vec![Definition::from(d)])
            .unwrap_or_default();
    }
}
