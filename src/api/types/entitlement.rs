use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Type tag of a definition that points at a catalog source
pub const CATALOG_SOURCE_IDENTIFIER: &str = "CatalogSourceIdentifier";

/// Grant linking a project to a catalog source
#[allow(missing_docs)]
#[skip_serializing_none]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlement {
    pub id: Option<String>,
    pub project_id: Option<String>,
    pub definition: Option<ContentDefinition>,
    pub migrated: Option<bool>,
}

impl Entitlement {
    /// Request body entitling `project_id` to the catalog source `catalog_source_id`
    pub fn for_catalog_source(catalog_source_id: &str, project_id: &str) -> Self {
        Entitlement {
            id: None,
            project_id: Some(project_id.to_string()),
            definition: Some(ContentDefinition::catalog_source(catalog_source_id)),
            migrated: None,
        }
    }

    /// Id of the entitled content, empty when the server sent no definition
    pub fn definition_id(&self) -> &str {
        self.definition
            .as_ref()
            .and_then(|d| d.id.as_deref())
            .unwrap_or_default()
    }
}

/// What an entitlement grants
#[allow(missing_docs)]
#[skip_serializing_none]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDefinition {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub num_items: Option<i64>,
    pub source_type: Option<String>,
    pub icon_id: Option<String>,
}

impl ContentDefinition {
    /// Definition referencing a catalog source by id
    pub fn catalog_source(catalog_source_id: &str) -> Self {
        ContentDefinition {
            id: Some(catalog_source_id.to_string()),
            type_field: Some(CATALOG_SOURCE_IDENTIFIER.to_string()),
            ..Default::default()
        }
    }
}
