use crate::api::entitlements::EntitlementApi;
use crate::api::error::VraAPIError;
use crate::resource::catalog_source_entitlement::CatalogSourceEntitlement;
use crate::resource::schema::Schema;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Catalog source entitlement resource
pub mod catalog_source_entitlement;

/// Attribute declarations
pub mod schema;

#[cfg(test)]
pub(crate) mod testing;

/// Resource types this provider serves, keyed by their host type name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// `vra_catalog_source_entitlement`
    CatalogSourceEntitlement,
}

impl ResourceType {
    /// Every registered resource type
    pub const ALL: [ResourceType; 1] = [ResourceType::CatalogSourceEntitlement];

    /// Host type name
    pub fn name(&self) -> &'static str {
        match self {
            ResourceType::CatalogSourceEntitlement => catalog_source_entitlement::TYPE_NAME,
        }
    }

    /// Declared attributes
    pub fn schema(&self) -> Schema {
        match self {
            ResourceType::CatalogSourceEntitlement => CatalogSourceEntitlement::schema(),
        }
    }

    /// Creates the resource and returns the state read back from the server
    pub async fn create<C>(&self, client: &C, attributes: Value) -> Result<Value, VraAPIError>
    where
        C: EntitlementApi + ?Sized,
    {
        match self {
            ResourceType::CatalogSourceEntitlement => {
                let mut resource = CatalogSourceEntitlement::from_attributes(attributes)?;
                resource.create(client).await?;
                Ok(resource.to_attributes())
            }
        }
    }

    /// Refreshes the state; `None` when the resource no longer exists
    pub async fn read<C>(&self, client: &C, attributes: Value) -> Result<Option<Value>, VraAPIError>
    where
        C: EntitlementApi + ?Sized,
    {
        match self {
            ResourceType::CatalogSourceEntitlement => {
                let mut resource = CatalogSourceEntitlement::from_attributes(attributes)?;
                resource.read(client).await?;
                if resource.is_absent() {
                    return Ok(None);
                }
                Ok(Some(resource.to_attributes()))
            }
        }
    }

    /// Deletes the resource
    pub async fn delete<C>(&self, client: &C, attributes: Value) -> Result<(), VraAPIError>
    where
        C: EntitlementApi + ?Sized,
    {
        match self {
            ResourceType::CatalogSourceEntitlement => {
                let mut resource = CatalogSourceEntitlement::from_attributes(attributes)?;
                resource.delete(client).await
            }
        }
    }

    /// State to hand to [`read`](Self::read) when adopting an existing record by id
    pub fn import(&self, id: &str) -> Value {
        match self {
            ResourceType::CatalogSourceEntitlement => {
                CatalogSourceEntitlement::import(id).to_attributes()
            }
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ResourceType {
    type Err = VraAPIError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| VraAPIError::InvalidParams(format!("unknown resource type {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceType;
    use crate::api::error::VraAPIError;
    use crate::resource::testing::FakeEntitlements;
    use serde_json::json;

    const SOURCE: &str = "11111111-2222-3333-4444-555555555555";

    #[test]
    fn looks_up_by_name() {
        let t: ResourceType = "vra_catalog_source_entitlement".parse().unwrap();
        assert_eq!(t, ResourceType::CatalogSourceEntitlement);
        assert_eq!(t.to_string(), "vra_catalog_source_entitlement");
        assert!(matches!(
            "vra_project".parse::<ResourceType>(),
            Err(VraAPIError::InvalidParams(_))
        ));
    }

    #[test]
    fn schema_marks_identifiers_force_new() {
        let schema = ResourceType::CatalogSourceEntitlement.schema();
        assert!(schema.attribute("catalog_source_id").unwrap().force_new);
        assert!(schema.attribute("project_id").unwrap().required);
        assert!(schema.attribute("definition").unwrap().computed);
        assert_eq!(
            schema.force_new_changes(
                &json!({"catalog_source_id": SOURCE, "project_id": "proj-a"}),
                &json!({"catalog_source_id": SOURCE, "project_id": "proj-b"}),
            ),
            vec!["project_id"]
        );
    }

    #[tokio::test]
    async fn lifecycle_through_attribute_bags() {
        let api = FakeEntitlements::with_next_id("abc123");
        let t = ResourceType::CatalogSourceEntitlement;

        let state = t
            .create(&api, json!({"catalog_source_id": SOURCE, "project_id": "proj-a"}))
            .await
            .unwrap();
        assert_eq!(state["id"], json!("abc123"));
        assert_eq!(state["definition"][0]["id"], json!(SOURCE));

        let read = t.read(&api, state.clone()).await.unwrap();
        assert_eq!(read.as_ref(), Some(&state));

        t.delete(&api, state.clone()).await.unwrap();
        assert_eq!(t.read(&api, state).await.unwrap(), None);
    }

    #[tokio::test]
    async fn import_then_read_reattaches() {
        let api = FakeEntitlements::with_next_id("abc123");
        let t = ResourceType::CatalogSourceEntitlement;
        t.create(&api, json!({"catalog_source_id": SOURCE, "project_id": "proj-a"}))
            .await
            .unwrap();

        let state = t.read(&api, t.import("abc123")).await.unwrap().unwrap();
        assert_eq!(state["project_id"], json!("proj-a"));
        assert_eq!(state["catalog_source_id"], json!(SOURCE));
    }
}
