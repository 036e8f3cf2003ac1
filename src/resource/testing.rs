use crate::api::entitlements::EntitlementApi;
use crate::api::error::VraAPIError;
use crate::api::types::entitlement::Entitlement;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// In-memory stand-in for the entitlement endpoints
#[derive(Default)]
pub(crate) struct FakeEntitlements {
    records: Mutex<Vec<Entitlement>>,
    next_ids: Mutex<VecDeque<String>>,
    failure: Mutex<Option<VraAPIError>>,
    calls: Mutex<Calls>,
}

#[derive(Default)]
struct Calls {
    create: usize,
    list: usize,
    delete: usize,
}

impl FakeEntitlements {
    pub fn with_next_id(id: &str) -> Self {
        let fake = FakeEntitlements::default();
        fake.next_ids.lock().unwrap().push_back(id.to_string());
        fake
    }

    pub fn insert(&self, entitlement: Entitlement) {
        self.records.lock().unwrap().push(entitlement);
    }

    pub fn records(&self) -> Vec<Entitlement> {
        self.records.lock().unwrap().clone()
    }

    pub fn fail_next(&self, err: VraAPIError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn create_calls(&self) -> usize {
        self.calls.lock().unwrap().create
    }

    pub fn list_calls(&self) -> usize {
        self.calls.lock().unwrap().list
    }

    pub fn delete_calls(&self) -> usize {
        self.calls.lock().unwrap().delete
    }

    fn take_failure(&self) -> Result<(), VraAPIError> {
        match self.failure.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EntitlementApi for FakeEntitlements {
    async fn create_entitlement(
        &self,
        entitlement: &Entitlement,
    ) -> Result<Entitlement, VraAPIError> {
        self.calls.lock().unwrap().create += 1;
        self.take_failure()?;
        let id = self
            .next_ids
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let mut created = entitlement.clone();
        created.id = Some(id);
        if let Some(definition) = created.definition.as_mut() {
            definition.name = Some("Catalog Source".to_string());
            definition.num_items = Some(1);
        }
        self.records.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list_entitlements(
        &self,
        project_id: Option<&str>,
    ) -> Result<Vec<Entitlement>, VraAPIError> {
        self.calls.lock().unwrap().list += 1;
        self.take_failure()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|e| project_id.is_none() || e.project_id.as_deref() == project_id)
            .cloned()
            .collect())
    }

    async fn delete_entitlement(&self, id: &str) -> Result<(), VraAPIError> {
        self.calls.lock().unwrap().delete += 1;
        self.take_failure()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|e| e.id.as_deref() != Some(id));
        if records.len() == before {
            return Err(VraAPIError::APIError {
                status: 404,
                body: format!("entitlement {} not found", id),
            });
        }
        Ok(())
    }
}
