//! Per-table CRUD gateway
//!
//! A [`RecordGateway`] binds the HTTP client to one [`TableSpec`] and owns
//! the outbound payload discipline: every record sent on create or update
//! is stripped down to the table's allow-list of client-writable fields, so
//! audit fields assigned by the backend (`Id`, `CreatedOn`, `CreatedBy`,
//! `ModifiedOn`, `ModifiedBy`) can never be smuggled into a write.

use crate::{GatewayError, GatewayResult, QueryParams, RecordHttpClient, TableSpec};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// CRUD gateway for one entity table
#[derive(Debug, Clone)]
pub struct RecordGateway {
    http: RecordHttpClient,
    table: &'static TableSpec,
}

impl RecordGateway {
    /// Create a gateway over the given table
    pub fn new(http: RecordHttpClient, table: &'static TableSpec) -> Self {
        Self { http, table }
    }

    /// The table this gateway serves
    pub fn table(&self) -> &'static TableSpec {
        self.table
    }

    /// Fetch all records, optionally filtered by exact-match conditions
    pub async fn fetch(&self, filters: &BTreeMap<String, Value>) -> GatewayResult<Vec<Value>> {
        let params = QueryParams::with_fields(self.table.fields).with_filters(filters);
        let response = self.http.fetch_records(self.table.name, &params).await?;
        tracing::debug!(
            table = self.table.name,
            count = response.data.len(),
            "fetched records"
        );
        Ok(response.data)
    }

    /// Fetch all records decoded into a typed model
    pub async fn fetch_as<T: DeserializeOwned>(
        &self,
        filters: &BTreeMap<String, Value>,
    ) -> GatewayResult<Vec<T>> {
        let records = self.fetch(filters).await?;
        records
            .into_iter()
            .map(|record| serde_json::from_value(record).map_err(GatewayError::from))
            .collect()
    }

    /// Create a record, returning the stored record as echoed by the backend
    pub async fn create<T: Serialize, R: DeserializeOwned>(&self, record: &T) -> GatewayResult<R> {
        let payload = self.sanitize(record, None)?;
        let response = self
            .http
            .create_records(self.table.name, &[payload])
            .await?;
        let stored = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("Create returned no record".to_string()))?;
        serde_json::from_value(stored.data).map_err(GatewayError::from)
    }

    /// Update a record by id, returning the stored record
    pub async fn update<T: Serialize, R: DeserializeOwned>(
        &self,
        id: i64,
        record: &T,
    ) -> GatewayResult<R> {
        let payload = self.sanitize(record, Some(id))?;
        let response = self
            .http
            .update_records(self.table.name, &[payload])
            .await?;
        let stored = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("Update returned no record".to_string()))?;
        serde_json::from_value(stored.data).map_err(GatewayError::from)
    }

    /// Delete a record by id
    pub async fn delete(&self, id: i64) -> GatewayResult<()> {
        self.http
            .delete_records(self.table.name, &[Value::from(id)])
            .await
    }

    /// Strip a record down to the table's writable fields.
    ///
    /// `id` is attached afterwards for updates, the one system field a
    /// write is allowed to carry since the backend needs it to address the
    /// record.
    fn sanitize<T: Serialize>(&self, record: &T, id: Option<i64>) -> GatewayResult<Value> {
        let value = serde_json::to_value(record)?;
        let Value::Object(map) = value else {
            return Err(GatewayError::InvalidPayload(format!(
                "{} record must be a JSON object",
                self.table.name
            )));
        };

        let mut filtered = Map::new();
        for (key, value) in map {
            if self.table.is_updateable(&key) {
                filtered.insert(key, value);
            }
        }
        if let Some(id) = id {
            filtered.insert("Id".to_string(), Value::from(id));
        }
        Ok(Value::Object(filtered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{table, GatewayConfig};
    use serde_json::json;

    fn employee_gateway() -> RecordGateway {
        let http = GatewayConfig::default().build_http_client().unwrap();
        RecordGateway::new(http, &table::EMPLOYEE)
    }

    #[test]
    fn test_sanitize_strips_system_fields() {
        let gateway = employee_gateway();
        let record = json!({
            "Id": 42,
            "Name": "Ada",
            "email": "ada@example.com",
            "CreatedOn": "2024-01-01",
            "ModifiedBy": "someone",
            "status": "Active"
        });

        let payload = gateway.sanitize(&record, None).unwrap();
        assert_eq!(
            payload,
            json!({"Name": "Ada", "email": "ada@example.com", "status": "Active"})
        );
    }

    #[test]
    fn test_sanitize_injects_id_for_update() {
        let gateway = employee_gateway();
        let record = json!({"Name": "Ada", "Id": 999});

        let payload = gateway.sanitize(&record, Some(7)).unwrap();
        assert_eq!(payload, json!({"Name": "Ada", "Id": 7}));
    }

    #[test]
    fn test_sanitize_rejects_non_object() {
        let gateway = employee_gateway();
        let err = gateway.sanitize(&json!(["not", "a", "record"]), None);
        assert!(matches!(err, Err(GatewayError::InvalidPayload(_))));
    }
}
