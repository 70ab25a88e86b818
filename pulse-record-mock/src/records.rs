//! Record CRUD handlers
//!
//! Implements the record backend wire contract:
//! `POST /api/records/{table}/fetch` -> `{data: [...]}`,
//! `POST /api/records/{table}` with `{records: [...]}` ->
//! `{success, results: [{data}]}`, `PUT` the same shape for updates, and
//! `DELETE` with `{RecordIds: [...]}` -> `{success}`.

use crate::state::MockState;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use shared::{AppError, AppResult};
use std::sync::Arc;

const AUDIT_AUTHOR: &str = "mock";

#[derive(Debug, Deserialize, Default)]
pub struct FetchParams {
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(rename = "whereGroups", default)]
    pub where_groups: Option<Vec<WhereGroup>>,
}

#[derive(Debug, Deserialize)]
pub struct WhereGroup {
    pub operator: String,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    pub operator: String,
    pub values: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RecordsBody {
    pub records: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBody {
    #[serde(rename = "RecordIds")]
    pub record_ids: Vec<Value>,
}

/// Project credential check. The mock only requires the headers to be
/// present and non-empty, it does not validate them against anything.
fn require_project_headers(headers: &HeaderMap) -> AppResult<()> {
    for name in ["x-project-id", "x-public-key"] {
        let present = headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| !v.is_empty());
        if !present {
            return Err(AppError::not_authenticated().with_detail("missing_header", json!(name)));
        }
    }
    Ok(())
}

fn condition_matches(record: &Map<String, Value>, condition: &Condition) -> bool {
    if condition.operator != "ExactMatch" {
        return false;
    }
    let field = record.get(&condition.field_name).unwrap_or(&Value::Null);
    condition.values.iter().any(|candidate| candidate == field)
}

fn group_matches(record: &Map<String, Value>, group: &WhereGroup) -> bool {
    if group.operator.eq_ignore_ascii_case("OR") {
        group.conditions.iter().any(|c| condition_matches(record, c))
    } else {
        group.conditions.iter().all(|c| condition_matches(record, c))
    }
}

fn project(record: &Map<String, Value>, fields: &[String]) -> Value {
    if fields.is_empty() {
        return Value::Object(record.clone());
    }
    let mut out = Map::new();
    for field in fields {
        if let Some(value) = record.get(field) {
            out.insert(field.clone(), value.clone());
        }
    }
    Value::Object(out)
}

fn record_id(record: &Map<String, Value>) -> Option<i64> {
    record.get("Id").and_then(Value::as_i64)
}

fn as_object(record: Value) -> AppResult<Map<String, Value>> {
    match record {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::invalid_request("Record must be a JSON object")),
    }
}

/// POST /api/records/{table}/fetch
pub async fn fetch(
    State(state): State<Arc<MockState>>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(params): Json<FetchParams>,
) -> Result<Json<Value>, AppError> {
    require_project_headers(&headers)?;

    let tables = state.tables.read().await;
    let records = tables.get(&table).map(Vec::as_slice).unwrap_or(&[]);

    let data: Vec<Value> = records
        .iter()
        .filter(|record| {
            params
                .where_groups
                .as_deref()
                .unwrap_or(&[])
                .iter()
                .all(|group| group_matches(record, group))
        })
        .map(|record| project(record, &params.fields))
        .collect();

    tracing::debug!(table, count = data.len(), "fetch");
    Ok(Json(json!({ "data": data })))
}

/// POST /api/records/{table}
pub async fn create(
    State(state): State<Arc<MockState>>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(body): Json<RecordsBody>,
) -> Result<Json<Value>, AppError> {
    require_project_headers(&headers)?;

    let now = Utc::now().to_rfc3339();
    let mut results = Vec::with_capacity(body.records.len());
    let mut tables = state.tables.write().await;
    let store = tables.entry(table.clone()).or_default();

    for record in body.records {
        let mut record = as_object(record)?;
        // Audit fields are backend-owned regardless of what the client sent
        record.insert("Id".to_string(), json!(state.next_id()));
        record.insert("CreatedOn".to_string(), json!(now));
        record.insert("CreatedBy".to_string(), json!(AUDIT_AUTHOR));
        record.insert("ModifiedOn".to_string(), json!(now));
        record.insert("ModifiedBy".to_string(), json!(AUDIT_AUTHOR));

        results.push(json!({ "data": Value::Object(record.clone()) }));
        store.push(record);
    }

    tracing::debug!(table, count = results.len(), "create");
    Ok(Json(json!({ "success": true, "results": results })))
}

/// PUT /api/records/{table}
pub async fn update(
    State(state): State<Arc<MockState>>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(body): Json<RecordsBody>,
) -> Result<Json<Value>, AppError> {
    require_project_headers(&headers)?;

    let now = Utc::now().to_rfc3339();
    let mut results = Vec::with_capacity(body.records.len());
    let mut tables = state.tables.write().await;
    let store = tables.entry(table.clone()).or_default();

    for record in body.records {
        let incoming = as_object(record)?;
        let Some(id) = record_id(&incoming) else {
            return Ok(Json(json!({
                "success": false,
                "message": "Update requires an Id"
            })));
        };

        let Some(stored) = store.iter_mut().find(|r| record_id(r) == Some(id)) else {
            return Ok(Json(json!({
                "success": false,
                "message": format!("Record {} not found in {}", id, table)
            })));
        };

        for (key, value) in incoming {
            if key == "Id" || key.starts_with("Created") {
                continue;
            }
            stored.insert(key, value);
        }
        stored.insert("ModifiedOn".to_string(), json!(now));
        stored.insert("ModifiedBy".to_string(), json!(AUDIT_AUTHOR));

        results.push(json!({ "data": Value::Object(stored.clone()) }));
    }

    tracing::debug!(table, count = results.len(), "update");
    Ok(Json(json!({ "success": true, "results": results })))
}

/// DELETE /api/records/{table}
pub async fn delete(
    State(state): State<Arc<MockState>>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(body): Json<DeleteBody>,
) -> Result<Json<Value>, AppError> {
    require_project_headers(&headers)?;

    let ids: Vec<i64> = body.record_ids.iter().filter_map(Value::as_i64).collect();

    let mut tables = state.tables.write().await;
    let store = tables.entry(table.clone()).or_default();
    let before = store.len();
    store.retain(|record| !record_id(record).is_some_and(|id| ids.contains(&id)));
    let removed = before - store.len();

    tracing::debug!(table, removed, "delete");
    if removed != ids.len() {
        return Ok(Json(json!({
            "success": false,
            "message": format!("Only {} of {} records found in {}", removed, ids.len(), table)
        })));
    }
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_exact_match_condition() {
        let rec = record(&[("status", json!("Active")), ("Name", json!("Ada"))]);
        let matching = Condition {
            field_name: "status".to_string(),
            operator: "ExactMatch".to_string(),
            values: vec![json!("Active")],
        };
        let missing = Condition {
            field_name: "status".to_string(),
            operator: "ExactMatch".to_string(),
            values: vec![json!("Inactive")],
        };
        assert!(condition_matches(&rec, &matching));
        assert!(!condition_matches(&rec, &missing));
    }

    #[test]
    fn test_and_group_requires_all_conditions() {
        let rec = record(&[
            ("status", json!("Active")),
            ("department", json!("Engineering")),
        ]);
        let group = WhereGroup {
            operator: "AND".to_string(),
            conditions: vec![
                Condition {
                    field_name: "status".to_string(),
                    operator: "ExactMatch".to_string(),
                    values: vec![json!("Active")],
                },
                Condition {
                    field_name: "department".to_string(),
                    operator: "ExactMatch".to_string(),
                    values: vec![json!("Sales")],
                },
            ],
        };
        assert!(!group_matches(&rec, &group));
    }

    #[test]
    fn test_projection_keeps_requested_fields() {
        let rec = record(&[("Id", json!(1)), ("Name", json!("Ada")), ("email", json!("a@b.c"))]);
        let projected = project(&rec, &["Id".to_string(), "Name".to_string()]);
        assert_eq!(projected, json!({"Id": 1, "Name": "Ada"}));
    }
}
