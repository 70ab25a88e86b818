//! Query construction for the record backend
//!
//! The backend accepts a `fields` projection plus optional `whereGroups`:
//! a list of groups, each an AND/OR operator over exact-match conditions.
//! The directory only ever issues a single AND group of `ExactMatch`
//! conditions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single exact-match condition on one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    pub operator: String,
    pub values: Vec<Value>,
}

impl Condition {
    /// Exact-match condition on a field
    pub fn exact(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field_name: field.into(),
            operator: "ExactMatch".to_string(),
            values: vec![value.into()],
        }
    }
}

/// A group of conditions combined with a single operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereGroup {
    pub operator: String,
    pub conditions: Vec<Condition>,
}

impl WhereGroup {
    /// Conjunction of the given conditions
    pub fn all(conditions: Vec<Condition>) -> Self {
        Self {
            operator: "AND".to_string(),
            conditions,
        }
    }
}

/// Query parameters for a fetch call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Field projection; empty means all declared fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    #[serde(
        rename = "whereGroups",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub where_groups: Option<Vec<WhereGroup>>,
}

impl QueryParams {
    /// Project the given fields with no filtering
    pub fn with_fields(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            where_groups: None,
        }
    }

    /// Add a conjunctive exact-match group built from a field→value map.
    ///
    /// An empty map leaves the query unfiltered; `whereGroups` is only
    /// attached when at least one filter is present. `BTreeMap` keeps
    /// condition order deterministic.
    pub fn with_filters(mut self, filters: &BTreeMap<String, Value>) -> Self {
        if filters.is_empty() {
            return self;
        }
        let conditions = filters
            .iter()
            .map(|(field, value)| Condition::exact(field.clone(), value.clone()))
            .collect();
        self.where_groups = Some(vec![WhereGroup::all(conditions)]);
        self
    }
}
