//! Demo data seeding

use crate::state::MockState;
use chrono::Utc;
use serde_json::{json, Map, Value};

fn push(state: &MockState, store: &mut Vec<Map<String, Value>>, record: Value) {
    let Value::Object(mut map) = record else {
        return;
    };
    let now = Utc::now().to_rfc3339();
    map.insert("Id".to_string(), json!(state.next_id()));
    map.insert("CreatedOn".to_string(), json!(now));
    map.insert("CreatedBy".to_string(), json!("seed"));
    map.insert("ModifiedOn".to_string(), json!(now));
    map.insert("ModifiedBy".to_string(), json!("seed"));
    store.push(map);
}

fn employee(
    name: &str,
    email: &str,
    department: &str,
    designation: &str,
    location: &str,
    status: &str,
    join_date: &str,
) -> Value {
    json!({
        "Name": name,
        "email": email,
        "department": department,
        "designation": designation,
        "location": location,
        "status": status,
        "joinDate": join_date,
    })
}

/// Populate the state with the demo directory.
///
/// Five employees, three of them Active, exactly one with "Chen" in the
/// name, so the filtering scenarios in the app tests have fixed expected
/// counts.
pub async fn seed(state: &MockState) {
    let mut tables = state.tables.write().await;

    let employees = tables.entry("employee".to_string()).or_default();
    push(
        state,
        employees,
        employee(
            "Sarah Chen",
            "sarah.chen@peoplepulse.io",
            "Engineering",
            "Senior Engineer",
            "San Francisco",
            "Active",
            "2021-03-15",
        ),
    );
    push(
        state,
        employees,
        employee(
            "Marcus Webb",
            "marcus.webb@peoplepulse.io",
            "Engineering",
            "Staff Engineer",
            "Remote",
            "Active",
            "2019-07-01",
        ),
    );
    push(
        state,
        employees,
        employee(
            "Priya Sharma",
            "priya.sharma@peoplepulse.io",
            "Marketing",
            "Marketing Lead",
            "London",
            "Active",
            "2022-01-10",
        ),
    );
    push(
        state,
        employees,
        employee(
            "Diego Alvarez",
            "diego.alvarez@peoplepulse.io",
            "Sales",
            "Account Executive",
            "New York",
            "On Leave",
            "2020-11-23",
        ),
    );
    push(
        state,
        employees,
        employee(
            "Emma Olsen",
            "emma.olsen@peoplepulse.io",
            "Finance",
            "Financial Analyst",
            "Singapore",
            "Inactive",
            "2023-05-02",
        ),
    );

    let departments = tables.entry("department".to_string()).or_default();
    for name in [
        "Engineering",
        "Marketing",
        "Sales",
        "Human Resources",
        "Finance",
        "Operations",
    ] {
        push(state, departments, json!({ "Name": name }));
    }

    let locations = tables.entry("location".to_string()).or_default();
    for name in ["New York", "San Francisco", "London", "Singapore", "Remote"] {
        push(state, locations, json!({ "Name": name }));
    }

    let events = tables.entry("event".to_string()).or_default();
    push(
        state,
        events,
        json!({ "Name": "All hands", "title": "Quarterly all hands", "date": "2026-09-12", "type": "meeting" }),
    );
    push(
        state,
        events,
        json!({ "Name": "Birthday", "title": "Sarah Chen's birthday", "date": "2026-09-20", "type": "birthday" }),
    );
    push(
        state,
        events,
        json!({ "Name": "Review cutoff", "title": "Performance review cutoff", "date": "2026-09-30", "type": "deadline" }),
    );

    let users = tables.entry("User1".to_string()).or_default();
    push(
        state,
        users,
        json!({
            "Name": "admin",
            "email": "admin@peoplepulse.io",
            "role": "admin",
            "darkModeEnabled": false,
        }),
    );

    tracing::info!("seeded demo data");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_counts() {
        let state = MockState::new();
        seed(&state).await;

        let tables = state.tables.read().await;
        let employees = &tables["employee"];
        assert_eq!(employees.len(), 5);

        let active = employees
            .iter()
            .filter(|e| e.get("status").and_then(Value::as_str) == Some("Active"))
            .count();
        assert_eq!(active, 3);

        let chens = employees
            .iter()
            .filter(|e| {
                e.get("Name")
                    .and_then(Value::as_str)
                    .is_some_and(|n| n.to_lowercase().contains("chen"))
            })
            .count();
        assert_eq!(chens, 1);

        assert_eq!(tables["department"].len(), 6);
        assert_eq!(tables["location"].len(), 5);
        assert_eq!(tables["event"].len(), 3);
    }

    #[tokio::test]
    async fn test_seeded_records_carry_audit_fields() {
        let state = MockState::new();
        seed(&state).await;

        let tables = state.tables.read().await;
        for record in &tables["employee"] {
            for field in ["Id", "CreatedOn", "CreatedBy", "ModifiedOn", "ModifiedBy"] {
                assert!(record.contains_key(field), "missing {}", field);
            }
        }
    }
}
