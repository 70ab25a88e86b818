//! Gateway integration tests against the in-process mock backend

use pulse_client::{table, GatewayConfig, IdentityClient, RecordGateway};
use pulse_record_mock::MockServer;
use serde_json::{json, Value};
use shared::models::{CompanyEvent, CompanyEventDraft, Employee, EventKind};
use std::collections::BTreeMap;

async fn start() -> (MockServer, GatewayConfig) {
    let server = MockServer::spawn().await.unwrap();
    let config = GatewayConfig::new(server.base_url()).with_credentials("demo-project", "pk-demo");
    (server, config)
}

fn employee_gateway(config: &GatewayConfig) -> RecordGateway {
    RecordGateway::new(config.build_http_client().unwrap(), &table::EMPLOYEE)
}

fn draft(name: &str, status: &str) -> Value {
    json!({
        "Name": name,
        "email": format!("{}@peoplepulse.io", name.to_lowercase().replace(' ', ".")),
        "department": "Engineering",
        "designation": "Engineer",
        "location": "Remote",
        "status": status,
        "joinDate": "2024-02-01",
    })
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let (_server, config) = start().await;
    let gateway = employee_gateway(&config);

    let created: Employee = gateway.create(&draft("Ada Lovelace", "Active")).await.unwrap();
    assert_eq!(created.name, "Ada Lovelace");

    let fetched: Vec<Employee> = gateway.fetch_as(&BTreeMap::new()).await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id, created.id);
    assert_eq!(fetched[0].email, "ada.lovelace@peoplepulse.io");
}

#[tokio::test]
async fn test_event_draft_round_trip() {
    let (_server, config) = start().await;
    let gateway = RecordGateway::new(config.build_http_client().unwrap(), &table::EVENT);

    let draft = CompanyEventDraft {
        title: "All-hands meeting".into(),
        date: "Today, 3:00 PM".into(),
        kind: EventKind::Meeting,
    };
    let created: CompanyEvent = gateway.create(&draft).await.unwrap();
    assert_eq!(created.title, "All-hands meeting");
    assert_eq!(created.kind, EventKind::Meeting);

    let fetched: Vec<CompanyEvent> = gateway.fetch_as(&BTreeMap::new()).await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id, created.id);
    assert_eq!(fetched[0].date, "Today, 3:00 PM");
}

#[tokio::test]
async fn test_create_strips_system_fields() {
    let (server, config) = start().await;
    let gateway = employee_gateway(&config);

    let mut record = draft("Grace Hopper", "Active");
    record["Id"] = json!(9999);
    record["CreatedBy"] = json!("intruder");
    record["ModifiedOn"] = json!("1990-01-01");

    let created: Value = gateway.create(&record).await.unwrap();
    assert_ne!(created["Id"], json!(9999));
    assert_ne!(created["CreatedBy"], json!("intruder"));

    let tables = server.state.tables.read().await;
    let stored = &tables["employee"][0];
    assert_ne!(stored.get("CreatedBy"), Some(&json!("intruder")));
}

#[tokio::test]
async fn test_fetch_with_exact_match_filter() {
    let (_server, config) = start().await;
    let gateway = employee_gateway(&config);

    let _: Value = gateway.create(&draft("Ada Lovelace", "Active")).await.unwrap();
    let _: Value = gateway.create(&draft("Alan Turing", "Inactive")).await.unwrap();

    let mut filters = BTreeMap::new();
    filters.insert("status".to_string(), json!("Active"));
    let active = gateway.fetch(&filters).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["Name"], json!("Ada Lovelace"));

    filters.insert("department".to_string(), json!("Sales"));
    let none = gateway.fetch(&filters).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_update_preserves_id_and_changes_fields() {
    let (_server, config) = start().await;
    let gateway = employee_gateway(&config);

    let created: Employee = gateway.create(&draft("Ada Lovelace", "Active")).await.unwrap();

    let mut change = draft("Ada Lovelace", "On Leave");
    change["designation"] = json!("Principal Engineer");
    let updated: Employee = gateway.update(created.id, &change).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.designation, "Principal Engineer");

    let all: Vec<Employee> = gateway.fetch_as(&BTreeMap::new()).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_update_unknown_id_is_backend_error() {
    let (_server, config) = start().await;
    let gateway = employee_gateway(&config);

    let result: Result<Value, _> = gateway.update(404, &draft("Nobody", "Active")).await;
    assert!(matches!(
        result,
        Err(pulse_client::GatewayError::Backend(_))
    ));
}

#[tokio::test]
async fn test_delete_removes_record() {
    let (_server, config) = start().await;
    let gateway = employee_gateway(&config);

    let created: Employee = gateway.create(&draft("Ada Lovelace", "Active")).await.unwrap();
    gateway.delete(created.id).await.unwrap();

    let all = gateway.fetch(&BTreeMap::new()).await.unwrap();
    assert!(all.is_empty());

    assert!(matches!(
        gateway.delete(created.id).await,
        Err(pulse_client::GatewayError::Backend(_))
    ));
}

#[tokio::test]
async fn test_missing_project_headers_rejected() {
    let (_server, mut config) = start().await;
    config.project_id = String::new();
    config.public_key = String::new();
    let gateway = RecordGateway::new(config.build_http_client().unwrap(), &table::EMPLOYEE);

    assert!(matches!(
        gateway.fetch(&BTreeMap::new()).await,
        Err(pulse_client::GatewayError::Unauthorized)
    ));
}

#[tokio::test]
async fn test_login_me_logout() {
    let (_server, config) = start().await;
    let mut identity = IdentityClient::new(config.build_http_client().unwrap());

    let session = identity.login("sarah@peoplepulse.io", "hunter2").await.unwrap();
    assert_eq!(session.user.email, "sarah@peoplepulse.io");
    assert!(identity.token().is_some());

    let user = identity.current_user().await.unwrap();
    assert_eq!(user.id, session.user.id);

    identity.logout().await.unwrap();
    assert!(identity.token().is_none());
    assert!(identity.current_user().await.is_err());
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let (_server, config) = start().await;
    let mut identity = IdentityClient::new(config.build_http_client().unwrap());

    let result = identity.login("not-an-email", "pw").await;
    assert!(matches!(result, Err(pulse_client::GatewayError::Unauthorized)));
}

#[tokio::test]
async fn test_invite_is_recorded() {
    let (server, config) = start().await;
    let identity = IdentityClient::new(config.build_http_client().unwrap());

    let outcome = identity
        .send_invite(&shared::models::InviteRequest {
            email: "newhire@peoplepulse.io".to_string(),
            name: "New Hire".to_string(),
        })
        .await
        .unwrap();
    assert!(outcome.success);

    let invites = server.state.invites.read().await;
    assert_eq!(invites.as_slice(), ["newhire@peoplepulse.io"]);
}

#[tokio::test]
async fn test_seeded_directory_counts() {
    let (server, config) = start().await;
    pulse_record_mock::seed(&server.state).await;
    let gateway = employee_gateway(&config);

    let all: Vec<Employee> = gateway.fetch_as(&BTreeMap::new()).await.unwrap();
    assert_eq!(all.len(), 5);

    let mut filters = BTreeMap::new();
    filters.insert("status".to_string(), json!("Active"));
    let active = gateway.fetch(&filters).await.unwrap();
    assert_eq!(active.len(), 3);
}
