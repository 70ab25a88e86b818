//! End-to-end flows: App state machine against the in-memory backend

use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent};
use peoplepulse::app::{App, BackendEvent};
use peoplepulse::config::AppConfig;
use peoplepulse::shell::landing::LandingField;
use peoplepulse::shell::Module;
use pulse_record_mock::{seed, MockServer};
use tokio::sync::mpsc;

async fn start() -> (
    MockServer,
    App,
    mpsc::UnboundedReceiver<BackendEvent>,
    tempfile::TempDir,
) {
    let server = MockServer::spawn().await.unwrap();
    seed(&server.state).await;

    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::parse_from([
        "peoplepulse",
        "--backend-url",
        &server.base_url(),
        "--data-dir",
        dir.path().to_str().unwrap(),
    ]);
    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(&config, tx).unwrap();
    (server, app, rx, dir)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyEvent::from(KeyCode::Char(c)));
    }
}

async fn apply_next(app: &mut App, rx: &mut mpsc::UnboundedReceiver<BackendEvent>, count: usize) {
    for _ in 0..count {
        let event = rx.recv().await.unwrap();
        app.apply(event);
    }
}

#[tokio::test]
async fn test_login_loads_directory_and_events() {
    let (_server, mut app, mut rx, _dir) = start().await;

    type_text(&mut app, "admin@peoplepulse.io");
    app.handle_key(KeyEvent::from(KeyCode::Tab));
    type_text(&mut app, "secret");
    app.handle_key(KeyEvent::from(KeyCode::Enter));

    // Login result, then the employee and event fetches it triggers
    apply_next(&mut app, &mut rx, 1).await;
    assert!(app.auth.current_user().is_some());
    apply_next(&mut app, &mut rx, 2).await;

    assert_eq!(app.directory.len(), 5);
    assert_eq!(app.events.len(), 3);
    assert!(!app.directory.loading);
}

#[tokio::test]
async fn test_delete_applies_locally_and_persists() {
    let (server, mut app, mut rx, _dir) = start().await;

    type_text(&mut app, "admin@peoplepulse.io");
    app.handle_key(KeyEvent::from(KeyCode::Tab));
    type_text(&mut app, "pw");
    app.handle_key(KeyEvent::from(KeyCode::Enter));
    apply_next(&mut app, &mut rx, 3).await;

    app.active = Module::Employees;
    app.handle_key(KeyEvent::from(KeyCode::Char('d')));
    app.handle_key(KeyEvent::from(KeyCode::Char('y')));
    assert_eq!(app.directory.len(), 4);

    apply_next(&mut app, &mut rx, 1).await;
    assert_eq!(app.directory.len(), 4);

    let tables = server.state.tables.read().await;
    assert_eq!(tables.get("employee").map(|t| t.len()), Some(4));
}

#[tokio::test]
async fn test_invite_from_landing_is_recorded() {
    let (server, mut app, mut rx, _dir) = start().await;

    app.landing.focus = LandingField::InviteEmail;
    type_text(&mut app, "colleague@company.com");
    app.handle_key(KeyEvent::from(KeyCode::Enter));
    apply_next(&mut app, &mut rx, 1).await;

    assert_eq!(app.pending_invites, 1);
    assert!(app.landing.invite_sent);
    let invites = server.state.invites.read().await;
    assert_eq!(invites.as_slice(), ["colleague@company.com"]);
}

#[tokio::test]
async fn test_invalid_invite_email_never_leaves_the_client() {
    let (server, mut app, _rx, _dir) = start().await;

    app.landing.focus = LandingField::InviteEmail;
    type_text(&mut app, "not-an-email");
    app.handle_key(KeyEvent::from(KeyCode::Enter));

    let toast = app.toasts.iter().next().unwrap();
    assert_eq!(toast.message, "Please enter a valid email address");
    assert!(server.state.invites.read().await.is_empty());
}
