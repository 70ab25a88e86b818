//! Application state and event loop
//!
//! All state mutation happens here on the main loop. Network calls run in
//! spawned tasks that report back over an unbounded channel; their results
//! are applied between frames. Directory writes are applied locally first
//! and persisted in the background, with a refresh on failure so the view
//! reconciles with the backend.

use crate::auth::{AuthGate, Route};
use crate::config::AppConfig;
use crate::directory::{DirectoryState, EmployeeForm, Selection, UpsertOutcome};
use crate::notify::ToastStack;
use crate::prefs::PrefsStore;
use crate::shell::landing::{LandingAction, LandingScreen};
use crate::shell::Module;
use crate::theme::Theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use pulse_client::{table, GatewayError, IdentityClient, RecordGateway, RecordHttpClient};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use shared::models::{
    CompanyEvent, Employee, EmployeeDraft, InviteOutcome, InviteRequest, Session,
};
use std::io::Stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

/// Outcome of a background network call, applied on the main loop
#[derive(Debug)]
pub enum BackendEvent {
    SessionResolved(Result<shared::models::UserAccount, GatewayError>),
    LoggedIn(Result<Session, GatewayError>),
    LoggedOut(Result<(), GatewayError>),
    InviteSent(Result<InviteOutcome, GatewayError>),
    EmployeesLoaded(Result<Vec<Employee>, GatewayError>),
    EventsLoaded(Result<Vec<CompanyEvent>, GatewayError>),
    EmployeeSaved {
        created: bool,
        result: Result<Employee, GatewayError>,
    },
    EmployeeDeleted {
        name: String,
        result: Result<(), GatewayError>,
    },
}

pub struct App {
    http: RecordHttpClient,
    tx: mpsc::UnboundedSender<BackendEvent>,
    pub prefs: PrefsStore,
    pub theme: Theme,
    pub toasts: ToastStack,
    pub auth: AuthGate,
    pub landing: LandingScreen,
    pub directory: DirectoryState,
    pub active: Module,
    pub events: Vec<CompanyEvent>,
    pub pending_invites: usize,
    pub search: Input,
    pub search_active: bool,
    pub show_log: bool,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: &AppConfig,
        tx: mpsc::UnboundedSender<BackendEvent>,
    ) -> anyhow::Result<Self> {
        let http = config.gateway_config().build_http_client()?;
        let prefs = PrefsStore::load(&config.data_dir())?;
        let theme = Theme::new(prefs.dark_mode());

        Ok(Self {
            http,
            tx,
            prefs,
            theme,
            toasts: ToastStack::new(),
            auth: AuthGate::new(),
            landing: LandingScreen::new(),
            directory: DirectoryState::new(),
            active: Module::Dashboard,
            events: Vec::new(),
            pending_invites: 0,
            search: Input::default(),
            search_active: false,
            show_log: false,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        })
    }

    fn identity(&self) -> IdentityClient {
        IdentityClient::new(self.http.clone())
    }

    fn employee_gateway(&self) -> RecordGateway {
        RecordGateway::new(self.http.clone(), &table::EMPLOYEE)
    }

    fn event_gateway(&self) -> RecordGateway {
        RecordGateway::new(self.http.clone(), &table::EVENT)
    }

    /// Probe for an existing session on startup. The probe never blocks the
    /// UI; until it completes the landing screen shows.
    pub fn start_session_probe(&self) {
        let identity = self.identity();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = identity.current_user().await;
            let _ = tx.send(BackendEvent::SessionResolved(result));
        });
    }

    pub fn refresh_employees(&mut self) {
        self.directory.loading = true;
        let gateway = self.employee_gateway();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = gateway.fetch_as::<Employee>(&Default::default()).await;
            let _ = tx.send(BackendEvent::EmployeesLoaded(result));
        });
    }

    pub fn refresh_events(&self) {
        let gateway = self.event_gateway();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = gateway.fetch_as::<CompanyEvent>(&Default::default()).await;
            let _ = tx.send(BackendEvent::EventsLoaded(result));
        });
    }

    fn spawn_login(&mut self, email: String, password: String) {
        self.landing.busy = true;
        let mut identity = self.identity();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = identity.login(&email, &password).await;
            let _ = tx.send(BackendEvent::LoggedIn(result));
        });
    }

    fn spawn_invite(&mut self, email: String, name: String) {
        let request = InviteRequest { email, name };
        if request.validate().is_err() {
            self.toasts.error("Please enter a valid email address");
            return;
        }

        self.landing.busy = true;
        let identity = self.identity();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = identity.send_invite(&request).await;
            let _ = tx.send(BackendEvent::InviteSent(result));
        });
    }

    fn sign_out(&mut self) {
        let mut identity = self.identity();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = identity.logout().await;
            let _ = tx.send(BackendEvent::LoggedOut(result));
        });

        self.http.clear_token();
        self.auth.clear();
        self.landing = LandingScreen::new();
        self.active = Module::Dashboard;
        self.toasts.info("Signed out");
    }

    /// Persist a saved draft in the background. The directory has already
    /// applied it locally; failures toast and trigger a reconciling refresh.
    fn spawn_persist(&self, draft: EmployeeDraft) {
        let gateway = self.employee_gateway();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let (created, result) = match draft.id {
                Some(id) => (false, gateway.update::<_, Employee>(id, &draft).await),
                None => (true, gateway.create::<_, Employee>(&draft).await),
            };
            let _ = tx.send(BackendEvent::EmployeeSaved { created, result });
        });
    }

    fn spawn_delete(&self, id: i64, name: String) {
        let gateway = self.employee_gateway();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = gateway.delete(id).await;
            let _ = tx.send(BackendEvent::EmployeeDeleted { name, result });
        });
    }

    fn toggle_dark_mode(&mut self) {
        match self.prefs.toggle_dark_mode() {
            Ok(dark) => {
                self.theme = Theme::new(dark);
                tracing::debug!(dark, "theme switched");
            }
            Err(err) => self.toasts.error(err.message),
        }
    }

    fn switch_module(&mut self, module: Module) {
        self.active = module;
        if !module.is_built() {
            self.toasts.info(module.unavailable_message());
        }
    }

    /// Apply a background result to the state
    pub fn apply(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::SessionResolved(result) => {
                let route = Route::parse("/");
                match result {
                    Ok(user) => {
                        let destination = self.auth.complete_probe(Some(user), &route);
                        tracing::debug!(destination, "session probe resolved");
                        self.refresh_employees();
                        self.refresh_events();
                    }
                    Err(GatewayError::Unauthorized) => {
                        let destination = self.auth.complete_probe(None, &route);
                        tracing::debug!(destination, "no existing session");
                    }
                    Err(err) => self.auth.probe_failed(&err.to_string()),
                }
            }
            BackendEvent::LoggedIn(result) => {
                self.landing.busy = false;
                match result {
                    Ok(session) => {
                        self.http.set_token(&session.token);
                        let name = session.user.name.clone();
                        let destination = self
                            .auth
                            .complete_probe(Some(session.user), &Route::parse("/login"));
                        tracing::debug!(destination, "login complete");
                        self.toasts.success(format!("Welcome back, {}", name));
                        self.refresh_employees();
                        self.refresh_events();
                    }
                    Err(GatewayError::Unauthorized) => {
                        self.toasts.error("Invalid email or password.");
                    }
                    Err(err) => self.toasts.error(err.user_message()),
                }
            }
            BackendEvent::LoggedOut(result) => {
                if let Err(err) = result {
                    tracing::warn!(error = %err, "logout call failed");
                }
            }
            BackendEvent::InviteSent(result) => {
                self.landing.busy = false;
                match result {
                    Ok(outcome) => {
                        self.landing.invite_succeeded();
                        self.pending_invites += 1;
                        self.toasts.success(outcome.message);
                    }
                    Err(err) => self.toasts.error(err.user_message()),
                }
            }
            BackendEvent::EmployeesLoaded(result) => {
                self.directory.loading = false;
                match result {
                    Ok(employees) => self.directory.load(employees),
                    Err(err) => self.toasts.error(err.user_message()),
                }
            }
            BackendEvent::EventsLoaded(result) => match result {
                Ok(events) => self.events = events,
                Err(err) => tracing::warn!(error = %err, "event fetch failed"),
            },
            BackendEvent::EmployeeSaved { created, result } => match result {
                // A created record gets its final id from the backend, so
                // re-fetch to adopt it.
                Ok(_) if created => self.refresh_employees(),
                Ok(_) => {}
                Err(err) => {
                    self.toasts
                        .error(format!("Save failed: {}", err.user_message()));
                    self.refresh_employees();
                }
            },
            BackendEvent::EmployeeDeleted { name, result } => {
                if let Err(err) = result {
                    self.toasts
                        .error(format!("Could not delete {}: {}", name, err.user_message()));
                    self.refresh_employees();
                }
            }
        }
    }

    /// Route a key press according to the active screen and modal
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.auth.current_user().is_none() {
            self.handle_landing_key(key);
            return;
        }

        if self.search_active {
            self.handle_search_key(key);
            return;
        }

        // Modals swallow keys before the global bindings
        if matches!(self.active, Module::Employees)
            && !matches!(self.directory.selection, Selection::Idle)
        {
            self.handle_modal_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.switch_module(self.active.next()),
            KeyCode::BackTab => self.switch_module(self.active.prev()),
            KeyCode::Char('t') => self.toggle_dark_mode(),
            KeyCode::Char('x') => self.sign_out(),
            KeyCode::Char('l') => self.show_log = !self.show_log,
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ if matches!(self.active, Module::Employees) => self.handle_directory_key(key),
            _ => {}
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }
        match self.landing.handle_key(key) {
            LandingAction::None => {}
            LandingAction::LogIn { email, password } => self.spawn_login(email, password),
            LandingAction::SendInvite { email, name } => self.spawn_invite(email, name),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.search_active = false,
            _ => {
                self.search.handle_event(&Event::Key(key));
                self.directory.filter.search = self.search.value().to_string();
                self.directory.cursor = 0;
            }
        }
    }

    fn handle_directory_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.directory.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.directory.move_cursor(1),
            KeyCode::Enter => {
                if let Some(id) = self.directory.under_cursor().map(|e| e.id) {
                    self.directory.selection = Selection::Viewing(id);
                }
            }
            KeyCode::Char('a') => {
                self.directory.selection = Selection::Editing(EmployeeForm::blank());
            }
            KeyCode::Char('e') => {
                let form = self.directory.under_cursor().map(EmployeeForm::edit);
                if let Some(form) = form {
                    self.directory.selection = Selection::Editing(form);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.directory.under_cursor().map(|e| e.id) {
                    self.directory.selection = Selection::ConfirmingDelete(id);
                }
            }
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Char('c') => {
                self.search.reset();
                self.directory.clear_filters();
            }
            KeyCode::Char('f') => {
                self.directory.filter.department =
                    cycle_criterion(&shared::models::Department::ALL, self.directory.filter.department);
                self.directory.cursor = 0;
            }
            KeyCode::Char('o') => {
                self.directory.filter.location =
                    cycle_criterion(&shared::models::Location::ALL, self.directory.filter.location);
                self.directory.cursor = 0;
            }
            KeyCode::Char('s') => {
                self.directory.filter.status = cycle_criterion(
                    &shared::models::EmployeeStatus::ALL,
                    self.directory.filter.status,
                );
                self.directory.cursor = 0;
            }
            KeyCode::Char('v') => self.directory.view_mode = self.directory.view_mode.toggled(),
            KeyCode::Char('r') => self.refresh_employees(),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        if let Selection::Viewing(id) = self.directory.selection {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.directory.dismiss(),
                KeyCode::Char('e') => {
                    let form = self.directory.get(id).map(EmployeeForm::edit);
                    if let Some(form) = form {
                        self.directory.selection = Selection::Editing(form);
                    }
                }
                KeyCode::Char('d') => {
                    self.directory.selection = Selection::ConfirmingDelete(id);
                }
                _ => {}
            }
            return;
        }

        if let Selection::ConfirmingDelete(id) = self.directory.selection {
            match key.code {
                KeyCode::Char('y') => self.confirm_delete(id),
                KeyCode::Char('n') | KeyCode::Esc => self.directory.dismiss(),
                _ => {}
            }
            return;
        }

        if let Selection::Editing(form) = &mut self.directory.selection {
            match key.code {
                KeyCode::Esc => self.directory.dismiss(),
                KeyCode::Tab => form.focus_next(),
                KeyCode::BackTab => form.focus_prev(),
                KeyCode::Enter => self.save_form(),
                _ => form.handle_key(key),
            }
        }
    }

    fn save_form(&mut self) {
        let Selection::Editing(form) = &self.directory.selection else {
            return;
        };
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(err) => {
                self.toasts.error(err.message);
                return;
            }
        };

        let today = chrono::Local::now().date_naive();
        match self.directory.upsert(draft, today) {
            Ok(outcome) => {
                let (id, is_create, toast) = match outcome {
                    UpsertOutcome::Created(id) => (id, true, "Employee added"),
                    UpsertOutcome::Updated(id) => (id, false, "Employee updated"),
                };
                self.directory.dismiss();
                self.toasts.success(toast);

                // Persist the applied record, not the raw draft, so fallback
                // values (join date, defaults) reach the backend resolved.
                let persisted = self.directory.get(id).cloned();
                if let Some(employee) = persisted {
                    let mut draft = EmployeeDraft::from(employee);
                    if is_create {
                        draft.id = None;
                    }
                    self.spawn_persist(draft);
                }
            }
            // Validation failure keeps the form open for correction
            Err(err) => self.toasts.error(err.message),
        }
    }

    fn confirm_delete(&mut self, id: i64) {
        match self.directory.remove(id) {
            Ok(removed) => {
                self.toasts
                    .success(format!("{} removed from the directory", removed.name));
                self.spawn_delete(id, removed.name);
            }
            Err(err) => {
                self.directory.dismiss();
                self.toasts.error(err.message);
            }
        }
    }
}

/// Cycle an optional filter criterion: off, each value in order, off again
fn cycle_criterion<T: Copy + PartialEq>(all: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => Some(all[0]),
        Some(value) => {
            let i = all.iter().position(|v| *v == value).unwrap_or(0);
            if i + 1 < all.len() {
                Some(all[i + 1])
            } else {
                None
            }
        }
    }
}

/// Drive the terminal UI until quit
pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<BackendEvent>,
) -> anyhow::Result<()> {
    app.start_session_probe();

    loop {
        app.toasts.prune();
        terminal.draw(|f| crate::ui::ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    app.handle_key(key);
                }
            }
        }

        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use clap::Parser;
    use shared::models::{Department, EmployeeStatus, UserAccount};

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::parse_from([
            "peoplepulse",
            "--data-dir",
            dir.path().to_str().unwrap(),
        ]);
        let (tx, _rx) = mpsc::unbounded_channel();
        (App::new(&config, tx).unwrap(), dir)
    }

    fn user() -> UserAccount {
        UserAccount {
            id: 1,
            name: "admin".to_string(),
            email: "admin@peoplepulse.io".to_string(),
            role: "admin".to_string(),
            dark_mode_enabled: false,
        }
    }

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            email: format!("{}@peoplepulse.io", name.to_lowercase()),
            department: Department::Engineering,
            designation: "Engineer".to_string(),
            location: Default::default(),
            status: EmployeeStatus::Active,
            join_date: "2024-01-15".parse().unwrap(),
            phone: None,
            avatar: None,
        }
    }

    #[tokio::test]
    async fn test_employees_loaded_replaces_collection() {
        let (mut app, _dir) = test_app();
        app.directory.loading = true;

        app.apply(BackendEvent::EmployeesLoaded(Ok(vec![
            employee(1, "Ada"),
            employee(2, "Grace"),
        ])));

        assert!(!app.directory.loading);
        assert_eq!(app.directory.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_login_toasts_credentials_message() {
        let (mut app, _dir) = test_app();
        app.landing.busy = true;

        app.apply(BackendEvent::LoggedIn(Err(GatewayError::Unauthorized)));

        assert!(!app.landing.busy);
        let toast = app.toasts.iter().next().unwrap();
        assert_eq!(toast.message, "Invalid email or password.");
    }

    #[tokio::test]
    async fn test_invite_success_counts_and_resets_form() {
        let (mut app, _dir) = test_app();
        app.landing.busy = true;

        app.apply(BackendEvent::InviteSent(Ok(InviteOutcome {
            success: true,
            message: "Invitation sent to a@b.co".to_string(),
        })));

        assert_eq!(app.pending_invites, 1);
        assert!(app.landing.invite_sent);
        assert!(!app.landing.busy);
    }

    #[tokio::test]
    async fn test_session_probe_unauthorized_is_quiet() {
        let (mut app, _dir) = test_app();

        app.apply(BackendEvent::SessionResolved(Err(
            GatewayError::Unauthorized,
        )));

        assert!(app.auth.is_ready());
        assert!(app.auth.current_user().is_none());
        assert!(app.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_switching_to_unbuilt_module_toasts() {
        let (mut app, _dir) = test_app();
        app.switch_module(Module::Payroll);

        assert_eq!(app.active, Module::Payroll);
        let toast = app.toasts.iter().next().unwrap();
        assert_eq!(
            toast.message,
            "Payroll module will be available in the full version."
        );
    }

    #[tokio::test]
    async fn test_search_key_updates_filter() {
        let (mut app, _dir) = test_app();
        let probe_route = Route::parse("/");
        app.auth.complete_probe(Some(user()), &probe_route);
        app.active = Module::Employees;
        app.search_active = true;

        app.handle_key(KeyEvent::from(KeyCode::Char('c')));
        app.handle_key(KeyEvent::from(KeyCode::Char('h')));
        assert_eq!(app.directory.filter.search, "ch");

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(!app.search_active);
    }

    #[test]
    fn test_cycle_criterion_wraps_through_off() {
        let all = [1, 2, 3];
        assert_eq!(cycle_criterion(&all, None), Some(1));
        assert_eq!(cycle_criterion(&all, Some(1)), Some(2));
        assert_eq!(cycle_criterion(&all, Some(3)), None);
    }
}
