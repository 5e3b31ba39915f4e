//! Main application state and UI loop
//!
//! Contains the App struct, the screen state machine and the key dispatch

use crate::auth::{self, Registration};
use crate::config::Config;
use crate::consts::app_consts::UI_TICK_MS;
use crate::consumption;
use crate::error::{EcoError, Result};
use crate::session::Session;
use crate::store::Store;
use crate::ui::dialog::{Dialog, DialogOutcome};
use crate::ui::home::{HomeAction, HomeState, render_home};
use crate::ui::login::{LoginAction, LoginState, render_login};
use crate::ui::register::{RegisterAction, RegisterState, render_register};
use crate::ui::splash::render_splash;
use crate::utility::Utility;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub splash_duration: Duration,
    /// Resolved database file, shown in the settings view.
    pub database_path: PathBuf,
    /// Where `config` is persisted; `None` disables saving.
    pub config_path: Option<PathBuf>,
    pub config: Config,
}

impl UIConfig {
    pub fn new(config: Config, config_path: Option<PathBuf>, database_path: PathBuf) -> Self {
        Self {
            with_background_color: config.with_background_color,
            splash_duration: config.splash_duration(),
            database_path,
            config_path,
            config,
        }
    }

    /// Remembers the username for the next login form.
    fn remember_username(&mut self, username: &str) {
        self.config.last_username = Some(username.to_string());
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.config.save(path) {
            log::warn!("Could not save config to {}: {}", path.display(), e);
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Branding shown at start-up for a fixed time.
    Splash { started: Instant },
    Login(LoginState),
    Register(RegisterState),
    /// Navigation shell of a logged-in user.
    Home(Box<HomeState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    store: Store,
    ui_config: UIConfig,
    current_screen: Screen,
    /// Open dialogs, the last one on top.
    dialogs: Vec<Dialog>,
    should_quit: bool,
}

impl App {
    /// Creates a new instance of the application, starting at the splash screen.
    pub fn new(store: Store, ui_config: UIConfig) -> Self {
        Self {
            store,
            ui_config,
            current_screen: Screen::Splash {
                started: Instant::now(),
            },
            dialogs: Vec::new(),
            should_quit: false,
        }
    }

    /// Advances time-driven transitions.
    pub fn tick(&mut self, now: Instant) {
        if let Screen::Splash { started } = self.current_screen {
            if now.duration_since(started) >= self.ui_config.splash_duration {
                self.show_login();
            }
        }
    }

    fn show_login(&mut self) {
        let last = self.ui_config.config.last_username.clone();
        self.current_screen = Screen::Login(LoginState::new(last.as_deref()));
    }

    fn show_message(&mut self, title: &str, text: impl Into<String>) {
        self.dialogs.push(Dialog::message(title, text));
    }

    /// Routes a key press to the top dialog, or to the current screen when no
    /// dialog is open. Only non-recoverable errors are returned.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(dialog) = self.dialogs.last_mut() {
            let outcome = dialog.handle_key(key);
            return self.handle_dialog_outcome(outcome);
        }

        match &mut self.current_screen {
            // The splash cannot be skipped.
            Screen::Splash { .. } => Ok(()),
            Screen::Login(state) => {
                let action = state.handle_key(key);
                self.handle_login_action(action)
            }
            Screen::Register(state) => {
                let action = state.handle_key(key);
                self.handle_register_action(action)
            }
            Screen::Home(state) => {
                let action = state.handle_key(key);
                self.handle_home_action(action)
            }
        }
    }

    fn handle_dialog_outcome(&mut self, outcome: DialogOutcome) -> Result<()> {
        match outcome {
            DialogOutcome::Keep => {}
            DialogOutcome::Close => {
                self.dialogs.pop();
            }
            DialogOutcome::Logout => {
                self.dialogs.pop();
                if let Screen::Home(state) = &self.current_screen {
                    log::info!("User {} logged out", state.session.user_id);
                }
                self.should_quit = true;
            }
            DialogOutcome::Submit { utility, input } => self.save_reading(utility, &input)?,
        }
        Ok(())
    }

    fn save_reading(&mut self, utility: Utility, input: &str) -> Result<()> {
        let Screen::Home(state) = &mut self.current_screen else {
            self.dialogs.pop();
            return Ok(());
        };
        let user_id = state.session.user_id;
        let today = state.session.today();
        let saved = match utility {
            Utility::Electricity => {
                consumption::record_electricity(&self.store, user_id, input, today)
            }
            other => consumption::record_utility(&self.store, user_id, other, input, today),
        };

        match saved {
            Ok(_) => {
                state.refresh(&self.store)?;
                self.dialogs.pop();
                self.show_message("Success", format!("{} data added!", utility));
            }
            Err(EcoError::InvalidNumericInput { input }) => {
                log::debug!("Rejected {} reading {:?}", utility, input);
                self.show_message("Error", "Invalid input. Please enter a number.");
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn handle_login_action(&mut self, action: LoginAction) -> Result<()> {
        match action {
            LoginAction::None => {}
            LoginAction::Quit => self.should_quit = true,
            LoginAction::OpenRegister => {
                self.current_screen = Screen::Register(RegisterState::new());
            }
            LoginAction::SignIn { username, password } => {
                if auth::require_credentials(&username, &password).is_err() {
                    self.show_message("Input Error", "Please enter both username and password.");
                    return Ok(());
                }
                match auth::authenticate(&self.store, &username, &password)? {
                    Some(user_id) => {
                        let session = Session::new(user_id, username.as_str());
                        self.ui_config.remember_username(&username);
                        let mut home = HomeState::new(session, self.ui_config.clone());
                        home.refresh(&self.store)?;
                        self.current_screen = Screen::Home(Box::new(home));
                        self.show_message("Success", format!("Welcome, {}!", username));
                    }
                    None => {
                        if let Screen::Login(state) = &mut self.current_screen {
                            state.reset_password();
                        }
                        let err = EcoError::InvalidCredentials;
                        self.show_message(err.dialog_title(), err.to_string());
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_register_action(&mut self, action: RegisterAction) -> Result<()> {
        match action {
            RegisterAction::None => {}
            RegisterAction::Quit => self.should_quit = true,
            RegisterAction::BackToLogin => self.show_login(),
            RegisterAction::Submit(registration) => self.submit_registration(&registration)?,
        }
        Ok(())
    }

    fn submit_registration(&mut self, registration: &Registration) -> Result<()> {
        if registration.require_all_fields().is_err() {
            self.show_message("Input Error", "Please fill all fields.");
            return Ok(());
        }
        match auth::register(&self.store, registration) {
            Ok(_) => {
                self.current_screen =
                    Screen::Login(LoginState::new(Some(registration.username.as_str())));
                self.show_message("Success", "Account created successfully!");
            }
            Err(EcoError::DuplicateUsername(_)) => {
                self.show_message("Error", "Username already exists, try another.");
            }
            Err(e) if e.is_user_facing() => self.show_message(e.dialog_title(), e.to_string()),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn handle_home_action(&mut self, action: HomeAction) -> Result<()> {
        match action {
            HomeAction::None => {}
            HomeAction::OpenEntry(utility) => self.dialogs.push(Dialog::entry(utility)),
            HomeAction::ConfirmLogout => self.dialogs.push(Dialog::confirm_logout()),
            HomeAction::Reload => {
                if let Screen::Home(state) = &mut self.current_screen {
                    state.refresh(&self.store)?;
                }
            }
        }
        Ok(())
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(UI_TICK_MS);

    loop {
        app.tick(Instant::now());
        terminal.draw(|f| render(f, &app))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for key events
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key)?;
            }
        }
    }
}

/// Renders the current screen and any open dialogs.
pub fn render(f: &mut Frame, app: &App) {
    if app.ui_config.with_background_color && !matches!(app.current_screen, Screen::Home(_)) {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(14, 24, 18))),
            f.area(),
        );
    }

    match &app.current_screen {
        Screen::Splash { .. } => render_splash(f),
        Screen::Login(state) => render_login(f, state),
        Screen::Register(state) => render_register(f, state),
        Screen::Home(state) => render_home(f, state),
    }

    let area = f.area();
    for dialog in &app.dialogs {
        dialog.render(f, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::temp_store;
    use crate::summary::Period;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    fn app() -> (TempDir, App) {
        let (dir, store) = temp_store();
        let mut app = App::new(store, UIConfig::default());
        app.tick(Instant::now());
        (dir, app)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn top_message(app: &App) -> Option<(&str, &str)> {
        match app.dialogs.last() {
            Some(Dialog::Message { title, text }) => Some((title.as_str(), text.as_str())),
            _ => None,
        }
    }

    fn register(app: &mut App, fields: [&str; 4]) {
        // Move focus to the "Create Account" button, wherever it starts.
        let Screen::Login(state) = &app.current_screen else {
            panic!("expected login screen");
        };
        for _ in state.form.focus()..3 {
            press(app, KeyCode::Tab);
        }
        press(app, KeyCode::Enter);
        assert!(matches!(app.current_screen, Screen::Register(_)));
        for field in fields {
            type_text(app, field);
            press(app, KeyCode::Enter);
        }
    }

    fn login(app: &mut App, username: &str, password: &str) {
        type_text(app, username);
        press(app, KeyCode::Enter);
        type_text(app, password);
        press(app, KeyCode::Enter);
    }

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(100, 34);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn splash_waits_and_ignores_keys() {
        let (_dir, store) = temp_store();
        let config = UIConfig {
            splash_duration: Duration::from_secs(4),
            ..UIConfig::default()
        };
        let mut app = App::new(store, config);
        press(&mut app, KeyCode::Enter);
        app.tick(Instant::now());
        assert!(matches!(app.current_screen, Screen::Splash { .. }));
        assert!(screen_text(&app).contains("Save Earth"));

        app.tick(Instant::now() + Duration::from_secs(5));
        assert!(matches!(app.current_screen, Screen::Login(_)));
    }

    #[test]
    fn blank_login_asks_for_both_fields() {
        let (_dir, mut app) = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            top_message(&app),
            Some(("Input Error", "Please enter both username and password."))
        );
        press(&mut app, KeyCode::Enter);
        assert!(app.dialogs.is_empty());
    }

    #[test]
    fn register_then_login_reaches_home() {
        let (_dir, mut app) = app();
        register(&mut app, ["alice", "pw1", "Alice", "a@x.com"]);
        assert_eq!(
            top_message(&app),
            Some(("Success", "Account created successfully!"))
        );
        assert!(matches!(app.current_screen, Screen::Login(_)));
        press(&mut app, KeyCode::Enter);

        // The username is prefilled after registering.
        type_text(&mut app, "pw1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(top_message(&app), Some(("Success", "Welcome, alice!")));
        let Screen::Home(home) = &app.current_screen else {
            panic!("expected home screen");
        };
        assert_eq!(home.display_name(), "Alice");
    }

    #[test]
    fn incomplete_registration_is_rejected() {
        let (_dir, mut app) = app();
        register(&mut app, ["bob", "pw", "", "b@x.com"]);
        assert_eq!(top_message(&app), Some(("Input Error", "Please fill all fields.")));
        assert!(matches!(app.current_screen, Screen::Register(_)));
    }

    #[test]
    fn duplicate_username_is_reported() {
        let (_dir, mut app) = app();
        register(&mut app, ["alice", "pw1", "Alice", "a@x.com"]);
        press(&mut app, KeyCode::Enter);
        register(&mut app, ["alice", "pw2", "Other", "o@x.com"]);
        assert_eq!(
            top_message(&app),
            Some(("Error", "Username already exists, try another."))
        );
    }

    #[test]
    fn wrong_password_fails() {
        let (_dir, mut app) = app();
        register(&mut app, ["alice", "pw1", "Alice", "a@x.com"]);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "nope");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            top_message(&app),
            Some(("Failed", "Invalid username or password."))
        );
        assert!(matches!(app.current_screen, Screen::Login(_)));
    }

    #[test]
    fn unknown_user_fails_like_wrong_password() {
        let (_dir, mut app) = app();
        login(&mut app, "ghost", "pw");
        assert_eq!(
            top_message(&app),
            Some(("Failed", "Invalid username or password."))
        );
    }

    fn logged_in() -> (TempDir, App) {
        let (dir, mut app) = app();
        register(&mut app, ["alice", "pw1", "Alice", "a@x.com"]);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "pw1");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(app.dialogs.is_empty());
        (dir, app)
    }

    fn home(app: &App) -> &HomeState {
        match &app.current_screen {
            Screen::Home(state) => state,
            other => panic!("expected home screen, got {other:?}"),
        }
    }

    #[test]
    fn entry_dialog_saves_and_refreshes() {
        let (_dir, mut app) = logged_in();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.dialogs.last(),
            Some(Dialog::NumericEntry {
                utility: Utility::Electricity,
                ..
            })
        ));
        type_text(&mut app, "123.5");
        press(&mut app, KeyCode::Enter);
        assert_eq!(top_message(&app), Some(("Success", "Electricity data added!")));
        assert_eq!(app.dialogs.len(), 1);
        assert_eq!(home(&app).summary.electricity, 123.5);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('3'));
        type_text(&mut app, "4");
        press(&mut app, KeyCode::Enter);
        assert_eq!(home(&app).summary.gas, 4.0);
        assert_eq!(home(&app).summary.electricity, 123.5);
        assert_eq!(home(&app).history.len(), 1);
        assert_eq!(
            home(&app).tracked_utilities(),
            vec![Utility::Electricity, Utility::Gas]
        );
    }

    #[test]
    fn invalid_entry_keeps_dialog_open() {
        let (_dir, mut app) = logged_in();
        press(&mut app, KeyCode::Char('2'));
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            top_message(&app),
            Some(("Error", "Invalid input. Please enter a number."))
        );
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.dialogs.last(),
            Some(Dialog::NumericEntry {
                utility: Utility::Water,
                ..
            })
        ));
        assert_eq!(home(&app).totals.water, 0.0);
    }

    #[test]
    fn period_change_reloads_totals() {
        let (_dir, mut app) = logged_in();
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(home(&app).period, Period::Weekly);
        assert!(screen_text(&app).contains("Weekly"));
    }

    #[test]
    fn logout_confirmation() {
        let (_dir, mut app) = logged_in();
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.dialogs.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(screen_text(&app).contains("Do you want to logout?"));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn home_renders_summary() {
        let (_dir, mut app) = logged_in();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "7");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        let text = screen_text(&app);
        assert!(text.contains("Electricity: 7 kWh, Water: 0 L, Gas: 0 m3"));
        assert!(text.contains("Welcome back, Alice!"));
    }
}
