mod auth;
mod cli_messages;
mod config;
mod consts;
mod consumption;
mod error;
mod logging;
mod reload;
mod session;
mod store;
mod summary;
mod ui;
mod utility;

use crate::auth::Registration;
use crate::config::{Config, get_config_path, get_log_path};
use crate::consts::app_consts::DATABASE_ENV_VAR;
use crate::consts::app_consts::reload::{DEFAULT_DEBOUNCE_MS, DEFAULT_WATCH_DIR, DEFAULT_WATCH_EXT};
use crate::error::EcoError;
use crate::reload::WatchOptions;
use crate::store::{Store, UserId};
use crate::summary::Period;
use crate::utility::Utility;
use chrono::Local;
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Database file. Overrides the config file.
    #[arg(long, global = true, env = DATABASE_ENV_VAR, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Command to execute; defaults to `start`
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive application
    Start,
    /// Create a user account
    RegisterUser {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Full name
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Record today's reading for one utility
    Record {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Electricity, water, gas, oil, cng or petrol
        #[arg(long, value_parser = Utility::from_str)]
        utility: Utility,
        /// Reading, as typed in the entry dialog
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
    /// Print the consumption summary of a user
    Summary {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// daily, weekly, monthly or all
        #[arg(long, default_value = "daily", value_parser = Period::from_str)]
        period: Period,
    },
    /// Rerun a command whenever a source file changes
    Watch {
        /// Directory to watch
        #[arg(long, default_value = DEFAULT_WATCH_DIR)]
        dir: PathBuf,
        /// File extension that triggers a restart
        #[arg(long, default_value = DEFAULT_WATCH_EXT)]
        ext: String,
        /// Quiet period after a change before restarting, in milliseconds
        #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS)]
        debounce_ms: u64,
        /// Command to run, after `--`
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Err(e) = get_log_path().and_then(|path| logging::init_file_logging(&path)) {
        eprintln!("Failed to set up logging: {}", e);
    }

    let config_path = get_config_path().ok();
    let config = match &config_path {
        Some(path) => Config::load_or_default(path).map_err(|e| {
            EcoError::Config(format!("Failed to load {}: {}", path.display(), e))
        })?,
        None => Config::default(),
    };
    let database_path = config.resolve_database_path(args.database.as_deref());
    let store = Store::new(&database_path);
    log::info!("Using database {}", store.path().display());

    match args.command.unwrap_or(Command::Start) {
        Command::Start => {
            log::info!("{} registered users", store.count_users()?);
            let ui_config = ui::UIConfig::new(config, config_path, database_path);
            start(store, ui_config)
        }
        Command::RegisterUser {
            username,
            password,
            name,
            email,
        } => {
            let registration = Registration {
                username: username.trim().to_string(),
                password: password.trim().to_string(),
                name: name.map(|n| n.trim().to_string()),
                email: email.map(|e| e.trim().to_string()),
            };
            auth::require_credentials(&registration.username, &registration.password)?;
            match auth::register(&store, &registration) {
                Ok(id) => {
                    print_cmd_success!(
                        "Account created successfully!",
                        "user {} has id {}",
                        registration.username,
                        id
                    );
                    Ok(())
                }
                Err(e) => {
                    print_cmd_error!("Failed to register user", e.to_string().as_str());
                    Err(e.into())
                }
            }
        }
        Command::Record {
            username,
            password,
            utility,
            value,
        } => {
            let user_id = login(&store, &username, &password)?;
            let today = Local::now().date_naive();
            let saved = match utility {
                Utility::Electricity => {
                    consumption::record_electricity(&store, user_id, &value, today)
                }
                other => consumption::record_utility(&store, user_id, other, &value, today),
            };
            match saved {
                Ok(amount) => {
                    print_cmd_success!(
                        &format!("{} data added!", utility),
                        "{} {} on {}",
                        amount,
                        utility.unit(),
                        today
                    );
                    Ok(())
                }
                Err(e) => {
                    print_cmd_error!("Invalid input. Please enter a number.", e.to_string().as_str());
                    Err(e.into())
                }
            }
        }
        Command::Summary {
            username,
            password,
            period,
        } => {
            let user_id = login(&store, &username, &password)?;
            let today = Local::now().date_naive();
            let headline = summary::get_summary(&store, user_id, period, today)?;
            let totals = summary::get_totals(&store, user_id, period, today)?;
            print_cmd_info!(
                &format!("Consumption summary ({})", period),
                "Electricity: {} kWh, Water: {} L, Gas: {} m3",
                headline.electricity,
                headline.water,
                headline.gas
            );
            for utility in Utility::all() {
                println!("  {:<12} {} {}", utility.to_string(), totals.get(utility), utility.unit());
            }
            Ok(())
        }
        Command::Watch {
            dir,
            ext,
            debounce_ms,
            command,
        } => reload::run_watch(&WatchOptions {
            dir,
            ext,
            debounce: Duration::from_millis(debounce_ms),
            command,
        }),
    }
}

/// Authenticates a headless command, reporting bad credentials on the console.
fn login(store: &Store, username: &str, password: &str) -> Result<UserId, Box<dyn Error>> {
    let username = username.trim();
    let password = password.trim();
    auth::require_credentials(username, password)?;
    match auth::authenticate(store, username, password)? {
        Some(id) => Ok(id),
        None => {
            let err = EcoError::InvalidCredentials;
            print_cmd_error!(&err.to_string());
            Err(err.into())
        }
    }
}

/// Starts the interactive application.
fn start(store: Store, ui_config: ui::UIConfig) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(store, ui_config);
    let res = ui::run(&mut terminal, app);

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        log::error!("Application error: {}", e);
    }
    res
}
