use clap::Parser;
use gtk4::prelude::*;
use gtk4::Application;
use log::{info, warn};
use pipemon::config::AppConfig;
use pipemon::store::CredentialStore;
use std::path::PathBuf;
use std::rc::Rc;

const APP_ID: &str = "com.github.pipemon";

/// pipemon - Login-gated pipeline sensor monitoring demo for Linux
#[derive(Parser, Debug, Clone)]
#[command(name = "pipemon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Credential database file (overrides the configured location)
    #[arg(long = "database", value_name = "FILE")]
    database: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Global CLI options accessible from build_ui
static CLI_OPTIONS: std::sync::OnceLock<Cli> = std::sync::OnceLock::new();

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("Starting pipemon v{}", env!("CARGO_PKG_VERSION"));

    // Store CLI options for access in build_ui
    CLI_OPTIONS.set(cli).expect("CLI options already set");

    // Create GTK application
    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(build_ui);

    // Run the application (pass empty args since we already parsed them)
    app.run_with_args(&["pipemon"]);
}

fn build_ui(app: &Application) {
    info!("Building UI");

    let cli = CLI_OPTIONS.get().cloned().unwrap_or(Cli {
        database: None,
        debug: 0,
    });

    // Load configuration
    let config = match AppConfig::load() {
        Ok(config) => {
            info!("Loaded configuration from disk");
            config
        }
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    };

    // Persist the configuration so a file exists for users to edit
    if let Err(e) = config.save() {
        warn!("Failed to persist configuration: {}", e);
    }

    // Database location: CLI flag beats the settings file beats the
    // per-user data directory
    let store = match cli.database.or_else(|| config.database_path.clone()) {
        Some(path) => CredentialStore::new(path),
        None => CredentialStore::open_default(),
    };
    info!("Using credential database at {}", store.path().display());

    // Idempotent: creates the users table and seeds the four fixed
    // accounts on first run. Failure is logged and the app continues.
    store.initialize();

    pipemon::ui::present_login_window(app, Rc::new(store), Rc::new(config));
}
