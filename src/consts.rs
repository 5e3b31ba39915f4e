pub mod app_consts {
    //! Application Constants
    //!
    //! This module contains the fixed values used across the application,
    //! organized by functional area.

    // =============================================================================
    // STORAGE CONFIGURATION
    // =============================================================================

    /// Database file created in the working directory when nothing else is configured.
    pub const DEFAULT_DATABASE_FILE: &str = "ecostar_pro.db";

    /// Environment variable overriding the database location.
    pub const DATABASE_ENV_VAR: &str = "ECOSTAR_DB";

    /// Directory under the user's home holding config and log files.
    pub const APP_DIR_NAME: &str = ".ecostar";

    /// Config file name inside [`APP_DIR_NAME`].
    pub const CONFIG_FILE_NAME: &str = "config.json";

    /// Log file name inside [`APP_DIR_NAME`].
    pub const LOG_FILE_NAME: &str = "ecostar.log";

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Seconds the splash screen stays up before the login screen appears.
    pub const DEFAULT_SPLASH_SECS: u64 = 4;

    /// Event poll interval of the UI loop (milliseconds)
    pub const UI_TICK_MS: u64 = 100;

    /// Number of columns in the utility button grid.
    pub const UTILITY_GRID_COLUMNS: usize = 2;

    // =============================================================================
    // DEVELOPER RELOAD
    // =============================================================================

    /// Source watcher configuration
    pub mod reload {
        /// Default directory watched for changes.
        pub const DEFAULT_WATCH_DIR: &str = "src";

        /// Default file extension that triggers a restart.
        pub const DEFAULT_WATCH_EXT: &str = "rs";

        /// Quiet period after the last file event before restarting (milliseconds)
        pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
    }
}
