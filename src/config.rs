/// Configuration constants for the CI server API
pub mod api {
    /// Base path for API v1
    pub const BASE_PATH: &str = "/api/v1";

    /// Server info endpoint
    pub const INFO: &str = "info";

    /// Teams endpoint
    pub const TEAMS: &str = "teams";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for the targets rc file
pub mod rc {
    /// Rc file name (relative to HOME)
    pub const FILE_NAME: &str = ".flyrc";

    /// Environment variable selecting the target
    pub const TARGET_ENV_VAR: &str = "FLY_TARGET";
}

/// Auth map keys sent to the server
pub mod auth {
    pub const USERS: &str = "users";
    pub const GROUPS: &str = "groups";
}

/// Default values for CLI
pub mod defaults {
    /// Binary name used in suggested commands
    pub const BIN_NAME: &str = "fly";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Log level forced by --verbose
    pub const VERBOSE_LOG_LEVEL: &str = "debug";
}
