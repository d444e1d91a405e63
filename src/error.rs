use std::fmt;

/// Custom error type for fly operations
#[derive(Debug)]
pub enum FlyError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// No target name was given
    NoTarget,
    /// Target name not present in the rc file
    UnknownTarget(String),
    /// Target is present but unusable (not logged in, expired token, ...)
    Target(String),
    /// Failed to read or parse the rc file
    Config(String),
    /// Console or file I/O failed
    Io(String),
    /// JSON parsing error
    Json(String),
    /// YAML parsing error
    Yaml(String),
    /// Interactive confirmation could not be obtained
    Prompt(String),
    /// Neither users nor groups given and no explicit opt-out
    MissingAuth { target: String, team: String },
    /// Operator declined the confirmation prompt
    Aborted,
}

impl fmt::Display for FlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlyError::Http(e) => write!(f, "HTTP request failed: {}", e),
            FlyError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            FlyError::NoTarget => write!(f, "no target specified. specify the target with -t"),
            FlyError::UnknownTarget(name) => write!(f, "unknown target: {}", name),
            FlyError::Target(msg) => write!(f, "{}", msg),
            FlyError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FlyError::Io(msg) => write!(f, "I/O error: {}", msg),
            FlyError::Json(msg) => write!(f, "JSON error: {}", msg),
            FlyError::Yaml(msg) => write!(f, "YAML error: {}", msg),
            FlyError::Prompt(msg) => write!(f, "could not read confirmation: {}", msg),
            FlyError::MissingAuth { target, team } => write!(
                f,
                "no auth methods configured for team '{}' on target '{}'",
                team, target
            ),
            FlyError::Aborted => write!(f, "bailing out"),
        }
    }
}

impl std::error::Error for FlyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlyError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FlyError {
    fn from(err: reqwest::Error) -> Self {
        FlyError::Http(err)
    }
}

impl From<serde_json::Error> for FlyError {
    fn from(err: serde_json::Error) -> Self {
        FlyError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for FlyError {
    fn from(err: serde_yml::Error) -> Self {
        FlyError::Yaml(err.to_string())
    }
}

impl From<std::io::Error> for FlyError {
    fn from(err: std::io::Error) -> Self {
        FlyError::Io(err.to_string())
    }
}

impl From<dialoguer::Error> for FlyError {
    fn from(err: dialoguer::Error) -> Self {
        FlyError::Prompt(err.to_string())
    }
}

/// Result type alias for fly operations
pub type Result<T> = std::result::Result<T, FlyError>;
