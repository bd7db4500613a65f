use thiserror::Error;

/// Errors produced while decoding inbound backend messages.
#[derive(Debug, Error)]
pub enum SidebarError {
    #[error("backend payload JSON failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown backend event: {0}")]
    UnknownEvent(String),
}

/// Errors emitted while reading or writing the preference file.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("preferences IO failed")]
    Io(#[from] std::io::Error),
    #[error("preferences JSON failed")]
    Json(#[from] serde_json::Error),
}
