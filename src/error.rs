//! Load error taxonomy.
//!
//! Every failure on the way to a usable dataset — connection problems,
//! timeouts, non-success HTTP statuses, malformed bodies — collapses into a
//! single [`LoadError`]. The UI shows one user-facing message; the variant
//! keeps enough of the underlying cause for a diagnostic log line.

use std::fmt;

/// The one way loading the country dataset can fail.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// Connection to the API host failed.
    ConnectionFailed {
        url: String,
        message: String,
    },

    /// The request timed out.
    Timeout {
        duration_secs: u64,
    },

    /// The server answered with a non-success status.
    HttpStatus {
        status: u16,
        message: String,
    },

    /// The response body was not the expected JSON array.
    InvalidBody {
        message: String,
    },

    /// Anything reqwest reports that fits none of the above.
    Other {
        message: String,
    },
}

impl LoadError {
    /// Check if this error is likely transient and a later run could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            LoadError::ConnectionFailed { .. } => true,
            LoadError::Timeout { .. } => true,
            LoadError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            LoadError::InvalidBody { .. } => false,
            LoadError::Other { .. } => false,
        }
    }

    /// Get the message rendered into the content area on a failed load.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::ConnectionFailed { .. } => {
                "Unable to reach the country data service. Please check your internet connection."
                    .to_string()
            }
            LoadError::Timeout { duration_secs } => {
                format!(
                    "The request timed out after {} seconds. The service may be slow or unreachable.",
                    duration_secs
                )
            }
            LoadError::HttpStatus { status, .. } => match *status {
                404 => "The country dataset was not found at the configured endpoint.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The country data service is experiencing issues. Please try again later."
                        .to_string()
                }
                _ => format!(
                    "The service returned an error (HTTP {}). Please try again later.",
                    status
                ),
            },
            LoadError::InvalidBody { .. } => {
                "Received an invalid response from the country data service.".to_string()
            }
            LoadError::Other { message } => {
                format!("Failed to fetch country data: {}", message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            LoadError::ConnectionFailed { .. } => "E_LOAD_CONN",
            LoadError::Timeout { .. } => "E_LOAD_TIMEOUT",
            LoadError::HttpStatus { .. } => "E_LOAD_HTTP",
            LoadError::InvalidBody { .. } => "E_LOAD_BODY",
            LoadError::Other { .. } => "E_LOAD_OTHER",
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            LoadError::Timeout { duration_secs } => {
                write!(f, "Request timed out after {} seconds", duration_secs)
            }
            LoadError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            LoadError::InvalidBody { message } => {
                write!(f, "Invalid response body: {}", message)
            }
            LoadError::Other { message } => {
                write!(f, "Load error: {}", message)
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::InvalidBody {
            message: e.to_string(),
        }
    }
}

/// Classify a reqwest error into a LoadError.
pub fn classify_reqwest_error(err: &reqwest::Error, url: &str, timeout_secs: u64) -> LoadError {
    if err.is_timeout() {
        LoadError::Timeout {
            duration_secs: timeout_secs,
        }
    } else if err.is_connect() {
        LoadError::ConnectionFailed {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_decode() {
        LoadError::InvalidBody {
            message: err.to_string(),
        }
    } else if let Some(status) = err.status() {
        LoadError::HttpStatus {
            status: status.as_u16(),
            message: err.to_string(),
        }
    } else {
        LoadError::Other {
            message: err.to_string(),
        }
    }
}
