use leptos::prelude::ServerFnError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),
    #[error("Environment variable {0} is set but empty")]
    EmptyEnv(String),
    #[error("Environment variable {0} contains invalid Unicode")]
    InvalidEnv(String),
    #[error("Environment variable {name} has an invalid value: {value}")]
    InvalidValue { name: String, value: String },
    #[error("Server error: {0}")]
    Server(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Every failure the dashboard reports to the user.
///
/// The wallet backend answers business errors with a status code and a
/// `reason`; anything that never produced a response is a transport failure.
/// The enum is tagged so it survives the trip through a server function's
/// error string and can be matched on in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardError {
    #[error("network error: {message}")]
    Transport { message: String },
    #[error("{reason}")]
    Api { status: u16, reason: String },
    #[error("unexpected response: {message}")]
    Decode { message: String },
}

impl DashboardError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Human readable reason, used verbatim in error toasts.
    pub fn reason(&self) -> String {
        match self {
            Self::Api { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn into_server_fn_error(self) -> ServerFnError {
        match serde_json::to_string(&self) {
            Ok(json) => ServerFnError::ServerError(json),
            Err(_) => ServerFnError::ServerError(self.to_string()),
        }
    }

    /// Recovers the tagged error from a server function failure. Errors that
    /// never reached the server function body (request failed, bad payload)
    /// become transport or decode errors.
    pub fn from_server_fn_error(err: ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError(message) => serde_json::from_str(&message)
                .unwrap_or_else(|_| Self::Api {
                    status: 500,
                    reason: message,
                }),
            ServerFnError::Request(message) => Self::Transport { message },
            ServerFnError::Deserialization(message) | ServerFnError::Response(message) => {
                Self::Decode { message }
            }
            other => Self::transport(other.to_string()),
        }
    }
}

impl From<ServerFnError> for DashboardError {
    fn from(err: ServerFnError) -> Self {
        Self::from_server_fn_error(err)
    }
}
