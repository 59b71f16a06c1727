use shared::domain::EmployeeId;
use thiserror::Error;

/// Failure talking to the remote roster store.
///
/// Two classes are kept apart because they are logged apart: the server
/// answered with an error status, or the request never completed at all.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("server returned status {status} for {operation}")]
    Response {
        operation: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("network failure during {operation}: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid response body for {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Errors the roster controller surfaces to a frontend.
///
/// Gateway failures are deliberately absent: remote operations are
/// fire-and-report and never raise past the controller.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("no employee with id {0}")]
    UnknownEmployee(EmployeeId),
    #[error("no edit form is open")]
    NoEditSession,
}
