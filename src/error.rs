/// Error types for the admin panel client.
/// Covers remote collection operations, command parsing, and form binding.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("State error: {0}")]
    State(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Server("status 500".to_string());
        assert!(err.to_string().contains("Server error"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let client_err: ClientError = io_err.into();
        assert!(client_err.to_string().contains("IO error"));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        let err_result: Result<i32> = Err(ClientError::State("modal closed".to_string()));

        assert!(ok_result.is_ok());
        assert!(err_result.is_err());
    }
}
