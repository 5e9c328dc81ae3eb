/*
[INPUT]:  Error sources (HTTP transport, API rejections, undecodable bodies, serialization)
[OUTPUT]: Structured error types with resolved Allcoin error messages
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or Allcoin publishes new error codes
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Message used when an error code is missing or not in the table
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// Main error type for the Allcoin client
#[derive(Error, Debug)]
pub enum AllcoinError {
    /// The exchange rejected the request, either with a non-2xx status
    /// or with an `error_code` inside a 2xx body
    #[error("API error (status {status}, code {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Response body could not be decoded as JSON
    #[error("Invalid Response: {0}")]
    Request(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AllcoinError {
    /// Build an API error from a raw response.
    ///
    /// The error code is read from the `error_code` field when the body is
    /// JSON. A body that is not JSON keeps its text in the message, unless
    /// the (empty) code happens to resolve through the table.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let (code, fallback) = match serde_json::from_str::<Value>(body) {
            Ok(value) => (
                value.get("error_code").map(render_code).unwrap_or_default(),
                UNKNOWN_ERROR.to_string(),
            ),
            Err(_) => (
                String::new(),
                format!("Invalid JSON error message from Allcoin: {body}"),
            ),
        };

        let message = error_message(&code)
            .map(str::to_string)
            .unwrap_or(fallback);

        AllcoinError::Api {
            status: status.as_u16(),
            code,
            message,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            AllcoinError::Api { status, .. } => Some(*status),
            AllcoinError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Allcoin error code of an API error (may be empty)
    pub fn code(&self) -> Option<&str> {
        match self {
            AllcoinError::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Check if the server rejected the request signature
    pub fn is_signature_error(&self) -> bool {
        self.code() == Some("10007")
    }

    /// Check if error indicates an authentication or authorization failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self.code(), Some("10006" | "10007" | "10029"))
    }
}

fn render_code(value: &Value) -> String {
    match value {
        Value::String(code) => code.clone(),
        other => other.to_string(),
    }
}

/// Resolve an Allcoin error code to its documented message
pub fn error_message(code: &str) -> Option<&'static str> {
    let message = match code {
        "10000" => "Required field, can not be null",
        "10001" => "Request too frequently",
        "10002" => "System error",
        "10006" => "User doesn't exist",
        "10007" => "Signature does not match",
        "10008" => "Illegal parameter",
        "10009" => "Order does not exist",
        "10010" => "Insufficient funds",
        "10012" => "Only support https request",
        "10013" => "Order price is out of range",
        "10014" => "Insufficient coins quantity",
        "10016" => "Failed to get latest transaction price",
        "10017" => "The specified currency does not exist",
        "10018" => "Out of the valid trading time",
        "10019" => "Blacklist user",
        "10022" => "Trading zone is closed",
        "10023" => "Order quantity is out of the time limit",
        "10025" => "Wrong order number",
        "10026" => "Fail to get the info of the trading zone",
        "10027" => "Your order is revoked, please do not repeat the operation",
        "10028" => "The order has been completed and cannot be cancelled",
        "10029" => "Users are not authorized to do the operation",
        "10030" => "System is under maintaince",
        "10031" => "The price has exceeded the daily limitation.",
        "10032" => "The currency purchase has been suspended.",
        "10033" => "The currency sale has been suspended.",
        "10034" => "Pass KYC level 1 to continue",
        _ => return None,
    };
    Some(message)
}

/// Result type alias for Allcoin operations
pub type Result<T> = std::result::Result<T, AllcoinError>;
