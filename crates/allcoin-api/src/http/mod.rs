/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Decoded JSON responses and typed API errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod params;
pub mod public;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{AllcoinError, Result, error_message};
pub use params::Params;
pub use signature::{RequestSigner, order_params};

pub use client::{AllcoinClient, Credentials, handle_response};
pub use config::{ClientConfig, RequestOptions};
pub use diagnostics::{DiagnosticHook, RequestDiagnostics};
pub use reqwest::{Method, StatusCode};
