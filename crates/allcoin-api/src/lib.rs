/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Allcoin client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client for the Allcoin exchange REST API.
//!
//! Every endpoint is a method on [`AllcoinClient`] returning the decoded
//! JSON body, or an [`AllcoinError`] when the exchange rejects the request
//! or answers with something that is not JSON.
//!
//! ```rust,no_run
//! use allcoin_api::{AllcoinClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AllcoinClient::new(Credentials::new("api_key", "api_secret"))?;
//!     let book = client.get_order_book("eth_btc", None, None).await?;
//!     println!("{book}");
//!     Ok(())
//! }
//! ```

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    AllcoinClient,
    AllcoinError,
    ClientConfig,
    Credentials,
    DiagnosticHook,
    Method,
    Params,
    RequestDiagnostics,
    RequestOptions,
    RequestSigner,
    Result,
    StatusCode,
};
pub use http::trade::{DEFAULT_HISTORY_PAGE, DEFAULT_HISTORY_PAGE_LENGTH};

// Re-export all types
pub use types::*;
