/*
[INPUT]:  Outgoing request details and raw responses from dispatch
[OUTPUT]: Callbacks into a caller-provided observer
[POS]:    HTTP layer - optional diagnostic hook for request tracing
[UPDATE]: When dispatch exposes new details to observers
*/

use reqwest::{Method, StatusCode, Url};
use std::time::Duration;

/// What is about to be sent.
///
/// `params` is the final ordered parameter set, including `api_key` and
/// `sign` for signed requests. The secret is never part of it.
#[derive(Debug)]
pub struct RequestDiagnostics<'a> {
    pub method: &'a Method,
    pub url: &'a Url,
    pub params: &'a [(String, String)],
    pub timeout: Duration,
}

/// Observer invoked around every dispatched request
pub trait DiagnosticHook: Send + Sync {
    fn on_request(&self, request: &RequestDiagnostics<'_>);

    fn on_response(&self, _status: StatusCode, _body: &str) {}
}
