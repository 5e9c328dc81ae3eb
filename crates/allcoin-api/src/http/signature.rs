/*
[INPUT]:  Request parameters and API credentials
[OUTPUT]: Canonically ordered parameters and MD5 request signatures (sign field)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter ordering
*/

use md5::{Digest, Md5};

use crate::http::{Credentials, Params};

/// Name of the signature parameter
pub const SIGNATURE_FIELD: &str = "sign";
/// Name of the API key parameter added to signed requests
pub const API_KEY_FIELD: &str = "api_key";
/// Name under which the secret is appended to the signed payload
const SECRET_FIELD: &str = "secret_key";

/// Canonical parameter order.
///
/// All entries except `sign` sorted by name (byte order), followed by the
/// `sign` entry when one is present.
pub fn order_params(params: &Params) -> Vec<(String, String)> {
    let mut signature = None;
    let mut ordered = Vec::with_capacity(params.len());
    for (name, value) in params.iter() {
        if name == SIGNATURE_FIELD {
            signature = Some(value.to_string());
        } else {
            ordered.push((name.to_string(), value.to_string()));
        }
    }

    ordered.sort_by(|a, b| a.0.cmp(&b.0));

    if let Some(signature) = signature {
        ordered.push((SIGNATURE_FIELD.to_string(), signature));
    }
    ordered
}

fn join_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signs request parameters with the caller's secret
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// The exact string that is hashed.
    ///
    /// Contains the secret; never log it.
    pub fn query_string(&self, params: &Params) -> String {
        let mut ordered = order_params(params);
        ordered.push((
            SECRET_FIELD.to_string(),
            self.credentials.expose_secret().to_string(),
        ));
        join_pairs(&ordered)
    }

    /// Uppercase hex MD5 of the canonical query string
    pub fn sign(&self, params: &Params) -> String {
        let digest = Md5::digest(self.query_string(params).as_bytes());
        hex::encode_upper(digest)
    }

    /// Owned copy of `params` with `api_key` and `sign` attached
    pub fn sign_params(&self, params: &Params) -> Params {
        let mut signed = params.clone();
        signed.insert(API_KEY_FIELD, self.credentials.api_key());
        let signature = self.sign(&signed);
        signed.insert(SIGNATURE_FIELD, signature);
        signed
    }
}
