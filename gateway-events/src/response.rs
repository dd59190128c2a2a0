//! Response types

use http::{header::CONTENT_TYPE, StatusCode};
use serde::Serialize;
use std::collections::HashMap;

/// Simple response returned by the authorizer function.
///
/// This is the shape API Gateway expects from a Lambda authorizer configured
/// with simple responses enabled: an allow/deny flag plus a string-to-string
/// context map the platform republishes to the target function. Built fresh
/// per invocation and never persisted.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub is_authorized: bool,
    pub context: HashMap<String, String>,
}

impl AuthorizerResponse {
    /// An allow decision carrying `context` downstream.
    pub fn allow(context: HashMap<String, String>) -> Self {
        AuthorizerResponse {
            is_authorized: true,
            context,
        }
    }

    /// A deny decision. The context still reaches the gateway's access logs,
    /// not the target function.
    pub fn deny(context: HashMap<String, String>) -> Self {
        AuthorizerResponse {
            is_authorized: false,
            context,
        }
    }
}

/// HTTP-style response envelope returned by the business function.
///
/// `body` is a JSON-encoded string, not a JSON object; the gateway passes it
/// through verbatim as the response body.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl BusinessResponse {
    /// Build a JSON response with the given status.
    pub fn json(status: StatusCode, body: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            CONTENT_TYPE.as_str().to_string(),
            "application/json".to_string(),
        );
        BusinessResponse {
            status_code: status.as_u16(),
            headers,
            body: body.to_string(),
        }
    }
}
