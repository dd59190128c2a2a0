//! API Gateway HTTP API request adaptations
//!
//! Each function gets its own inbound event type rather than one shared
//! grab-bag: the authorizer only ever looks at headers, the business function
//! only ever looks at the request context the platform populated from the
//! authorizer's output.

use serde::Deserialize;
use std::collections::HashMap;

/// Inbound event for the authorizer function.
///
/// API Gateway sends the full HTTP API payload; only the pieces the
/// authorizer inspects (and echoes to its diagnostic log) are modeled here.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizerRequest {
    /// ARN of the route under authorization, passed through for diagnostics.
    pub route_arn: Option<String>,
    /// Values API Gateway extracted from the configured identity sources.
    pub identity_source: Vec<String>,
    /// Request headers as delivered by the gateway.
    pub headers: HashMap<String, String>,
}

impl AuthorizerRequest {
    /// Value of the `Authorization` header, if the caller sent one.
    ///
    /// Absence is a valid state and maps to the deny branch, so this is an
    /// `Option`, not an error.
    pub fn authorization(&self) -> Option<&str> {
        self.header(http::header::AUTHORIZATION.as_str())
    }

    /// Case-insensitive header lookup, per HTTP header-name semantics.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Inbound event for the business logic function.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessRequest {
    /// Context the platform attaches to the forwarded request.
    pub request_context: RequestContext,
}

impl BusinessRequest {
    /// The context payload the authorizer attached, if any.
    ///
    /// Traverses `requestContext.authorizer.lambda`; every level may be
    /// absent, and an absent level reads as "no context".
    pub fn authorizer_context(&self) -> Option<&AuthorizerContext> {
        self.request_context
            .authorizer
            .as_ref()
            .and_then(|authorizer| authorizer.lambda.as_ref())
    }
}

/// Request context of an HTTP API payload, reduced to the authorizer branch.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    /// Present only on routes that have an authorizer configured.
    pub authorizer: Option<AuthorizerDescription>,
}

/// Authorizer output as the platform republishes it downstream.
///
/// A Lambda authorizer's context lands under the `lambda` key; JWT authorizer
/// claims would land elsewhere and are out of scope here.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AuthorizerDescription {
    pub lambda: Option<AuthorizerContext>,
}

/// The contract field both functions agree on.
///
/// Everything is optional: the mock authorizer only ever sets `message`, and
/// the business function tolerates any subset of the rest.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizerContext {
    pub user_id: Option<String>,
    pub roles: Option<String>,
    pub custom_data: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use serde_json::json;

    #[test]
    fn deserializes_authorizer_event() {
        let event: AuthorizerRequest = serde_json::from_value(json!({
            "version": "2.0",
            "type": "REQUEST",
            "routeArn": "arn:aws:execute-api:us-east-1:123456789012:abcdef123/test/GET/hello",
            "identitySource": ["Bearer valid-token"],
            "routeKey": "GET /hello",
            "rawPath": "/test/hello",
            "headers": {
                "authorization": "Bearer valid-token",
                "x-forwarded-proto": "https"
            }
        }))
        .expect("failed to deserialize authorizer event");

        assert_eq!(event.authorization(), Some("Bearer valid-token"));
        assert_eq!(event.identity_source, vec!["Bearer valid-token"]);
        assert!(event.route_arn.expect("missing routeArn").ends_with("GET/hello"));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let event = AuthorizerRequest {
            headers: hashmap! {
                "Authorization".to_string() => "Bearer valid-token".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(event.authorization(), Some("Bearer valid-token"));
    }

    #[test]
    fn empty_object_is_a_valid_authorizer_event() {
        let event: AuthorizerRequest =
            serde_json::from_value(json!({})).expect("failed to deserialize empty event");
        assert_eq!(event.authorization(), None);
    }

    #[test]
    fn deserializes_business_event_with_authorizer_context() {
        let event: BusinessRequest = serde_json::from_value(json!({
            "version": "2.0",
            "rawPath": "/test/hello",
            "requestContext": {
                "accountId": "123456789012",
                "authorizer": {
                    "lambda": {
                        "userId": "u1",
                        "roles": "admin",
                        "message": "authorized with valid-token"
                    }
                }
            }
        }))
        .expect("failed to deserialize business event");

        let context = event.authorizer_context().expect("missing authorizer context");
        assert_eq!(context.user_id.as_deref(), Some("u1"));
        assert_eq!(context.roles.as_deref(), Some("admin"));
        assert_eq!(context.custom_data, None);
        assert_eq!(context.message.as_deref(), Some("authorized with valid-token"));
    }

    #[test]
    fn absent_authorizer_reads_as_no_context() {
        let bare: BusinessRequest =
            serde_json::from_value(json!({})).expect("failed to deserialize empty event");
        assert!(bare.authorizer_context().is_none());

        let no_lambda: BusinessRequest = serde_json::from_value(json!({
            "requestContext": { "authorizer": {} }
        }))
        .expect("failed to deserialize event without lambda context");
        assert!(no_lambda.authorizer_context().is_none());
    }
}
