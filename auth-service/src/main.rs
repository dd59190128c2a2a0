use gateway_events::{AuthorizerRequest, AuthorizerResponse};
use lamedh_runtime::{handler_fn, run, Context, Error};
use std::collections::HashMap;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

/// The two tokens the mock policy recognizes. Placeholders for real
/// credential verification.
const VALID_TOKEN: &str = "Bearer valid-token";
const DENIED_TOKEN: &str = "Bearer denied-token";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(LevelFilter::INFO)
        .init();

    run(handler_fn(authorize)).await?;
    Ok(())
}

/// Single-shot allow/deny evaluation of the `Authorization` header.
///
/// Every input shape, including a missing header, maps to a defined branch;
/// nothing here fails the invocation.
async fn authorize(event: AuthorizerRequest, _: Context) -> Result<AuthorizerResponse, Error> {
    info!(event = ?event, "authorizer received event");

    let response = match event.authorization() {
        Some(VALID_TOKEN) => {
            info!(principal = "user123", "authorization successful");
            AuthorizerResponse::allow(decision_context("authorized with valid-token"))
        }
        Some(DENIED_TOKEN) => {
            info!(principal = "user456", "authorization denied");
            AuthorizerResponse::deny(decision_context("Access denied by mock authorizer."))
        }
        _ => {
            info!("authorization failed: no valid token provided");
            AuthorizerResponse::deny(decision_context("No valid token provided."))
        }
    };

    info!(response = ?response, "authorizer returning response");
    Ok(response)
}

/// Context map carried to the target function on allow, and to the gateway's
/// access logs on deny.
fn decision_context(message: &str) -> HashMap<String, String> {
    let mut context = HashMap::new();
    context.insert("message".to_string(), message.to_string());
    context
}
