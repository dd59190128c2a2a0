use gateway_events::{BusinessRequest, BusinessResponse};
use http::StatusCode;
use lamedh_runtime::{handler_fn, run, Context, Error};
use serde_json::json;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(LevelFilter::INFO)
        .init();

    run(handler_fn(greet)).await?;
    Ok(())
}

/// Format a greeting from whatever context the authorizer attached.
///
/// Missing fields drop their clause; they never fail the invocation.
async fn greet(event: BusinessRequest, _: Context) -> Result<BusinessResponse, Error> {
    info!(event = ?event, "business logic received event");

    let mut greeting = String::from("Hello from Business Logic!");
    if let Some(context) = event.authorizer_context() {
        if let Some(user_id) = &context.user_id {
            let roles = context.roles.as_deref().unwrap_or_default();
            greeting.push_str(&format!(
                " Authenticated as User: {} with Roles: {}.",
                user_id, roles
            ));
        }
        if let Some(custom_data) = &context.custom_data {
            greeting.push_str(&format!(" Custom data from Authorizer: \"{}\".", custom_data));
        } else if let Some(message) = &context.message {
            greeting.push_str(&format!(" Message from Authorizer: \"{}\".", message));
        }
    }

    Ok(BusinessResponse::json(
        StatusCode::OK,
        &json!({ "message": greeting }),
    ))
}
