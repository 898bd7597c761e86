//! Greeting endpoint.

use axum::Json;
use common::Greeting;

/// GET /hello — returns the fixed `hello world` greeting.
#[tracing::instrument]
pub async fn get() -> Json<Greeting> {
    metrics::counter!("greetings_served_total").increment(1);
    Json(Greeting::hello_world())
}
