use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::clock::Clock;

/// Response from the /time endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct TimeResponse {
    /// Current server time, UTC ISO-8601 with millisecond precision
    #[serde(rename = "currentTime")]
    pub current_time: String,
}

impl TimeResponse {
    /// Wrap an instant as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    ///
    /// Milliseconds are truncated and zero-padded to exactly three
    /// digits; the timezone designator is always `Z`.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self {
            current_time: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Return the current server time
///
/// The wall clock is read at handling time; the value is never cached.
/// Query parameters and request bodies are ignored.
#[utoipa::path(
    get,
    path = "/time",
    responses(
        (status = 200, description = "Current server time", body = TimeResponse),
    ),
    tag = "Time"
)]
pub async fn handle_time(State(clock): State<Arc<dyn Clock>>) -> impl IntoResponse {
    Json(TimeResponse::from_instant(clock.now()))
}
