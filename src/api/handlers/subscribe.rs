use crate::{
    api::{AppState, handlers::json_body, responses::SubscribeResponse},
    core::subscription::{self, SubscribeInput},
    errors::Result,
};
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use tracing::{info, instrument};

/// `POST /subscribe`
///
/// Responds 201 with the stored subscriber, 400 when the payload is malformed
/// or fails validation.
#[instrument(skip_all)]
pub async fn subscribe(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubscribeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<SubscribeResponse>)> {
    let input = json_body(payload)?;
    let subscriber = subscription::create_subscriber(&state.database, input).await?;
    info!(id = subscriber.id, plan = %subscriber.plan, "New subscriber");

    Ok((
        StatusCode::CREATED,
        Json(SubscribeResponse {
            ok: true,
            subscriber,
        }),
    ))
}
