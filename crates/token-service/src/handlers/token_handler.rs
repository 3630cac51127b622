use crate::config::Config;
use crate::errors::TokenError;
use crate::models::{RoomTokenRequest, TokenResponse};
use crate::services::signer::TokenSigner;
use crate::services::token_service;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub signer: Arc<dyn TokenSigner>,
}

/// Handle room token request
///
/// POST /get-livekit-token
pub async fn handle_room_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RoomTokenRequest>,
) -> Result<Json<TokenResponse>, TokenError> {
    let token = token_service::issue_room_token(
        &state.config,
        state.signer.as_ref(),
        payload.user_id.as_deref(),
        payload.room_id.as_deref(),
    )
    .await?;

    Ok(Json(token))
}
