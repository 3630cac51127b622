//! Room token issuance.

use crate::config::Config;
use crate::errors::TokenError;
use crate::models::{RoomGrant, TokenResponse};
use crate::observability::metrics::record_token_issuance;
use crate::services::signer::TokenSigner;
use std::time::Instant;

/// Issue a signed room token for `user_id` to join `room_id`.
///
/// Preconditions are checked in contract order: request fields first, then
/// server credentials. The signer is never invoked unless both checks pass,
/// and no partial token is ever returned.
pub async fn issue_room_token(
    config: &Config,
    signer: &dyn TokenSigner,
    user_id: Option<&str>,
    room_id: Option<&str>,
) -> Result<TokenResponse, TokenError> {
    let start = Instant::now();

    let (user_id, room_id) = match (user_id, room_id) {
        (Some(user), Some(room)) if !user.is_empty() && !room.is_empty() => (user, room),
        _ => {
            record_token_issuance("invalid_request", start.elapsed());
            return Err(TokenError::InvalidRequest);
        }
    };

    let Some((api_key, api_secret)) = config.signing_credentials() else {
        tracing::error!(
            target: "token_service",
            "Signing credentials are not configured; cannot issue tokens"
        );
        record_token_issuance("not_configured", start.elapsed());
        return Err(TokenError::CredentialsNotConfigured);
    };

    let grant = RoomGrant::publisher(room_id);

    let token = match signer.sign(api_key, api_secret, user_id, &grant).await {
        Ok(token) => token,
        Err(e) => {
            // Full failure detail stays server-side; the response body
            // carries only the generic message.
            if let TokenError::Signing(detail) = &e {
                tracing::error!(
                    target: "token_service",
                    error = %detail,
                    "Token signing failed"
                );
            }
            record_token_issuance("error", start.elapsed());
            return Err(e);
        }
    };

    // The identity and the token itself are sensitive; log only the room.
    tracing::debug!(target: "token_service", room = %room_id, "Issued room token");
    record_token_issuance("success", start.elapsed());

    Ok(TokenResponse { token })
}
