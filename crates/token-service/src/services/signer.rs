//! Token signer seam.
//!
//! The LiveKit SDK owns the token format, signing algorithm and expiry
//! policy; this module adapts it behind a trait so issuance logic can be
//! exercised against a mock signer in tests.

use crate::errors::TokenError;
use crate::models::RoomGrant;
use livekit_api::access_token::{AccessToken, VideoGrants};
use secrecy::{ExposeSecret, SecretString};

/// Trait for producing a serialized signed room token (enables mocking).
#[async_trait::async_trait]
pub trait TokenSigner: Send + Sync {
    /// Sign a token binding `identity` to the permissions in `grant`.
    async fn sign(
        &self,
        api_key: &str,
        api_secret: &SecretString,
        identity: &str,
        grant: &RoomGrant,
    ) -> Result<String, TokenError>;
}

/// Production signer backed by the LiveKit server SDK.
///
/// Stateless: credentials are passed per call so the server can start
/// without them and report a configuration error instead of failing to boot.
#[derive(Debug, Clone, Default)]
pub struct LiveKitSigner;

#[async_trait::async_trait]
impl TokenSigner for LiveKitSigner {
    async fn sign(
        &self,
        api_key: &str,
        api_secret: &SecretString,
        identity: &str,
        grant: &RoomGrant,
    ) -> Result<String, TokenError> {
        AccessToken::with_api_key(api_key, api_secret.expose_secret())
            .with_identity(identity)
            .with_grants(VideoGrants {
                room: grant.room.clone(),
                room_join: grant.room_join,
                can_publish: grant.can_publish,
                can_subscribe: grant.can_subscribe,
                ..Default::default()
            })
            .to_jwt()
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

/// Mock signer module for testing.
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock signer for unit and integration tests.
    pub struct MockSigner {
        /// Token returned on success.
        token: String,
        /// Number of signing calls made.
        call_count: AtomicUsize,
        /// Whether to fail every signing attempt.
        return_error: bool,
    }

    impl MockSigner {
        /// Create a mock that returns a fixed token.
        pub fn returning(token: &str) -> Self {
            Self {
                token: token.to_string(),
                call_count: AtomicUsize::new(0),
                return_error: false,
            }
        }

        /// Create a mock that fails every signing attempt.
        pub fn failing() -> Self {
            Self {
                token: String::new(),
                call_count: AtomicUsize::new(0),
                return_error: true,
            }
        }

        /// Get the number of signing calls made.
        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl TokenSigner for MockSigner {
        async fn sign(
            &self,
            _api_key: &str,
            _api_secret: &SecretString,
            _identity: &str,
            _grant: &RoomGrant,
        ) -> Result<String, TokenError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);

            if self.return_error {
                return Err(TokenError::Signing("mock signer failure".to_string()));
            }

            Ok(self.token.clone())
        }
    }
}
