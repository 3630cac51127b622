use serde::{Deserialize, Serialize};

/// Credential request body for `POST /get-livekit-token`.
///
/// Both fields are required for issuance but modeled as `Option` so a
/// missing field produces the contract error message instead of a generic
/// deserialization failure. Wrong-typed fields (e.g. a number where a
/// string belongs) are still rejected at the JSON layer before any business
/// logic runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTokenRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
}

/// Successful issuance response carrying the opaque serialized token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Permission flags embedded in an issued room token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGrant {
    pub room: String,
    pub room_join: bool,
    pub can_publish: bool,
    pub can_subscribe: bool,
}

impl RoomGrant {
    /// Full join/publish/subscribe access to a single room.
    ///
    /// Every token issued by this service carries exactly this grant set;
    /// finer-grained permissions are not part of the endpoint contract.
    pub fn publisher(room: &str) -> Self {
        Self {
            room: room.to_string(),
            room_join: true,
            can_publish: true,
            can_subscribe: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: RoomTokenRequest =
            serde_json::from_str(r#"{"userId":"alice","roomId":"room1"}"#).unwrap();

        assert_eq!(request.user_id.as_deref(), Some("alice"));
        assert_eq!(request.room_id.as_deref(), Some("room1"));
    }

    #[test]
    fn test_request_missing_fields_become_none() {
        let request: RoomTokenRequest = serde_json::from_str("{}").unwrap();
        assert!(request.user_id.is_none());
        assert!(request.room_id.is_none());

        let request: RoomTokenRequest = serde_json::from_str(r#"{"userId":"alice"}"#).unwrap();
        assert_eq!(request.user_id.as_deref(), Some("alice"));
        assert!(request.room_id.is_none());
    }

    #[test]
    fn test_request_rejects_wrong_typed_fields() {
        let result = serde_json::from_str::<RoomTokenRequest>(r#"{"userId":42,"roomId":"room1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_ignores_snake_case_names() {
        // The wire contract is camelCase; snake_case keys are unknown fields.
        let request: RoomTokenRequest =
            serde_json::from_str(r#"{"user_id":"alice","room_id":"room1"}"#).unwrap();
        assert!(request.user_id.is_none());
        assert!(request.room_id.is_none());
    }

    #[test]
    fn test_token_response_shape() {
        let response = TokenResponse {
            token: "opaque".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "token": "opaque" }));
    }

    #[test]
    fn test_publisher_grant_flags() {
        let grant = RoomGrant::publisher("room1");

        assert_eq!(grant.room, "room1");
        assert!(grant.room_join);
        assert!(grant.can_publish);
        assert!(grant.can_subscribe);
    }
}
