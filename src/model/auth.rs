use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credentials posted to `/local-login`.
///
/// Missing fields deserialize to empty strings so that an incomplete body is
/// treated as a failed login rather than a malformed request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub success: bool,
    pub guild_id: String,
}

/// Identity bound to the caller's session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfoDto {
    pub guild_id: String,
    pub username: String,
    pub server_name: Option<String>,
}
