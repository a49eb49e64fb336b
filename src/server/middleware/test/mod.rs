use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::account::SessionIdentity,
};
use test_utils::builder::TestBuilder;


fn identity(guild_id: &str) -> SessionIdentity {
    SessionIdentity {
        guild_id: guild_id.to_string(),
        username: "bob".to_string(),
        server_name: Some("Bob's Shop".to_string()),
    }
}
