use serde_json::{json, Value};

pub const USERNAME: &str = "bob";
pub const PASSWORD: &str = "x";
pub const GUILD_ID: &str = "G1";

/// Creates an account record without a server name.
pub fn entry(username: &str, password: &str, guild_id: &str) -> Value {
    json!({
        "username": username,
        "password": password,
        "guildId": guild_id,
    })
}

/// Creates an account record carrying a server name.
pub fn entry_with_server(
    username: &str,
    password: &str,
    guild_id: &str,
    server_name: &str,
) -> Value {
    json!({
        "username": username,
        "password": password,
        "guildId": guild_id,
        "serverName": server_name,
    })
}

/// Default table: `{ "a1": { "username": "bob", "password": "x", "guildId": "G1" } }`.
pub fn table() -> Value {
    json!({ "a1": entry(USERNAME, PASSWORD, GUILD_ID) })
}
