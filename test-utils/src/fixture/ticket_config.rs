use serde_json::{json, Value};

/// Creates a button payload with an id and a label.
pub fn button(id: &str, label: &str) -> Value {
    json!({ "id": id, "label": label })
}

/// The configuration a guild gets before anything was saved.
pub fn empty_guild() -> Value {
    json!({
        "buttons": [],
        "categories": {},
        "sellerRoles": [],
        "embed": {},
        "notice": {},
        "title": {},
        "gif": {},
    })
}

/// Wraps one guild configuration into a full document.
pub fn document(guild_id: &str, guild_config: Value) -> Value {
    json!({ "servers": { guild_id: guild_config } })
}
