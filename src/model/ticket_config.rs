//! Guild ticket configuration as read by the ticket bot.
//!
//! The surfaces (`embed`, `notice`, `title`, `gif`), `categories` and the
//! display fields of each button are open JSON so the bot can evolve its schema
//! without this panel dropping fields it does not know about. Only the button
//! `id` is inspected here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A ticket button submitted by the panel, validated to carry a string `id`.
///
/// Buttons already on disk are kept as raw JSON in [`GuildConfig::buttons`],
/// since entries written by older panels may lack an `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub id: String,
    /// Every other field sent by the panel (label, emoji, style, ...).
    pub fields: Map<String, Value>,
}

impl Button {
    /// The stored form of the button: its fields with `id` put back in.
    pub fn into_value(self) -> Value {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        Value::Object(fields)
    }
}

/// Ticket configuration for a single guild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildConfig {
    /// Stored buttons, matched by their `id` field on upsert and delete.
    #[serde(default)]
    pub buttons: Vec<Value>,
    #[serde(default)]
    pub categories: Map<String, Value>,
    #[serde(default)]
    pub seller_roles: Vec<Value>,
    #[serde(default = "empty_object")]
    pub embed: Value,
    #[serde(default = "empty_object")]
    pub notice: Value,
    #[serde(default = "empty_object")]
    pub title: Value,
    #[serde(default = "empty_object")]
    pub gif: Value,
    /// Keys written by the bot that the panel does not manage.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GuildConfig {
    fn default() -> Self {
        Self {
            buttons: Vec::new(),
            categories: Map::new(),
            seller_roles: Vec::new(),
            embed: empty_object(),
            notice: empty_object(),
            title: empty_object(),
            gif: empty_object(),
            extra: Map::new(),
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketConfigResponseDto {
    pub success: bool,
    #[schema(value_type = Object)]
    pub config: GuildConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ButtonUpdateDto {
    /// Button payload; must carry a non-empty string `id`.
    #[schema(value_type = Option<Object>)]
    pub button: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EmbedUpdateDto {
    #[schema(value_type = Option<Object>)]
    pub embed: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NoticeUpdateDto {
    #[schema(value_type = Option<Object>)]
    pub notice: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TitleUpdateDto {
    #[schema(value_type = Option<Object>)]
    pub title: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GifUpdateDto {
    #[schema(value_type = Option<Object>)]
    pub gif: Option<Value>,
}
