//! Configuration document and the per-guild mutations applied to it.
//!
//! The document is always handled as a whole: it is loaded, one guild entry is
//! ensured and mutated in memory, and the complete document is written back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::model::ticket_config::{Button, GuildConfig};

/// The full on-disk document: `{ "servers": { "<guild id>": GuildConfig } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub servers: BTreeMap<String, GuildConfig>,
    /// Top-level keys other than `servers`, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigDocument {
    /// Returns the guild's configuration, creating an empty entry first if the
    /// guild has never been touched.
    pub fn ensure_guild(&mut self, guild_id: &str) -> &mut GuildConfig {
        self.servers.entry(guild_id.to_string()).or_default()
    }
}

/// Outcome of [`GuildConfig::upsert_button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonUpsert {
    /// An existing button with the same id was replaced at this index.
    Replaced(usize),
    /// No button had the id; the new one was appended.
    Appended,
}

impl GuildConfig {
    /// Replaces the button with the same id in place, or appends it.
    pub fn upsert_button(&mut self, button: Button) -> ButtonUpsert {
        let position = self
            .buttons
            .iter()
            .position(|stored| stored_button_id(stored) == Some(button.id.as_str()));

        match position {
            Some(idx) => {
                self.buttons[idx] = button.into_value();
                ButtonUpsert::Replaced(idx)
            }
            None => {
                self.buttons.push(button.into_value());
                ButtonUpsert::Appended
            }
        }
    }

    /// Removes every button with the given id and returns how many were removed.
    ///
    /// Stored buttons without a string `id` never match.
    pub fn remove_button(&mut self, button_id: &str) -> usize {
        let before = self.buttons.len();
        self.buttons
            .retain(|stored| stored_button_id(stored) != Some(button_id));
        before - self.buttons.len()
    }

    /// Replaces a surface wholesale. Fields of the previous value are not merged.
    pub fn set_surface(&mut self, surface: Surface, value: Value) {
        let slot = match surface {
            Surface::Embed => &mut self.embed,
            Surface::Notice => &mut self.notice,
            Surface::Title => &mut self.title,
            Surface::Gif => &mut self.gif,
        };
        *slot = value;
    }
}

/// The `id` of a stored button, if it has a string one.
fn stored_button_id(button: &Value) -> Option<&str> {
    button.get("id").and_then(Value::as_str)
}

/// A configurable UI surface of the ticket panel, replaced as a whole on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Embed,
    Notice,
    Title,
    Gif,
}

impl Surface {
    /// JSON key of the surface, both in the document and in request bodies.
    pub fn key(self) -> &'static str {
        match self {
            Surface::Embed => "embed",
            Surface::Notice => "notice",
            Surface::Title => "title",
            Surface::Gif => "gif",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Button {
    /// Validates an incoming button payload.
    ///
    /// # Arguments
    /// - `value` - Raw JSON from the request body
    ///
    /// # Returns
    /// - `Ok(Button)` - Payload is an object with a non-empty string `id`
    /// - `Err(String)` - Human-readable reason the payload was rejected
    pub fn from_value(value: Value) -> Result<Self, String> {
        let Value::Object(mut fields) = value else {
            return Err("button must be a JSON object".to_string());
        };

        let id = match fields.remove("id") {
            Some(Value::String(id)) if !id.is_empty() => id,
            Some(Value::String(_)) | None | Some(Value::Null) => {
                return Err("button.id is required".to_string())
            }
            Some(_) => return Err("button.id must be a string".to_string()),
        };

        Ok(Self { id, fields })
    }
}

/// Whether a submitted surface value counts as missing.
///
/// `null`, `false`, `0` and `""` are rejected. Anything else, including `{}`
/// and `[]` to reset a surface, is stored verbatim.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Object(_) | Value::Array(_) => false,
    }
}
