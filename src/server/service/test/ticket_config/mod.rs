use crate::{
    model::ticket_config::{Button, GuildConfig},
    server::{
        error::store::StoreError, model::ticket_config::Surface,
        service::ticket_config::GuildConfigStore,
    },
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, fixture};

mod delete_button;
mod get_config;
mod persistence;

/// Builds a validated button from a JSON payload.
fn button(value: Value) -> Button {
    Button::from_value(value).unwrap()
}
