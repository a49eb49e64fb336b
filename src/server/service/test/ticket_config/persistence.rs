use super::*;
use std::collections::HashSet;

/// Tests that a malformed document fails reads and writes without being replaced.
///
/// Expected: Err(StoreError::Parse) for both operations, file contents unchanged
#[tokio::test]
async fn malformed_document_fails_and_is_left_untouched() {
    let raw = "{ \"servers\": { \"G1\": ";
    let test = TestBuilder::new()
        .with_raw_config_document(raw)
        .build()
        .await
        .unwrap();
    let store = GuildConfigStore::new(test.config_path());

    let read = store.get_config("G1").await;
    assert!(matches!(read, Err(StoreError::Parse { .. })));

    let write = store
        .upsert_button("G1", button(fixture::ticket_config::button("b1", "Buy")))
        .await;
    assert!(matches!(write, Err(StoreError::Parse { .. })));

    assert_eq!(test.read_config_raw().await.unwrap(), raw);
}

/// Tests that valid JSON with the wrong shape is reported as malformed.
///
/// Expected: Err(StoreError::Parse)
#[tokio::test]
async fn wrong_document_shape_is_malformed() {
    let test = TestBuilder::new()
        .with_config_document(json!({ "servers": ["G1"] }))
        .build()
        .await
        .unwrap();
    let store = GuildConfigStore::new(test.config_path());

    let result = store.get_config("G1").await;

    assert!(matches!(result, Err(StoreError::Parse { .. })));
}

/// Tests the on-disk format of a written document.
///
/// Verifies the document is pretty-printed JSON and that the temporary file used
/// for the atomic replace does not linger.
///
/// Expected: Ok with indented JSON and no `.tmp` sibling
#[tokio::test]
async fn writes_pretty_document_atomically() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = GuildConfigStore::new(test.config_path());

    store
        .set_surface("G1", Surface::Embed, json!({ "title": "Shop" }))
        .await?;

    let raw = test.read_config_raw().await.unwrap();
    assert!(raw.starts_with("{\n  \"servers\""));
    assert!(raw.ends_with("}\n"));
    assert!(!test.config_path().with_extension("json.tmp").exists());

    Ok(())
}

/// Tests that keys written by the bot survive a write from the panel.
///
/// Expected: Ok with top-level and per-guild unknown keys preserved
#[tokio::test]
async fn preserves_unknown_keys() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_config_document(json!({
            "servers": {
                "G1": { "buttons": [], "ticketCounter": 41 }
            },
            "schemaVersion": 1
        }))
        .build()
        .await
        .unwrap();
    let store = GuildConfigStore::new(test.config_path());

    store
        .upsert_button("G1", button(fixture::ticket_config::button("b1", "Buy")))
        .await?;

    let document = test.read_config_document().await.unwrap();
    assert_eq!(document["schemaVersion"], 1);
    assert_eq!(document["servers"]["G1"]["ticketCounter"], 41);

    Ok(())
}

/// Tests concurrent mutations from admins of different guilds.
///
/// Each task saves a distinct button for one of two guilds at the same time.
/// Because every load-mutate-save cycle is serialized, no task may overwrite
/// another task's change with a stale snapshot.
///
/// Expected: every button present on disk
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writes_to_different_guilds_all_survive() {
    let test = TestBuilder::new().build().await.unwrap();
    let store = GuildConfigStore::new(test.config_path());

    let tasks: Vec<_> = (0..24)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let guild_id = format!("G{}", i % 2);
                let button_id = format!("b{}", i);
                store
                    .upsert_button(&guild_id, button(json!({ "id": button_id })))
                    .await
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let mut ids = HashSet::new();
    for guild_id in ["G0", "G1"] {
        let config = store.get_config(guild_id).await.unwrap();
        assert_eq!(config.buttons.len(), 12);
        ids.extend(
            config
                .buttons
                .iter()
                .filter_map(|b| b["id"].as_str().map(str::to_string)),
        );
    }
    assert_eq!(ids.len(), 24);
}

/// Tests a document holding buttons written by an older panel without an `id`.
///
/// Verifies that other guilds still read and write normally and that the legacy
/// entries are written back unchanged.
///
/// Expected: Ok for G1 operations, OLD guild buttons preserved verbatim
#[tokio::test]
async fn tolerates_legacy_buttons_without_id() -> Result<(), StoreError> {
    let legacy = json!([
        { "label": "written by old panel" },
        { "id": 42, "label": "numeric id" }
    ]);
    let test = TestBuilder::new()
        .with_config_document(fixture::ticket_config::document(
            "OLD",
            json!({ "buttons": legacy.clone() }),
        ))
        .build()
        .await
        .unwrap();
    let store = GuildConfigStore::new(test.config_path());

    let config = store.get_config("G1").await?;
    assert!(config.buttons.is_empty());

    store
        .upsert_button("G1", button(fixture::ticket_config::button("b1", "Buy")))
        .await?;

    let old = store.get_config("OLD").await?;
    assert_eq!(Value::Array(old.buttons), legacy);

    let document = test.read_config_document().await.unwrap();
    assert_eq!(document["servers"]["OLD"]["buttons"], legacy);

    Ok(())
}

/// Tests mutating a guild that itself holds a legacy button without an `id`.
///
/// Expected: Ok, the legacy entry survives both upsert and delete
#[tokio::test]
async fn mutations_keep_legacy_buttons_in_same_guild() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_config_document(fixture::ticket_config::document(
            "G1",
            json!({ "buttons": [{ "label": "legacy" }] }),
        ))
        .build()
        .await
        .unwrap();
    let store = GuildConfigStore::new(test.config_path());

    store
        .upsert_button("G1", button(fixture::ticket_config::button("b1", "Buy")))
        .await?;
    let config = store.delete_button("G1", "b1").await?;

    assert_eq!(config.buttons, vec![json!({ "label": "legacy" })]);

    Ok(())
}
