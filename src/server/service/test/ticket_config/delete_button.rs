use super::*;

/// Tests deleting an existing button.
///
/// Expected: Ok with the button gone from the result and from disk
#[tokio::test]
async fn removes_button() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = GuildConfigStore::new(test.config_path());

    store
        .upsert_button("G1", button(fixture::ticket_config::button("a", "A")))
        .await?;
    store
        .upsert_button("G1", button(fixture::ticket_config::button("b", "B")))
        .await?;

    let config = store.delete_button("G1", "a").await?;

    let ids: Vec<&str> = config.buttons.iter().filter_map(|b| b["id"].as_str()).collect();
    assert_eq!(ids, vec!["b"]);

    let document = test.read_config_document().await.unwrap();
    assert_eq!(document["servers"]["G1"]["buttons"], json!([{ "id": "b", "label": "B" }]));

    Ok(())
}

/// Tests deleting an id that is not present.
///
/// Verifies that the call succeeds, returns the unchanged configuration, and
/// that deleting twice is harmless.
///
/// Expected: Ok with buttons unchanged
#[tokio::test]
async fn deleting_absent_button_is_noop() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = GuildConfigStore::new(test.config_path());

    store
        .upsert_button("G1", button(fixture::ticket_config::button("a", "A")))
        .await?;

    let first = store.delete_button("G1", "a").await?;
    let second = store.delete_button("G1", "a").await?;
    let unrelated = store.delete_button("G1", "missing").await?;

    assert!(first.buttons.is_empty());
    assert_eq!(second, first);
    assert_eq!(unrelated, first);

    Ok(())
}

/// Tests deleting from a guild that has never been configured.
///
/// Verifies that the guild entry is ensured and persisted with defaults.
///
/// Expected: Ok with empty configuration written to disk
#[tokio::test]
async fn deleting_from_unseen_guild_creates_entry() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = GuildConfigStore::new(test.config_path());

    let config = store.delete_button("G9", "a").await?;

    assert_eq!(config, GuildConfig::default());
    let document = test.read_config_document().await.unwrap();
    assert_eq!(document["servers"]["G9"], fixture::ticket_config::empty_guild());

    Ok(())
}
