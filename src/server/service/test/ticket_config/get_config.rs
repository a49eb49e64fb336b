use super::*;

/// Tests reading the configuration of a guild that was never touched.
///
/// Verifies that every field is defaulted to an empty container and that the
/// read does not create the document on disk.
///
/// Expected: Ok with empty configuration, no file written
#[tokio::test]
async fn returns_empty_config_for_unseen_guild() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = GuildConfigStore::new(test.config_path());

    let config = store.get_config("G1").await?;

    assert_eq!(config, GuildConfig::default());
    assert_eq!(serde_json::to_value(&config).unwrap(), fixture::ticket_config::empty_guild());
    assert!(!test.config_exists());

    Ok(())
}

/// Tests reading a guild whose entry already exists on disk.
///
/// Expected: Ok with the stored buttons and surfaces
#[tokio::test]
async fn returns_stored_config() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_config_document(fixture::ticket_config::document(
            "G1",
            json!({
                "buttons": [fixture::ticket_config::button("b1", "Buy")],
                "embed": { "title": "Shop" },
                "sellerRoles": ["123"]
            }),
        ))
        .build()
        .await
        .unwrap();
    let store = GuildConfigStore::new(test.config_path());

    let config = store.get_config("G1").await?;

    assert_eq!(config.buttons, vec![fixture::ticket_config::button("b1", "Buy")]);
    assert_eq!(config.embed, json!({ "title": "Shop" }));
    assert_eq!(config.seller_roles, vec![json!("123")]);
    assert_eq!(config.notice, json!({}));

    Ok(())
}

/// Tests that a guild only ever sees its own entry.
///
/// Expected: Ok with empty configuration for G1 while G2 has buttons
#[tokio::test]
async fn does_not_return_other_guild_config() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_config_document(fixture::ticket_config::document(
            "G2",
            json!({ "buttons": [fixture::ticket_config::button("b1", "Buy")] }),
        ))
        .build()
        .await
        .unwrap();
    let store = GuildConfigStore::new(test.config_path());

    let config = store.get_config("G1").await?;

    assert!(config.buttons.is_empty());

    Ok(())
}
