use super::*;

fn resolver(path: std::path::PathBuf) -> AccountResolver {
    AccountResolver::from_source(&AccountSource::File(path), reqwest::Client::new())
}

/// Tests resolving credentials that match an account in the file.
///
/// Expected: Some(account) bound to G1
#[tokio::test]
async fn resolves_matching_account() {
    let test = TestBuilder::new()
        .with_accounts(fixture::account::table())
        .build()
        .await
        .unwrap();
    let resolver = resolver(test.accounts_path());

    let account = resolver
        .resolve(fixture::account::USERNAME, fixture::account::PASSWORD)
        .await
        .unwrap();

    assert_eq!(account.guild_id, fixture::account::GUILD_ID);
    assert_eq!(account.username, "bob");
    assert_eq!(account.server_name, None);
}

/// Tests that only the exact username and password pair matches.
///
/// Expected: None for wrong password, wrong case and empty credentials
#[tokio::test]
async fn rejects_non_matching_credentials() {
    let test = TestBuilder::new()
        .with_accounts(fixture::account::table())
        .build()
        .await
        .unwrap();
    let resolver = resolver(test.accounts_path());

    assert!(resolver.resolve("bob", "y").await.is_none());
    assert!(resolver.resolve("Bob", "x").await.is_none());
    assert!(resolver.resolve("bob", "x ").await.is_none());
    assert!(resolver.resolve("", "").await.is_none());
}

/// Tests that each account resolves to its own guild.
///
/// Expected: carol resolves to G2 with her server name
#[tokio::test]
async fn resolves_account_among_several() {
    let test = TestBuilder::new()
        .with_accounts(fixture::account::table())
        .with_account(
            "a2",
            fixture::account::entry_with_server("carol", "pw", "G2", "Carol's Shop"),
        )
        .build()
        .await
        .unwrap();
    let resolver = resolver(test.accounts_path());

    let account = resolver.resolve("carol", "pw").await.unwrap();

    assert_eq!(account.guild_id, "G2");
    assert_eq!(account.server_name.as_deref(), Some("Carol's Shop"));
}

/// Tests that a missing account file behaves like an empty table.
///
/// Expected: None
#[tokio::test]
async fn missing_file_resolves_nothing() {
    let test = TestBuilder::new().build().await.unwrap();
    let resolver = resolver(test.accounts_path());

    assert!(resolver.resolve("bob", "x").await.is_none());
    assert!(resolver.load_accounts().await.is_empty());
}

/// Tests that an unparseable account file behaves like an empty table.
///
/// Expected: None
#[tokio::test]
async fn malformed_file_resolves_nothing() {
    let test = TestBuilder::new().build().await.unwrap();
    tokio::fs::write(test.accounts_path(), "{ \"a1\": ").await.unwrap();
    let resolver = resolver(test.accounts_path());

    assert!(resolver.resolve("bob", "x").await.is_none());
}

/// Tests that one broken entry does not hide the valid ones.
///
/// Expected: bob still resolves, the entry without a password is skipped
#[tokio::test]
async fn skips_malformed_entries() {
    let test = TestBuilder::new()
        .with_accounts(json!({
            "a0": { "username": "eve", "guildId": "G3" },
            "a1": fixture::account::entry("bob", "x", "G1")
        }))
        .build()
        .await
        .unwrap();
    let resolver = resolver(test.accounts_path());

    assert_eq!(resolver.load_accounts().await.len(), 1);
    assert!(resolver.resolve("bob", "x").await.is_some());
}

/// Tests that the table is re-read on every lookup.
///
/// Expected: an account added after the resolver was built resolves
#[tokio::test]
async fn picks_up_file_changes() {
    let test = TestBuilder::new().build().await.unwrap();
    let resolver = resolver(test.accounts_path());

    assert!(resolver.resolve("bob", "x").await.is_none());

    tokio::fs::write(test.accounts_path(), fixture::account::table().to_string())
        .await
        .unwrap();

    assert!(resolver.resolve("bob", "x").await.is_some());
}
