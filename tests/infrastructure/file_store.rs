use std::fs;
use std::sync::Arc;

use anyhow::Result;
use tempfile::tempdir;

use paper_trading_desk::desk::Watchlist;
use paper_trading_desk::domain::constants::WATCHLIST_KEY;
use paper_trading_desk::domain::traits::KeyValueStore;
use paper_trading_desk::infrastructure::mock::StaticCatalog;
use paper_trading_desk::infrastructure::storage::JsonFileStore;

#[test]
fn test_values_survive_reopen() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("store.json");

    let store = JsonFileStore::open(&path);
    store.set("token", "abc")?;
    store.set("watchlist", "[\"TCS\"]")?;
    store.remove("token")?;

    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.get("token")?, None);
    assert_eq!(reopened.get("watchlist")?.as_deref(), Some("[\"TCS\"]"));
    assert!(!path.with_extension("tmp").exists());
    Ok(())
}

#[test]
fn test_missing_file_opens_empty() -> Result<()> {
    let dir = tempdir()?;
    let store = JsonFileStore::open(dir.path().join("absent.json"));

    assert_eq!(store.get(WATCHLIST_KEY)?, None);
    assert!(!store.path().exists());
    Ok(())
}

#[test]
fn test_malformed_file_opens_empty_and_is_replaced_on_write() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("store.json");
    fs::write(&path, "{ this is not json")?;

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get(WATCHLIST_KEY)?, None);

    store.set(WATCHLIST_KEY, "[]")?;
    let content = fs::read_to_string(&path)?;
    let parsed: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(parsed[WATCHLIST_KEY], "[]");
    Ok(())
}

#[test]
fn test_watchlist_round_trips_through_disk() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("desk.json");
    let catalog = Arc::new(StaticCatalog::new());

    let mut watchlist = Watchlist::load(Arc::new(JsonFileStore::open(&path)), catalog.clone());
    watchlist.add("NIFTY")?;
    watchlist.add("USD/INR")?;

    let reloaded = Watchlist::load(Arc::new(JsonFileStore::open(&path)), catalog);
    let symbols: Vec<_> = reloaded.list().into_iter().map(|i| i.symbol).collect();
    assert_eq!(symbols, vec!["NIFTY", "USD/INR"]);
    Ok(())
}
