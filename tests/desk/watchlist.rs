use std::sync::Arc;

use anyhow::Result;

use paper_trading_desk::desk::Watchlist;
use paper_trading_desk::domain::constants::{MSG_ALREADY_WATCHED, WATCHLIST_KEY};
use paper_trading_desk::domain::traits::KeyValueStore;
use paper_trading_desk::infrastructure::mock::StaticCatalog;
use paper_trading_desk::infrastructure::storage::MemoryStore;

#[test]
fn test_adding_twice_keeps_one_entry() -> Result<()> {
    let mut watchlist = Watchlist::load(Arc::new(MemoryStore::new()), Arc::new(StaticCatalog::new()));

    watchlist.add("RELIANCE")?;
    let err = watchlist.add("RELIANCE").unwrap_err();

    assert_eq!(err.to_string(), MSG_ALREADY_WATCHED);
    assert_eq!(watchlist.len(), 1);
    Ok(())
}

#[test]
fn test_reload_reproduces_the_ordered_set() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let catalog = Arc::new(StaticCatalog::new());

    let mut watchlist = Watchlist::load(store.clone(), catalog.clone());
    for symbol in ["INFY", "BTC/INR", "TCS", "GOLDBEES"] {
        watchlist.add(symbol)?;
    }
    watchlist.remove("BTC/INR")?;

    let reloaded = Watchlist::load(store.clone(), catalog);
    assert_eq!(reloaded.symbols(), watchlist.symbols());
    assert_eq!(reloaded.symbols(), ["INFY", "TCS", "GOLDBEES"]);
    assert_eq!(
        store.get(WATCHLIST_KEY)?.as_deref(),
        Some(r#"["INFY","TCS","GOLDBEES"]"#)
    );
    Ok(())
}

#[test]
fn test_unknown_symbols_hidden_but_retained() -> Result<()> {
    let store = Arc::new(MemoryStore::with_entries([(WATCHLIST_KEY, r#"["DELISTED","TCS"]"#)]));
    let watchlist = Watchlist::load(store, Arc::new(StaticCatalog::new()));

    let shown: Vec<_> = watchlist.list().into_iter().map(|i| i.symbol).collect();
    assert_eq!(shown, vec!["TCS"]);
    assert_eq!(watchlist.symbols(), ["DELISTED", "TCS"]);
    Ok(())
}
