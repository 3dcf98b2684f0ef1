// Standard library imports
use std::path::Path;
use std::sync::Arc;

// External crate imports
use anyhow::Result;
use dotenv::dotenv;
use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::select;
use tokio::time::Duration;

// Internal crate imports
use paper_trading_desk::cli::{Command, HELP};
use paper_trading_desk::config_loader::AppConfig;
use paper_trading_desk::desk::{
    FeeCalculator, MarketBoard, MarketFilter, NotificationCenter, OrderDesk, OrderForm, Portfolio,
    SessionManager, TransactionFilter, Watchlist,
};
use paper_trading_desk::domain::model::order::{OrderConfirmation, OrderInput};
use paper_trading_desk::domain::traits::{InstrumentCatalog, KeyValueStore, PriceOracle};
use paper_trading_desk::infrastructure::mock::{
    mock_portfolio, MockAuthApi, MockOrderGateway, StaticCatalog, StaticPriceOracle,
};
use paper_trading_desk::infrastructure::storage::{JsonFileStore, MemoryStore};

const MSG_LOGIN_FOR_WATCHLIST: &str = "Please login to view your watchlist.";
const MSG_LOGIN_FOR_PORTFOLIO: &str = "Please login to view your portfolio.";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Logger initialized");

    // Load configuration from TOML file (first try relative path, then local path, then defaults)
    let config_path = Path::new("../config.toml");
    let config = match AppConfig::from_file(config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config from {}: {}", config_path.display(), e);

            let alt_path = Path::new("./config.toml");
            info!("Attempting to load from alternate path: {}", alt_path.display());
            AppConfig::from_file(alt_path).unwrap_or_else(|e| {
                warn!("{}; using built-in defaults", e);
                AppConfig::default()
            })
        }
    };

    let mut desk = Desk::build(&config).await;
    run_terminal(&mut desk).await
}

/// Every component of the desk, wired to the mock backends
struct Desk {
    catalog: Arc<dyn InstrumentCatalog>,
    oracle: Arc<dyn PriceOracle>,
    fees: FeeCalculator,
    market: MarketBoard,
    watchlist: Watchlist,
    portfolio: Portfolio,
    session: SessionManager,
    notifications: Arc<NotificationCenter>,
    orders: OrderDesk,
}

impl Desk {
    async fn build(config: &AppConfig) -> Self {
        let store: Arc<dyn KeyValueStore> = match &config.storage.path {
            Some(path) => {
                info!("Using file storage at {}", path.display());
                Arc::new(JsonFileStore::open(path))
            }
            None => {
                info!("No storage path configured, state will not survive a restart");
                Arc::new(MemoryStore::new())
            }
        };

        let catalog: Arc<dyn InstrumentCatalog> = Arc::new(StaticCatalog::new());
        let oracle: Arc<dyn PriceOracle> = Arc::new(StaticPriceOracle::new(config.app.default_price));
        let auth = Arc::new(MockAuthApi::new(Duration::from_millis(config.auth.latency_ms)));
        let gateway = Arc::new(MockOrderGateway::new(Duration::from_millis(
            config.gateway.submission_delay_ms,
        )));

        let notifications = Arc::new(NotificationCenter::load(store.clone()));
        let orders = OrderDesk::new(gateway)
            .with_timeout(Duration::from_millis(config.gateway.timeout_ms))
            .with_notifications(notifications.clone());

        let (holdings, transactions) = mock_portfolio();

        Self {
            fees: FeeCalculator::new(config.fees.brokerage_rate, config.fees.transaction_tax_rate),
            market: MarketBoard::new(catalog.clone(), oracle.clone()),
            watchlist: Watchlist::load(store.clone(), catalog.clone()),
            portfolio: Portfolio::new(holdings, transactions, oracle.clone()),
            session: SessionManager::restore(store, auth).await,
            catalog,
            oracle,
            notifications,
            orders,
        }
    }
}

async fn run_terminal(desk: &mut Desk) -> Result<()> {
    println!("{}", HELP);
    if let Some(user) = desk.session.user() {
        println!("Welcome back, {}.", user.name);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Input closed");
                    break;
                };

                match Command::parse(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => handle(desk, command).await,
                    Ok(None) => {}
                    Err(e) => println!("{}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!("Ctrl+C received, shutting down");
                break;
            }
        }
    }

    info!("Exiting program");
    Ok(())
}

async fn handle(desk: &mut Desk, command: Command) {
    match command {
        Command::Help => println!("{}", HELP),
        Command::Market(filter) => show_market(desk, &filter),
        Command::Quote(symbol) => match desk.market.listing(&symbol) {
            Ok(listing) => println!(
                "{} {} ({}, {}): ₹{:.2} {}",
                listing.instrument.symbol,
                listing.instrument.name,
                listing.instrument.exchange,
                listing.instrument.instrument_type,
                listing.quote.price,
                listing.quote.format_change()
            ),
            Err(e) => println!("{}", e),
        },
        Command::Order(input) => place_order(desk, input).await,
        Command::Watch => {
            if !desk.session.is_logged_in() {
                println!("{}", MSG_LOGIN_FOR_WATCHLIST);
                return;
            }
            show_watchlist(desk);
        }
        Command::WatchAdd(_) | Command::WatchRemove(_) if !desk.session.is_logged_in() => {
            println!("{}", MSG_LOGIN_FOR_WATCHLIST);
        }
        Command::WatchAdd(symbol) => match desk.watchlist.add(&symbol) {
            Ok(()) => show_watchlist(desk),
            Err(e) => println!("{}", e),
        },
        Command::WatchRemove(symbol) => match desk.watchlist.remove(&symbol) {
            Ok(()) => show_watchlist(desk),
            Err(e) => println!("{}", e),
        },
        Command::Portfolio(filter) => {
            if !desk.session.is_logged_in() {
                println!("{}", MSG_LOGIN_FOR_PORTFOLIO);
                return;
            }
            show_portfolio(desk, &filter);
        }
        Command::Notifications => {
            let notifications = desk.notifications.list().await;
            if notifications.is_empty() {
                println!("No notifications.");
            }
            for n in notifications {
                println!(
                    "{} [{}] {}: {}",
                    n.id,
                    n.date.format("%Y-%m-%d %H:%M"),
                    n.title,
                    n.message
                );
            }
        }
        Command::Dismiss(id) => {
            if let Err(e) = desk.notifications.remove(id).await {
                println!("{}", e);
            }
        }
        Command::Login { email, password } => match desk.session.login(&email, &password).await {
            Ok(user) => println!("Logged in as {}.", user.name),
            Err(e) => println!("{}", e),
        },
        Command::Logout => match desk.session.logout() {
            Ok(()) => println!("Logged out."),
            Err(e) => println!("{}", e),
        },
        Command::WhoAmI => match desk.session.user() {
            Some(user) => println!(
                "{} <{}> PAN {} balance ₹{:.2}",
                user.name, user.email, user.pan, user.account_balance
            ),
            None => println!("Not logged in."),
        },
        Command::Register(registration) => match desk.session.register(&registration).await {
            Ok(()) => println!("Registration successful! Please login."),
            Err(e) => println!("{}", e),
        },
        Command::Quit => {}
    }
}

fn show_market(desk: &Desk, filter: &MarketFilter) {
    let listings = desk.market.listings(filter);
    if listings.is_empty() {
        println!("No instruments match.");
    }
    for listing in listings {
        println!(
            "{:<10} {:<28} {:<7} {:<7} {:>12.2} {:>7}",
            listing.instrument.symbol,
            listing.instrument.name,
            listing.instrument.exchange,
            listing.instrument.instrument_type,
            listing.quote.price,
            listing.quote.format_change()
        );
    }
}

fn show_watchlist(desk: &Desk) {
    let watched = desk.watchlist.list();
    if watched.is_empty() {
        println!("Your watchlist is empty.");
    }
    for instrument in watched {
        let quote = desk.market.quote(&instrument.symbol);
        println!(
            "{:<10} {:<28} {:>12.2} {:>7}",
            instrument.symbol,
            instrument.name,
            quote.price,
            quote.format_change()
        );
    }
}

fn show_portfolio(desk: &Desk, filter: &TransactionFilter) {
    if let Some(user) = desk.session.user() {
        println!("Account balance: ₹{:.2}", user.account_balance);
    }

    let summary = desk.portfolio.summary();
    println!(
        "Value ₹{:.2}  Cost ₹{:.2}  Unrealized P&L ₹{:.2}",
        summary.total_value, summary.total_cost, summary.unrealized_pnl
    );
    for (asset_type, value) in &summary.allocation {
        println!("  {:<12} ₹{:.2}", asset_type, value);
    }

    println!("Holdings:");
    for holding in desk.portfolio.holdings() {
        println!(
            "  {:<16} {:>8} @ {:>10.2} now {:>10.2}",
            holding.symbol,
            holding.quantity,
            holding.avg_price,
            desk.portfolio.current_price(holding)
        );
    }

    println!("Transactions:");
    for txn in desk.portfolio.transactions(filter) {
        println!(
            "  #{} {} {:<4} {:<16} {:>8} @ {:>10.2} {}",
            txn.id, txn.date, txn.side, txn.symbol, txn.quantity, txn.price, txn.exchange
        );
    }
}

async fn place_order(desk: &mut Desk, input: OrderInput) {
    if desk.catalog.find(&input.instrument).is_none() {
        warn!("Ordering {} which is not in the catalog", input.instrument);
    }

    let mut form = OrderForm::from_input(input);
    let confirmation = match form.submit(desk.oracle.as_ref(), &desk.fees) {
        Ok(confirmation) => confirmation,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    print_confirmation(&confirmation);

    select! {
        result = desk.orders.place_order(&confirmation) => match result {
            Ok(ack) => println!("Order placed successfully! Order ID: {} ({})", ack.order_id, ack.status),
            Err(e) => {
                error!("Order was not placed: {}", e);
                println!("{}", e);
            }
        },
        _ = tokio::signal::ctrl_c() => {
            warn!("Submission abandoned");
            println!("Order submission abandoned.");
        }
    }
}

fn print_confirmation(confirmation: &OrderConfirmation) {
    let shown = confirmation.displayed();
    println!("{}", confirmation.headline());
    println!("  Order value:     ₹{:.2}", confirmation.order_value());
    println!("  Brokerage:       ₹{}", shown.brokerage());
    println!("  Transaction tax: ₹{}", shown.tax());
    println!("  Total charges:   ₹{}", shown.total());
    println!(
        "  Net amount:      ₹{} ({})",
        shown.net(),
        confirmation.side().cash_flow_label()
    );
}
