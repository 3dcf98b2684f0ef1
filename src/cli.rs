//! Line commands for the terminal front end

use std::str::FromStr;

use uuid::Uuid;

use crate::desk::{MarketFilter, TransactionFilter};
use crate::domain::enums::{Exchange, InstrumentType, OrderSide, OrderType};
use crate::domain::errors::DeskError;
use crate::domain::model::order::OrderInput;
use crate::domain::model::user::Registration;

pub const HELP: &str = "\
Commands:
  market [type=T] [exchange=E] [text]     list instruments with quotes
  quote SYM                               show one quote
  order buy|sell SYM QTY [TYPE [PRICE]]   place an order (TYPE: market, limit, sl, mis)
  watch                                   show the watchlist
  watch add SYM | watch rm SYM            edit the watchlist
  portfolio [SYMBOL] [type=T]             holdings and transaction history
  notifications | dismiss ID              list or dismiss notifications
  login EMAIL PASSWORD | logout | whoami
  register NAME EMAIL PASSWORD PAN
  help | quit";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    Market(MarketFilter),
    Quote(String),
    Order(OrderInput),
    Watch,
    WatchAdd(String),
    WatchRemove(String),
    Portfolio(TransactionFilter),
    Notifications,
    Dismiss(Uuid),
    Login { email: String, password: String },
    Logout,
    WhoAmI,
    Register(Registration),
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, DeskError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match head.to_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "market" => Command::Market(parse_market_filter(&args)?),
            "quote" => Command::Quote(one_arg(&args, "quote SYM")?.to_string()),
            "order" => Command::Order(parse_order(&args)?),
            "watch" => match args.as_slice() {
                [] => Command::Watch,
                ["add", symbol] => Command::WatchAdd(symbol.to_string()),
                ["rm" | "remove", symbol] => Command::WatchRemove(symbol.to_string()),
                _ => return Err(usage("watch [add|rm SYM]")),
            },
            "portfolio" => Command::Portfolio(parse_transaction_filter(&args)?),
            "notifications" => Command::Notifications,
            "dismiss" => {
                let raw = one_arg(&args, "dismiss ID")?;
                let id = Uuid::parse_str(raw)
                    .map_err(|_| DeskError::validation(format!("Not a notification id: {}", raw)))?;
                Command::Dismiss(id)
            }
            "login" => match args.as_slice() {
                [email, password] => Command::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                _ => return Err(usage("login EMAIL PASSWORD")),
            },
            "logout" => Command::Logout,
            "whoami" => Command::WhoAmI,
            "register" => match args.as_slice() {
                [name, email, password, pan] => Command::Register(Registration {
                    name: name.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                    pan: pan.to_string(),
                }),
                _ => return Err(usage("register NAME EMAIL PASSWORD PAN")),
            },
            other => {
                return Err(DeskError::validation(format!(
                    "Unknown command '{}'. Type 'help' for a list.",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn usage(form: &str) -> DeskError {
    DeskError::validation(format!("Usage: {}", form))
}

fn one_arg<'a>(args: &[&'a str], form: &str) -> Result<&'a str, DeskError> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(usage(form)),
    }
}

// `key=value` pairs are options, everything else is search text
fn split_options<'a>(args: &[&'a str]) -> (Vec<(&'a str, &'a str)>, Vec<&'a str>) {
    let mut options = Vec::new();
    let mut text = Vec::new();
    for &arg in args {
        match arg.split_once('=') {
            Some((key, value)) => options.push((key, value)),
            None => text.push(arg),
        }
    }
    (options, text)
}

fn parse_market_filter(args: &[&str]) -> Result<MarketFilter, DeskError> {
    let (options, text) = split_options(args);
    let mut filter = MarketFilter {
        search: text.join(" "),
        ..Default::default()
    };

    for (key, value) in options {
        match key {
            "type" => filter.instrument_type = Some(InstrumentType::from_str(value)?),
            "exchange" => filter.exchange = Some(Exchange::from_str(value)?),
            _ => return Err(usage("market [type=T] [exchange=E] [text]")),
        }
    }
    Ok(filter)
}

fn parse_transaction_filter(args: &[&str]) -> Result<TransactionFilter, DeskError> {
    let (options, text) = split_options(args);
    let mut filter = TransactionFilter {
        symbol: text.join(" "),
        asset_type: None,
    };

    for (key, value) in options {
        match key {
            "type" => filter.asset_type = Some(InstrumentType::from_str(value)?),
            _ => return Err(usage("portfolio [SYMBOL] [type=T]")),
        }
    }
    Ok(filter)
}

// Quantity and price stay raw; the order form validates them
fn parse_order(args: &[&str]) -> Result<OrderInput, DeskError> {
    const FORM: &str = "order buy|sell SYM QTY [TYPE [PRICE]]";

    let (side, instrument, quantity, rest) = match args {
        [side, instrument, quantity, rest @ ..] if rest.len() <= 2 => (side, instrument, quantity, rest),
        _ => return Err(usage(FORM)),
    };

    let order_type = match rest.first() {
        Some(raw) => OrderType::from_str(raw)?,
        None => OrderType::Market,
    };

    Ok(OrderInput {
        instrument: instrument.to_string(),
        side: OrderSide::from_str(side)?,
        order_type,
        quantity: quantity.to_string(),
        price: rest.get(1).map(|p| p.to_string()).unwrap_or_default(),
    })
}
