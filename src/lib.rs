use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context};
use chrono::{Local, NaiveDate, TimeZone};
use serde::Deserialize;

pub mod export;
pub mod symbol;

/// Comment attached to every exported lot.
pub const IMPORT_COMMENT: &str = "Import from Bloomberg";

/// `Lot` is one purchase transaction of a security, in a shape roughly
/// matching what Yahoo Finance's bulk import expects.
#[derive(Debug, Clone)]
pub struct Lot {
    pub symbol: String,
    pub trade_date: NaiveDate,
    pub purchase_price: f64,
    /// Negative for short positions. Not validated.
    pub quantity: i64,
    pub commission: f64,
    pub comment: String,
}

// Input schema of the Bloomberg watchlist export. Any missing field fails
// deserialization outright.
#[derive(Debug, Deserialize)]
struct Watchlist {
    port: Port,
}

#[derive(Debug, Deserialize)]
struct Port {
    positions: Vec<PositionRecord>,
}

#[derive(Debug, Deserialize)]
struct PositionRecord {
    security: Security,
    lots: Vec<LotRecord>,
}

#[derive(Debug, Deserialize)]
struct Security {
    ticker: String,
}

#[derive(Debug, Deserialize)]
struct LotRecord {
    shares: Shares,
}

#[derive(Debug, Deserialize)]
struct Shares {
    /// Milliseconds since the Unix epoch.
    buydate: i64,
    buyprice: f64,
    number: i64,
}

fn load_watchlist<P: AsRef<Path>>(path: &P) -> anyhow::Result<Watchlist> {
    let file = File::open(path)
        .with_context(|| format!("could not open {}", path.as_ref().display()))?;
    let doc = serde_json::from_reader(BufReader::new(file))?;
    Ok(doc)
}

/// Truncates a millisecond epoch timestamp to a calendar day in `tz`.
fn trade_date<Tz: TimeZone>(buydate_ms: i64, tz: &Tz) -> anyhow::Result<NaiveDate> {
    let dt = tz
        .timestamp_millis_opt(buydate_ms)
        .single()
        .ok_or_else(|| anyhow!("buydate {} is out of range", buydate_ms))?;
    Ok(dt.date_naive())
}

/// Flattens the watchlist into one `Lot` per purchase, positions first,
/// then lots within each position, mirroring input order.
fn extract_lots<Tz: TimeZone>(doc: &Watchlist, tz: &Tz) -> anyhow::Result<Vec<Lot>> {
    let mut holdings = vec![];
    for position in &doc.port.positions {
        for lot in &position.lots {
            let entry = Lot {
                symbol: position.security.ticker.clone(),
                trade_date: trade_date(lot.shares.buydate, tz)?,
                purchase_price: lot.shares.buyprice,
                quantity: lot.shares.number,
                commission: 0.0,
                comment: IMPORT_COMMENT.to_string(),
            };
            holdings.push(entry);
        }
    }
    Ok(holdings)
}

/// Runs the whole conversion: read the watchlist at `input`, write the
/// upload CSV to `output`. Returns the number of lots written.
///
/// Every lot is extracted before the output file is opened, so a bad
/// input document leaves any existing output file untouched.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: &P, output: &Q) -> anyhow::Result<usize> {
    let doc = load_watchlist(input)?;
    let lots = extract_lots(&doc, &Local)?;
    export::export(&lots, output)?;
    Ok(lots.len())
}
