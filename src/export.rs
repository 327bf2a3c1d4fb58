use std::path::Path;

use serde::Serialize;

use crate::symbol::normalize_symbol;
use crate::Lot;

/// Output columns in the order Yahoo Finance expects them.
pub const COLUMNS: [&str; 6] = [
    "Symbol",
    "Trade Date",
    "Purchase Price",
    "Quantity",
    "Commission",
    "Comment",
];

/// One CSV row, fields declared in `COLUMNS` order.
#[derive(Debug, Serialize)]
struct Row<'a> {
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "Trade Date")]
    trade_date: String,
    #[serde(rename = "Purchase Price")]
    purchase_price: f64,
    #[serde(rename = "Quantity")]
    quantity: i64,
    #[serde(rename = "Commission")]
    commission: f64,
    #[serde(rename = "Comment")]
    comment: &'a str,
}

fn lot_to_row(lot: &Lot) -> Row<'_> {
    Row {
        symbol: normalize_symbol(&lot.symbol),
        // Yahoo Finance wants the date as YYYYMMDD, no separators.
        trade_date: lot.trade_date.format("%Y%m%d").to_string(),
        purchase_price: lot.purchase_price,
        quantity: lot.quantity,
        commission: lot.commission,
        comment: &lot.comment,
    }
}

/// Writes `lots` to `path` as CSV, truncating any existing file. The
/// header row is written even when there are no lots.
pub fn export<P: AsRef<Path>>(lots: &[Lot], path: &P) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(&COLUMNS)?;
    for lot in lots {
        wtr.serialize(lot_to_row(lot))?;
    }
    wtr.flush()?;
    Ok(())
}
