/// Rewrites a Bloomberg-style ticker into Yahoo Finance notation.
///
/// Bloomberg separates the exchange suffix with a colon where Yahoo uses a
/// period, and the two vendors disagree on the Taiwan exchange code
/// ("TT" vs "TW"). The colons are replaced first, then every "TT"
/// substring becomes "TW". The "TT" replacement is not anchored to the
/// suffix position, so a ticker that itself contains "TT" is rewritten
/// too. That matches the upstream data as seen so far.
///
/// ```
/// use watchlist_export::symbol::normalize_symbol;
///
/// assert_eq!(normalize_symbol("2330:TT"), "2330.TW");
/// assert_eq!(normalize_symbol("AAPL"), "AAPL");
/// ```
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.replace(':', ".").replace("TT", "TW")
}

#[cfg(test)]
mod tests {
    use super::normalize_symbol;

    #[test]
    fn test_taiwan_suffix() {
        assert_eq!(normalize_symbol("2330:TT"), "2330.TW");
    }

    #[test]
    fn test_plain_symbol_unchanged() {
        assert_eq!(normalize_symbol("AAPL"), "AAPL");
        assert_eq!(normalize_symbol("BRK.B"), "BRK.B");
    }

    #[test]
    fn test_colon_becomes_period() {
        assert_eq!(normalize_symbol("7203:JP"), "7203.JP");
    }

    // Pins the unanchored substring replace: "TT" in the ticker body is
    // rewritten as well, not only the exchange suffix.
    #[test]
    fn test_tt_replace_is_not_anchored() {
        assert_eq!(normalize_symbol("TTTT:TT"), "TWTW.TW");
    }
}
