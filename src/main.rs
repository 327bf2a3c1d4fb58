use flexi_logger::Logger;
use log::info;

use watchlist_export::convert;

const INPUT_FILE: &str = "watchlists.json";
const OUTPUT_FILE: &str = "upload.csv";

fn main() -> anyhow::Result<()> {
    Logger::try_with_str("info")?.start()?;

    info!("reading watchlist from {}", INPUT_FILE);
    let count = convert(&INPUT_FILE, &OUTPUT_FILE)?;
    info!("wrote {} lots to {}", count, OUTPUT_FILE);

    Ok(())
}
