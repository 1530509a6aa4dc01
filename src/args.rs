use clap::Parser;
use std::path::PathBuf;
use tender_finder::export::DEFAULT_CSV_FILE;

#[derive(Parser, Debug)]
#[command(name = "tender-finder")]
#[command(about = "Searches the BBK tender listing for Kunst-am-Bau announcements")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the listing page URL
    #[arg(long)]
    pub listing_url: Option<String>,

    /// Where to write the CSV export
    #[arg(short, long, default_value = DEFAULT_CSV_FILE)]
    pub output: PathBuf,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Don't draw a progress bar
    #[arg(long)]
    pub no_progress: bool,
}
