use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use tender_finder::{HttpFetcher, Pipeline, RunReport, ScraperConfig, export};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let fetcher = match HttpFetcher::new(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            ::log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut pipeline = Pipeline::new(fetcher, &config);
    ::log::info!("Searching tenders on {}", pipeline.listing_url());

    let progress_bar = (!args.no_progress).then(new_progress_bar);
    let result = pipeline
        .search_with_progress(false, |progress| {
            if let Some(pb) = &progress_bar {
                pb.set_length(progress.total as u64);
                pb.set_position(progress.processed as u64);
                pb.set_message(format!("{:.0}%", progress.percent()));
            }
        })
        .await;
    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Failed to load listing page {}: {}", config.listing_url, e);
            eprintln!("Fehler beim Laden der Ausschreibungsseite: {e}");
            return ExitCode::FAILURE;
        }
    };

    present(report, &args)
}

/// File or default config, then environment, then command-line flags
fn load_config(args: &Args) -> tender_finder::Result<ScraperConfig> {
    let config = match &args.config {
        Some(path) => ScraperConfig::from_file(path)?,
        None => ScraperConfig::default(),
    };
    let mut config = config.with_env_overrides();

    if let Some(url) = &args.listing_url {
        config.listing_url = url.clone();
    }
    if args.timeout.is_some() {
        config.request_timeout_secs = args.timeout;
    }

    Ok(config)
}

fn new_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} Links ({msg})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb
}

/// Prints failures, the result table and writes the CSV export
fn present(report: &RunReport, args: &Args) -> ExitCode {
    for failure in &report.failures {
        eprintln!(
            "Fehler bei Link {}/{}: {}. Fehler: {}",
            failure.index + 1,
            report.links_found,
            failure.url,
            failure.message
        );
    }

    if report.is_empty() {
        println!("Keine relevanten Ausschreibungen gefunden.");
        return ExitCode::SUCCESS;
    }

    println!("{} relevante Ausschreibungen gefunden.", report.records.len());
    println!();
    println!("{}", export::render_table(&report.records));

    match export::export_csv(&report.records, &args.output) {
        Ok(()) => {
            println!();
            println!("CSV gespeichert: {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Failed to write {}: {}", args.output.display(), e);
            ExitCode::FAILURE
        }
    }
}
