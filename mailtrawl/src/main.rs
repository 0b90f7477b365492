use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use mailtrawl_scanner::Crawler;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = commands::command_argument_builder();
    let matches = cmd.get_matches();

    // Diagnostics go to stderr; stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(&matches).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let url = matches.get_one::<Url>("URL").unwrap();
    let max_pages = *matches.get_one::<usize>("max-pages").unwrap();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!(
        "Crawling {}...",
        url.host_str().unwrap_or("unknown host")
    ));

    let spinner_clone = spinner.clone();
    let crawler = Crawler::new()
        .with_max_pages(max_pages)
        .with_progress_callback(Arc::new(move |count, page_url| {
            spinner_clone.set_message(format!("Processing {page_url} ({count}/{max_pages})"));
        }));

    let report = crawler.harvest(url.as_str()).await?;
    spinner.finish_and_clear();

    eprintln!(
        "Visited {} page(s), found {} address(es)",
        report.pages_visited,
        report.emails.len()
    );
    println!("{}", serde_json::to_string_pretty(&report.emails)?);

    Ok(())
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
