//! Load a site page and replay visitor interactions against it
//!
//! ```bash
//! page-check site/login.html \
//!     --fill 'input[type="email"]=amani@example.rw' \
//!     --fill 'input[type="password"]=secret' \
//!     --submit form
//! ```
//!
//! Prints what the page showed the visitor: console diagnostics, alerts and
//! navigations. Exits non-zero when a handler fails.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use urugano_web::components::LISTING_CARD;
use urugano_web::dom::{HtmlPage, Page};
use urugano_web::{filter_listings, lazy_load_images, start, SiteConfig};

#[derive(Parser)]
#[command(name = "page-check")]
#[command(about = "Load a site page and replay visitor interactions against it")]
struct Cli {
    /// HTML file to load
    page: PathBuf,

    /// Location path the page is served at (defaults to /<file name>)
    #[arg(long)]
    path: Option<String>,

    /// Set a form control before interacting, as SELECTOR=VALUE
    #[arg(long = "fill", value_name = "SELECTOR=VALUE")]
    fills: Vec<String>,

    /// Hover over, then leave, every listing card
    #[arg(long)]
    hover: bool,

    /// Start lazy image loading and scroll every deferred image into view
    #[arg(long)]
    reveal: bool,

    /// Filter listing cards by this term
    #[arg(long)]
    filter: Option<String>,

    /// Click the first element matching this selector
    #[arg(long)]
    click: Option<String>,

    /// Submit the first element matching this selector
    #[arg(long)]
    submit: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = SiteConfig::from_env()?;

    let markup = fs::read_to_string(&cli.page)
        .with_context(|| format!("Failed to read {}", cli.page.display()))?;
    let pathname = match &cli.path {
        Some(path) => path.clone(),
        None => format!(
            "/{}",
            cli.page
                .file_name()
                .and_then(|name| name.to_str())
                .context("Page path has no file name")?
        ),
    };

    let page = HtmlPage::parse(&markup, pathname.clone());
    let bindings = start(&page, &config).context("Page initialization failed")?;

    println!("{} {}", "Page".bright_blue().bold(), pathname);
    println!("  highlighted links: {}", bindings.highlighted_links);
    println!("  search bound:      {}", bindings.search);
    println!(
        "  form bound:        {}",
        bindings
            .form
            .map(|kind| format!("{kind:?}"))
            .unwrap_or_else(|| "none".to_string())
    );
    println!("  listing cards:     {}", bindings.listing_cards);

    let outcome = interact(&cli, &page);
    report(&page);
    outcome
}

fn interact(cli: &Cli, page: &HtmlPage) -> Result<()> {
    for fill in &cli.fills {
        let Some((selector, value)) = split_fill(fill) else {
            bail!("--fill expects SELECTOR=VALUE, got `{fill}`");
        };
        page.fill(selector, value)
            .with_context(|| format!("Failed to fill `{selector}`"))?;
    }

    if cli.hover {
        for card in page.query_all(LISTING_CARD)? {
            page.hover(&card)?;
            page.unhover(&card)?;
        }
    }

    if cli.reveal {
        lazy_load_images(page)?;
        for image in page.query_all("img[data-src]")? {
            page.reveal(&image)?;
        }
    }

    if let Some(term) = &cli.filter {
        let visible = filter_listings(page, term).context("Listing filter failed")?;
        println!("{} {visible} listing(s) match `{term}`", "Filter".bright_blue().bold());
    }

    if let Some(selector) = &cli.click {
        page.click(selector)
            .with_context(|| format!("Click handler for `{selector}` failed"))?;
    }

    if let Some(selector) = &cli.submit {
        page.submit(selector)
            .with_context(|| format!("Submit handler for `{selector}` failed"))?;
    }

    Ok(())
}

/// Split SELECTOR=VALUE at the first `=` outside an attribute selector
fn split_fill(fill: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in fill.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '=' if depth == 0 => return Some((&fill[..i], &fill[i + 1..])),
            _ => {}
        }
    }
    None
}

fn report(page: &HtmlPage) {
    for line in report_lines(page) {
        println!("{line}");
    }
}

/// Console diagnostics, then alerts, then navigations
fn report_lines(page: &HtmlPage) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in page.console() {
        let line = match entry.details {
            Some(details) => format!("{} {} {details}", "console".dimmed(), entry.message),
            None => format!("{} {}", "console".dimmed(), entry.message),
        };
        lines.push(line);
    }
    for alert in page.alerts() {
        lines.push(format!("{} {}", "alert".yellow().bold(), alert));
    }
    for href in page.navigations() {
        lines.push(format!("{} {}", "navigate".green().bold(), href));
    }
    lines
}
