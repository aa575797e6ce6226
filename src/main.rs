//! Peekaboo - click behaviors on a demo terminal page
//!
//! Renders a mock admin panel (navbar with a hamburger menu, login panel
//! with a FAQ link) and routes real mouse clicks through the page dispatch.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::StreamExt;
use peekaboo::config::Config;
use peekaboo::core::Page;
use peekaboo::frontend::tui::PageView;
use peekaboo::frontend::{PageEvent, TuiShell};
use ratatui::layout::Rect;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "peekaboo")]
#[command(about = "Click-driven show/hide behaviors on a demo terminal page", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.peekaboo)
    /// Can also be set via PEEKABOO_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Frame interval for the demo loop in milliseconds
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the page configuration
    ValidateConfig {
        /// Config file to validate
        #[arg(value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("peekaboo.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Commands::ValidateConfig { config } => {
                return validate_config(config.or(cli.config));
            }
        }
    }

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var("PEEKABOO_DIR", data_dir);
        info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var("PEEKABOO_DIR") {
        info!("Using data directory from PEEKABOO_DIR: {}", env_dir);
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_from_path(config_path, cli.tick_ms)?
    } else {
        Config::load_with_options(cli.tick_ms)?
    };

    run_demo(config)
}

/// Validate a config file and report findings to the console.
fn validate_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::config_path()?,
    };
    println!("Validating config file: {:?}", path);

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("✗ Failed to read config: {}", e);
            std::process::exit(1);
        }
    };

    let mut config: Config = match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Failed to parse config: {}", e);
            std::process::exit(1);
        }
    };

    println!("✓ Config loaded successfully");
    println!(
        "  dropdown: trigger='{}' menu='{}' marker='{}'",
        config.dropdown.trigger, config.dropdown.menu, config.dropdown.marker
    );
    println!(
        "  disclosure: trigger='{}' primary='{}' secondary='{}'",
        config.disclosure.trigger, config.disclosure.primary, config.disclosure.secondary
    );
    println!("  menu: {} item(s)", config.menu.items.len());

    let findings = config.validate_and_fix();
    if findings.is_empty() {
        println!("✓ Config is valid with no issues");
    } else {
        for finding in &findings {
            println!("⚠ Warning: {}", finding);
        }
        println!("⚠ Found {} warning(s)", findings.len());
    }

    Ok(())
}

/// Run the demo loop on a tokio runtime (the terminal event stream is async)
fn run_demo(config: Config) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_run_demo(config))
}

async fn async_run_demo(config: Config) -> Result<()> {
    let mut shell = TuiShell::new()?;
    let mut view = PageView::new(&config);

    // Assemble the page: register every element at its initial bounds, then
    // attach the behaviors. Attachment happens exactly once, before the
    // first event is dispatched.
    let (width, height) = shell.size();
    let mut area = Rect::new(0, 0, width, height);
    let mut page = Page::new();
    view.register_elements(&mut page, area);

    let dropdown_attached = page.attach_dropdown(&config.dropdown);
    let disclosure_attached = page.attach_disclosure(&config.disclosure);
    info!(
        "Page assembled: dropdown={} disclosure={} area={}x{}",
        dropdown_attached, disclosure_attached, width, height
    );

    let mut events = crossterm::event::EventStream::new();
    let mut tick = tokio::time::interval(std::time::Duration::from_millis(config.ui.tick_ms));

    shell.terminal_mut().draw(|frame| view.render(&page, frame))?;

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else { break };
                let event = event.context("Failed to read terminal event")?;
                match PageEvent::from_crossterm(event) {
                    Some(PageEvent::Quit) => break,
                    Some(PageEvent::Resize { width, height }) => {
                        area = Rect::new(0, 0, width, height);
                        view.place_elements(&mut page, area);
                        debug!("Resized to {}x{}", width, height);
                    }
                    Some(PageEvent::Click { x, y }) => {
                        handle_click(&mut page, &mut view, area, x, y, &config);
                    }
                    None => {}
                }
            }
            _ = tick.tick() => {}
        }

        shell.terminal_mut().draw(|frame| view.render(&page, frame))?;
    }

    shell.cleanup()
}

/// Route one click through the page and turn the outcome into a status line.
fn handle_click(page: &mut Page, view: &mut PageView, area: Rect, x: u16, y: u16, config: &Config) {
    let menu_was_open = page.is_marked(&config.dropdown.menu, &config.dropdown.marker);
    let outcome = page.handle_click(x, y);
    let menu_open = page.is_marked(&config.dropdown.menu, &config.dropdown.marker);
    let faq_open = page.is_marked(&config.disclosure.primary, &config.disclosure.primary_marker);

    debug!("Click at ({}, {}): {:?}", x, y, outcome);

    if outcome.default_prevented {
        view.set_status(if faq_open {
            "FAQ link: panels shown (navigation suppressed)"
        } else {
            "FAQ link: panels hidden (navigation suppressed)"
        });
    } else if menu_open && !menu_was_open {
        view.set_status("Menu opened");
    } else if menu_open && menu_was_open {
        if let Some(item) = view.menu_item_at(x, y, area) {
            view.set_status(format!("Menu item clicked: {}", item));
        }
    } else if menu_was_open && !menu_open {
        view.set_status("Menu closed");
    } else if outcome.is_idle() {
        view.set_status(format!("Click at ({}, {})", x, y));
    }
}
