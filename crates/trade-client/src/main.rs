// crates/trade-client/src/main.rs

mod app;
mod components;
mod config;
mod network;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    fs::OpenOptions,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trade_api::HttpTradeApi;

use crate::app::App;
use crate::config::ClientConfig;
use crate::network::{ApiCommand, ApiReply, ApiWorker};

#[derive(Parser)]
#[command(name = "apt-trade-client")]
#[command(about = "Terminal search for Korean apartment trade records")]
struct Cli {
    /// Backend base URL
    #[arg(short, long)]
    api_url: Option<String>,

    /// Rows per page
    #[arg(short, long)]
    page_size: Option<u32>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Region code to search on startup
    #[arg(short, long)]
    region: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, default_value = "apt-trade-client.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file, cli.debug)?;

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    config.apply_cli(cli.api_url.clone(), cli.page_size)?;
    info!(api_url = %config.api_url, page_size = config.page_size, "Starting");

    let api = HttpTradeApi::new(&config.api_url)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let res = run_app(&mut terminal, &mut app, api, cli.region.as_deref()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn init_logging(path: &Path, debug: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(log_filter(debug, rust_log.as_deref()))
        .init();
    Ok(())
}

/// `RUST_LOG` directives if given, else `info` (`debug` with `--debug`).
fn log_filter(debug: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api: HttpTradeApi,
    region: Option<&str>,
) -> Result<()> {
    // Create channels for network communication
    let (tx_to_network, rx_from_app) = mpsc::unbounded_channel::<ApiCommand>();
    let (tx_to_app, mut rx_from_network) = mpsc::unbounded_channel::<ApiReply>();

    app.set_network_sender(tx_to_network);

    let worker = ApiWorker::new(Arc::new(api), tx_to_app);
    let network_handle = tokio::spawn(worker.run(rx_from_app));

    if let Some(region) = region {
        app.search_region(region);
    }

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        while let Ok(reply) = rx_from_network.try_recv() {
            app.handle_reply(reply);
        }

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    network_handle.abort();
    info!("Shutting down");
    Ok(())
}
