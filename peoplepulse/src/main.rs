use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use peoplepulse::app::{run_app, App};
use peoplepulse::config::AppConfig;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::parse();

    let data_dir = config.data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let _guard = peoplepulse::init_logging(&data_dir)?;
    tracing::info!(backend = %config.backend_url, "starting");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, tx)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
