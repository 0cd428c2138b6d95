mod api;
mod app;
mod cli;
mod config;
mod dev_backend;
mod runtime;
mod ui;

use anyhow::Result;
use api::Api;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::TickConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            let config = TickConfig::load()?;
            run_tui(Api::remote(&config)).await
        }
        Commands::Dev => run_tui(Api::dev()).await,
        Commands::ConfigPath => {
            let path = TickConfig::config_path()?;
            if !path.exists() {
                TickConfig::default().save()?;
                println!("Created default config.");
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run_tui(api: Api) -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &api).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
