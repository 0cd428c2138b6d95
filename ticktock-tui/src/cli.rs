use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ticktock")]
#[command(about = "Terminal UI for weekly timesheets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against a timesheet backend
    Run,
    /// Run with built-in sample data, no server required
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
