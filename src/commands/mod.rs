pub mod calc;
pub mod countdown;
pub mod init;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Compute working hours and balances")]
    Calc(calc::CalcArgs),
    #[command(about = "Refresh 'if I left now' projections periodically")]
    Watch(watch::WatchArgs),
    #[command(about = "Count down to the target departure time")]
    Countdown(countdown::CountdownArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Calc(args) => calc::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Countdown(args) => countdown::cmd(args).await,
        }
    }
}
