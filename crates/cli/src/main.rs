//! CLI entry point for impact-echo.
//!
//! Drives the donator dashboard from a terminal against a running backend.

mod store;
mod terminal;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dashboard::{
    Dashboard, DashboardConfig, FundOutcome, HttpBackend, HttpBackendConfig,
};
use impact_types::{WALLET_ADDRESS_KEY, format_inr};
use tracing_subscriber::EnvFilter;

use crate::store::FileStore;
use crate::terminal::TerminalView;

type TerminalDashboard = Dashboard<HttpBackend, TerminalView, FileStore>;

/// impact-echo: fund causes and follow your impact from the terminal
#[derive(Parser)]
#[command(name = "impact-echo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "IMPACT_ECHO_BACKEND", default_value = "http://localhost:8000")]
    backend: String,

    /// Key/value file standing in for browser storage
    #[arg(long, env = "IMPACT_ECHO_STORE", default_value = ".impact-echo/store.json")]
    store: PathBuf,

    /// Name shown on the dashboard
    #[arg(short, long)]
    username: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List causes and current stats
    Causes,

    /// Fund a single cause
    Fund {
        /// Cause ID
        #[arg(short, long)]
        cause: u64,

        /// Amount in rupees (prompted for when omitted)
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Interactive session (fund, name, stats, logout, quit)
    Shell,

    /// Save the wallet address donations are logged under
    Wallet {
        /// Wallet address
        address: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let store = FileStore::new(&cli.store);

    match cli.command {
        Commands::Wallet { address } => {
            store
                .write(WALLET_ADDRESS_KEY, &address)
                .context("Failed to save wallet address")?;
            println!("Wallet {address} saved to {}", store.path().display());
        }
        Commands::Causes => {
            let dashboard = load_dashboard(&cli.backend, cli.username, store).await?;
            print_dashboard(&dashboard);
        }
        Commands::Fund { cause, amount } => {
            let dashboard = load_dashboard(&cli.backend, cli.username, store).await?;
            fund(&dashboard, cause, amount).await?;
            println!();
            print_stats(&dashboard);
        }
        Commands::Shell => {
            let dashboard = load_dashboard(&cli.backend, cli.username, store).await?;
            run_shell(&dashboard).await?;
        }
    }

    Ok(())
}

fn build_dashboard(backend: &str, username: Option<String>, store: FileStore) -> TerminalDashboard {
    let config = DashboardConfig {
        initial_username: username.unwrap_or_else(|| DashboardConfig::default().initial_username),
        ..Default::default()
    };
    tracing::debug!(backend, store = %store.path().display(), "dashboard configured");
    let backend = HttpBackend::new(HttpBackendConfig {
        base_url: backend.to_string(),
    });

    Dashboard::new(config, backend, TerminalView::new(), store)
}

/// Build the dashboard and load causes, as the page does on load.
async fn load_dashboard(
    backend: &str,
    username: Option<String>,
    store: FileStore,
) -> Result<TerminalDashboard> {
    let dashboard = build_dashboard(backend, username, store);
    dashboard
        .init()
        .await
        .with_context(|| format!("Failed to load causes from {backend}"))?;
    Ok(dashboard)
}

async fn fund(dashboard: &TerminalDashboard, cause_id: u64, amount: Option<String>) -> Result<()> {
    if let Some(amount) = amount {
        dashboard.view().queue_answer(amount);
    }

    let outcome = dashboard
        .handle_fund_click(cause_id)
        .await
        .with_context(|| format!("Failed to fund cause {cause_id}"))?;

    match outcome {
        FundOutcome::Cancelled => println!("Cancelled: amount must be a positive number"),
        FundOutcome::Funded(receipt) => {
            if receipt.lives > 0 {
                println!("Lives impacted by this donation: {}", receipt.lives);
            }
            if !receipt.logged {
                println!("Warning: the backend did not record this donation");
            }
        }
    }
    Ok(())
}

fn print_dashboard(dashboard: &TerminalDashboard) {
    println!("Welcome back, {}", dashboard.view().username());
    println!();
    for line in dashboard.view().cause_lines() {
        println!("  {line}");
    }
    println!();
    print_stats(dashboard);
}

fn print_stats(dashboard: &TerminalDashboard) {
    for line in dashboard.view().stat_lines() {
        println!("{line}");
    }

    let recent = dashboard.view().recent_lines();
    if !recent.is_empty() {
        println!();
        println!("Recent donations:");
        for line in recent {
            println!("  {line}");
        }
    }
}

/// A parsed shell line.
#[derive(Debug, PartialEq)]
enum ShellCommand {
    Fund { cause: u64, amount: Option<String> },
    Name(String),
    Causes,
    Stats,
    Logout,
    Help,
    Quit,
}

fn parse_shell_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word {
        "" => return Ok(None),
        "fund" => {
            let (id, amount) = rest.split_once(' ').unwrap_or((rest, ""));
            let cause = id
                .parse()
                .with_context(|| format!("Invalid cause id: {id:?}"))?;
            let amount = Some(amount.trim())
                .filter(|a| !a.is_empty())
                .map(str::to_string);
            ShellCommand::Fund { cause, amount }
        }
        "name" => ShellCommand::Name(rest.to_string()),
        "causes" | "ls" => ShellCommand::Causes,
        "stats" => ShellCommand::Stats,
        "logout" => ShellCommand::Logout,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => bail!("Unknown command: {other} (try `help`)"),
    };
    Ok(Some(command))
}

const SHELL_HELP: &str = "\
Commands:
  fund <id> [amount]   fund a cause (prompts when amount is omitted)
  name <username>      change the displayed name
  causes               list causes
  stats                show impact stats
  logout               clear stored data and leave
  quit                 exit";

async fn run_shell(dashboard: &TerminalDashboard) -> Result<()> {
    print_dashboard(dashboard);
    println!();
    println!("Type `help` for commands.");

    loop {
        print!("{}> ", dashboard.view().username());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_shell_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            ShellCommand::Fund { cause, amount } => {
                if let Err(e) = fund(dashboard, cause, amount).await {
                    println!("{e:#}");
                }
            }
            ShellCommand::Name(name) => {
                dashboard.set_username(&name);
                println!("Welcome back, {}", dashboard.view().username());
            }
            ShellCommand::Causes => {
                for line in dashboard.view().cause_lines() {
                    println!("  {line}");
                }
            }
            ShellCommand::Stats => print_stats(dashboard),
            ShellCommand::Logout => {
                if dashboard.logout() {
                    let target = dashboard.view().logged_out_to().unwrap_or_default();
                    println!("Logged out (redirect to {target})");
                    break;
                }
            }
            ShellCommand::Help => println!("{SHELL_HELP}"),
            ShellCommand::Quit => break,
        }
    }

    let stats = dashboard.stats();
    if stats.donations_made > 0 {
        println!(
            "Session total: {} across {} donation(s)",
            format_inr(stats.total_impact),
            stats.donations_made
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["impact-echo", "causes"]).unwrap();
        assert_eq!(cli.store, PathBuf::from(".impact-echo/store.json"));
        assert!(cli.username.is_none());
        assert!(matches!(cli.command, Commands::Causes));
    }

    #[test]
    fn test_cli_fund_args() {
        let cli = Cli::try_parse_from([
            "impact-echo",
            "--backend",
            "http://example.test",
            "-u",
            "asha",
            "fund",
            "--cause",
            "3",
            "--amount",
            "250",
        ])
        .unwrap();
        assert_eq!(cli.backend, "http://example.test");
        assert_eq!(cli.username.as_deref(), Some("asha"));
        match cli.command {
            Commands::Fund { cause, amount } => {
                assert_eq!(cause, 3);
                assert_eq!(amount.as_deref(), Some("250"));
            }
            _ => panic!("expected fund"),
        }
    }

    #[test]
    fn test_build_dashboard_uses_username_flag() {
        let cli = Cli::try_parse_from(["impact-echo", "-u", "asha", "causes"]).unwrap();
        let dashboard = build_dashboard(
            &cli.backend,
            cli.username,
            FileStore::new("missing/store.json"),
        );
        assert_eq!(dashboard.user().username, "asha");
        assert_eq!(dashboard.user().wallet_address, "");
    }

    #[test]
    fn test_parse_shell_fund() {
        assert_eq!(
            parse_shell_line("fund 2 300\n").unwrap(),
            Some(ShellCommand::Fund {
                cause: 2,
                amount: Some("300".to_string())
            })
        );
        assert_eq!(
            parse_shell_line("fund 2").unwrap(),
            Some(ShellCommand::Fund {
                cause: 2,
                amount: None
            })
        );
        assert!(parse_shell_line("fund water").is_err());
    }

    #[test]
    fn test_parse_shell_misc() {
        assert_eq!(parse_shell_line("   ").unwrap(), None);
        assert_eq!(
            parse_shell_line("name  Asha ").unwrap(),
            Some(ShellCommand::Name("Asha".to_string()))
        );
        assert_eq!(
            parse_shell_line("name").unwrap(),
            Some(ShellCommand::Name(String::new()))
        );
        assert_eq!(parse_shell_line("exit").unwrap(), Some(ShellCommand::Quit));
        assert!(parse_shell_line("donate 1").is_err());
    }
}
