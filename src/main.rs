use anyhow::Result;
use clap::{Parser, Subcommand};

use clearcoin::cli::{
    handle_budget_command, handle_expense_command, handle_summary_command, BudgetCommands,
    ExpenseCommands,
};
use clearcoin::config::{paths::ClearCoinPaths, settings::Settings};
use clearcoin::services::ExpenseTracker;

#[derive(Parser)]
#[command(
    name = "clearcoin",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "ClearCoin keeps a list of your expenses and a monthly budget, \
                  and shows how much of this month's budget is left. Run it \
                  without a subcommand to open the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show this month's budget summary
    Summary {
        /// Skip the per-category breakdown
        #[arg(long)]
        brief: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ClearCoinPaths::new()?;
    paths.ensure_directories()?;

    let command = cli.command.unwrap_or(Commands::Tui);
    if matches!(command, Commands::Tui) {
        clearcoin::init_file_tracing(&paths.log_file());
    } else {
        clearcoin::init_tracing();
    }

    let settings = Settings::load_or_create(&paths)?;
    let mut tracker = ExpenseTracker::load(clearcoin::storage::open(&paths, &settings)?);

    let result = match command {
        Commands::Tui => {
            clearcoin::tui::run_tui(&mut tracker, &settings)?;
            Ok(())
        }
        Commands::Expense(cmd) => {
            print_notices(&mut tracker);
            handle_expense_command(&mut tracker, &settings, cmd)
        }
        Commands::Budget(cmd) => {
            print_notices(&mut tracker);
            handle_budget_command(&mut tracker, &settings, cmd)
        }
        Commands::Summary { brief } => {
            print_notices(&mut tracker);
            handle_summary_command(&tracker, &settings, !brief)
        }
        Commands::Config => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("ClearCoin Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!(
                "  Default budget:  {}",
                settings
                    .default_budget
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  Date format:     {}", settings.date_format);
            Ok(())
        }
    };

    // Write failures during the command
    print_notices(&mut tracker);
    result?;

    Ok(())
}

fn print_notices(tracker: &mut ExpenseTracker) {
    for notice in tracker.take_notices() {
        eprintln!("warning: {}", notice);
    }
}
