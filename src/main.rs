use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{run_menu, Session};
use budget_tracker::config::{paths::TrackerPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "budget-tracker records income and expenses for one session, \
                  keeps a running balance, warns when spending passes your \
                  monthly goal and prints a summary report."
)]
struct Cli {
    /// Currency symbol printed before amounts (overrides config)
    #[arg(long, global = true, env = "BUDGET_TRACKER_CURRENCY")]
    currency: Option<String>,

    /// Maximum number of transactions kept this session (overrides config)
    #[arg(long, global = true)]
    capacity: Option<usize>,

    /// Increase diagnostic output on stderr (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session (default)
    #[command(alias = "start")]
    Run,

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    budget_tracker::logging::init(cli.verbose);

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_overrides(cli.currency, cli.capacity);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let mut session = Session::new(settings);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout().lock();
            run_menu(&mut session, &mut input, &mut out)?;
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("budget-tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {:?}", settings.currency_symbol);
            match settings.history_capacity {
                Some(capacity) => println!("  History capacity: {}", capacity),
                None => println!("  History capacity: unbounded"),
            }
            if !paths.is_initialized() {
                println!();
                println!("Using defaults. Run 'budget init' to write a settings file.");
            }
        }
    }

    Ok(())
}
