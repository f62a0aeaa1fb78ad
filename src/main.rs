use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use expense_tracker::cli::{run_session, Session};
use expense_tracker::config::{Settings, TrackerPaths, CONFIG_DIR_ENV};
use expense_tracker::display::{
    format_breakdown, format_summary, format_transaction_register, DisplayOptions,
};
use expense_tracker::models::FilterCriteria;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "Record income and expenses, narrow the list with search and \
                  filters, and see totals and a per-category expense breakdown. \
                  Data lives for one session only."
)]
struct Cli {
    /// Start with the sample transactions loaded
    #[arg(long, global = true)]
    sample: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration directory
    #[arg(long, env = CONFIG_DIR_ENV, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    #[command(alias = "repl")]
    Session,

    /// Load the sample transactions and print the dashboard
    Demo,

    /// Show or create the configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.config_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_default(&paths)?;

    expense_tracker::logging::init(cli.verbose, &settings.log_level);
    debug!(config = %paths.settings_file().display(), "loaded settings");

    match cli.command {
        None | Some(Commands::Session) => {
            let seed = cli.sample || settings.sample_data;
            let mut session = Session::new(settings);
            if seed {
                let count = session.seed_sample()?;
                debug!(count, "loaded sample transactions");
            }

            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                println!("Expense Tracker {}", env!("CARGO_PKG_VERSION"));
                println!("Type 'help' for commands, 'exit' to quit.");
            }

            {
                let mut stdout = io::stdout().lock();
                run_session(&mut session, stdin.lock(), &mut stdout, interactive)?;
            }
            if interactive {
                println!();
            }
        }

        Some(Commands::Demo) => {
            let opts = DisplayOptions::from_settings(&settings);
            let mut session = Session::new(settings);
            session.seed_sample()?;

            let service = session.service();
            let visible = service.visible(&FilterCriteria::new());

            println!("Transactions");
            print!("{}", format_transaction_register(&visible, &opts));
            println!();
            println!("Summary");
            print!("{}", format_summary(&service.summary(&visible), &opts));
            println!();
            print!(
                "{}",
                format_breakdown(&service.category_breakdown(&visible), &opts)
            );
        }

        Some(Commands::Config(ConfigCommands::Show)) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Sample data:     {}", settings.sample_data);
            println!("  Log level:       {}", settings.log_level);
            println!("  Categories:      {}", settings.categories.join(", "));
        }

        Some(Commands::Config(ConfigCommands::Init { force })) => {
            if paths.is_initialized() && !force {
                println!(
                    "Configuration already exists at: {}",
                    paths.settings_file().display()
                );
                println!("Use --force to overwrite it with defaults.");
                return Ok(());
            }

            Settings::default().save(&paths)?;
            println!(
                "Wrote default configuration to: {}",
                paths.settings_file().display()
            );
        }
    }

    Ok(())
}
