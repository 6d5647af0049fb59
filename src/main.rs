//! finentry - Personal finance entry forms
//!
//! A desktop companion for a personal-finance ledger: describe an entry, see
//! validation feedback as you type, and keep a session ledger with per-kind
//! totals.
//!
//! # Features
//!
//! - Real-time description/amount validation with inline feedback
//! - Advisory warnings for unusually high amounts
//! - Draft autosave (debounced) and restore across restarts
//! - Auto-dismissing notification banners
//! - Confirmation-gated deletion
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! finentry
//!
//! # CLI commands
//! finentry check --description "Groceries" --amount 250.40
//! finentry device "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)"
//! finentry fmt 1234.56
//! ```

use clap::{Parser, Subcommand};
use finentry::app;
use finentry::app::helpers::formatting::format_currency;
use iced::Size;
use std::process::ExitCode;

shadow_rs::shadow!(build);

#[derive(Parser)]
#[command(name = "finentry")]
#[command(about = "Personal finance entry forms", long_about = None)]
#[command(version = build::PKG_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a description and amount the way the entry form does
    Check {
        /// Entry description
        #[arg(long)]
        description: String,
        /// Entry amount (decimal, comma or dot separator)
        #[arg(long)]
        amount: String,
    },
    /// Classify a user-agent string as mobile, tablet or desktop
    Device {
        /// User-agent string to classify
        user_agent: String,
    },
    /// Format an amount as pt-BR currency
    Fmt {
        /// Amount to format
        amount: f64,
    },
}

fn main() -> ExitCode {
    let _ = finentry::utils::ensure_dirs();
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match handle_cli(command) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        launch_gui()
    }
}

fn handle_cli(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Check {
            description,
            amount,
        } => {
            let config = finentry::config::load_config_blocking();
            let mut first_error = None;

            match finentry::validators::validate_description(&description) {
                Ok(trimmed) => println!("description: ok ({} chars)", trimmed.chars().count()),
                Err(message) => {
                    println!("description: {message}");
                    first_error.get_or_insert(finentry::Error::Validation {
                        field: "description".to_string(),
                        message,
                    });
                }
            }

            match finentry::validators::validate_amount(&amount, &config) {
                Ok(value) => {
                    println!("amount: ok ({})", format_currency(value));
                    if let Some(warning) = finentry::validators::check_high_amount(value, &config)
                    {
                        println!("note: {warning}");
                    }
                }
                Err(message) => {
                    println!("amount: {message}");
                    first_error.get_or_insert(finentry::Error::Validation {
                        field: "amount".to_string(),
                        message,
                    });
                }
            }

            if let Some(error) = first_error {
                return Err(error.into());
            }
        }
        Commands::Device { user_agent } => {
            println!("{}", finentry::device::classify_user_agent(&user_agent));
        }
        Commands::Fmt { amount } => {
            println!("{}", format_currency(amount));
        }
    }
    Ok(())
}

fn launch_gui() -> ExitCode {
    // Set up logging to file
    if let Some(mut log_path) = finentry::utils::get_state_dir() {
        log_path.push("finentry.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt().with_writer(file).init();
        } else {
            tracing_subscriber::fmt::init();
        }
    } else {
        tracing_subscriber::fmt::init();
    }

    let result = iced::application(app::State::new, app::State::update, app::State::view)
        .subscription(app::State::subscription)
        .window(iced::window::Settings {
            size: Size::new(520.0, 720.0),
            ..Default::default()
        })
        .title("Finentry")
        .theme(|state: &app::State| state.theme.clone())
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
