//! Settings CLI commands

use clap::Subcommand;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerStore;
use crate::models::Theme;
use crate::services::SettingsService;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Set the currency symbol
    Currency { symbol: String },

    /// Set the date display format (DD/MM/YYYY tokens)
    DateFormat { format: String },

    /// Set the theme: light or dark
    Theme { theme: String },
}

/// Handle a settings command
pub fn handle_settings_command(store: &mut LedgerStore, cmd: SettingsCommands) -> LedgerResult<()> {
    let mut service = SettingsService::new(store);

    match cmd {
        SettingsCommands::Show => {
            let settings = service.settings();
            println!("Currency:    {}", settings.currency);
            println!("Date format: {}", settings.date_format);
            println!("Theme:       {}", settings.theme);
        }

        SettingsCommands::Currency { symbol } => {
            service.set_currency(&symbol)?;
            println!("Currency set to {}", symbol.trim());
        }

        SettingsCommands::DateFormat { format } => {
            service.set_date_format(&format)?;
            println!("Date format set to {}", format.trim());
        }

        SettingsCommands::Theme { theme } => {
            let theme = Theme::parse(&theme).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Unknown theme '{}' (expected light or dark)",
                    theme
                ))
            })?;
            service.set_theme(theme);
            println!("Theme set to {}", theme);
        }
    }

    Ok(())
}
