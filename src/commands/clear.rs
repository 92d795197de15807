//! @acp:module "Clear Command"
//! @acp:summary "Erase all answers and the saved copy"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::config::Config;

use super::{open_session, output};

/// Options for the clear command
#[derive(Debug, Clone, Default)]
pub struct ClearOptions {
    /// Skip the confirmation prompt
    pub yes: bool,
}

/// Execute the clear command
pub fn execute_clear(options: ClearOptions, config: Config) -> Result<()> {
    let confirmed = options.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Are you sure you want to clear all responses? This cannot be undone.")
            .default(false)
            .interact()?;

    if !confirmed {
        output::step("Nothing cleared");
        return Ok(());
    }

    let mut session = open_session(&config);
    session.clear()?;
    output::success("All responses cleared");
    Ok(())
}
