//! @acp:module "Validate Command"
//! @acp:summary "Check the configured required fields are filled in"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::{bail, Result};

use crate::config::Config;
use crate::form::validate_required;

use super::{open_session, output};

/// Execute the validate command
pub fn execute_validate(config: Config) -> Result<()> {
    if config.required_fields.is_empty() {
        output::warning("No requiredFields configured; nothing to check");
        return Ok(());
    }

    let session = open_session(&config);
    let messages = validate_required(session.data(), &config.required_fields);

    if messages.is_empty() {
        output::success(format!(
            "All {} required fields are filled in",
            config.required_fields.len()
        ));
        return Ok(());
    }

    for message in &messages {
        output::failure(message);
    }
    bail!(
        "{} of {} required fields are empty",
        messages.len(),
        config.required_fields.len()
    )
}
