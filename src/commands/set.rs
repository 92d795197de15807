//! @acp:module "Set Command"
//! @acp:summary "Set a single field from the command line or stdin"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Read;

use anyhow::{bail, Result};

use crate::config::Config;
use crate::registry::FieldId;

use super::{open_session, output};

/// Options for the set command
#[derive(Debug, Clone)]
pub struct SetOptions {
    pub field: FieldId,
    /// New value; an empty string blanks the field
    pub value: Option<String>,
    /// Read the value from stdin
    pub stdin: bool,
}

/// Execute the set command
pub fn execute_set(options: SetOptions, config: Config) -> Result<()> {
    let value = match (options.value, options.stdin) {
        (Some(_), true) => bail!("Pass a value or --stdin, not both"),
        (Some(value), false) => value,
        (None, true) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer.trim_end_matches(['\r', '\n']).to_string()
        }
        (None, false) => bail!("No value given for {}. Pass one or use --stdin.", options.field),
    };

    let mut session = open_session(&config);
    session.set_value(options.field, value)?;
    output::success(format!("Saved {}", options.field));
    Ok(())
}
