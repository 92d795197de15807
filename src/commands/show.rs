//! @acp:module "Show Command"
//! @acp:summary "Print saved answers"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::registry::{FieldId, SECTIONS};

use super::{open_session, output};

/// Options for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Print only this field's raw value
    pub field: Option<FieldId>,
    /// Print the answer map as JSON
    pub json: bool,
}

/// Execute the show command
pub fn execute_show(options: ShowOptions, config: Config) -> Result<()> {
    let session = open_session(&config);
    let data = session.data();

    if let Some(id) = options.field {
        if options.json {
            println!("{}", serde_json::to_string(data.get(id))?);
        } else {
            println!("{}", data.get(id));
        }
        return Ok(());
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(data)?);
        return Ok(());
    }

    for section in SECTIONS.iter() {
        output::section_heading(section);
        for id in [section.what(), section.how()] {
            println!("  {}", style(id.question.prompt()).bold());
            println!("{}", output::answer_block(data.get(id)));
        }
    }
    Ok(())
}
