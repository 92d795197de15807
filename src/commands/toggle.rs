//! @acp:module "Toggle Command"
//! @acp:summary "Flip one canned option on a how-field"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::checkbox::{self, CHECKBOX_OPTIONS};
use crate::config::Config;
use crate::registry::FieldId;

use super::{open_session, output};

/// Options for the toggle command
#[derive(Debug, Clone)]
pub struct ToggleOptions {
    pub field: FieldId,
    /// Option value or label
    pub option: String,
}

/// Execute the toggle command
pub fn execute_toggle(options: ToggleOptions, config: Config) -> Result<()> {
    let mut session = open_session(&config);
    let before = session.data().get(options.field).to_string();

    let text = session.toggle_option(options.field, &options.option)?;

    let only_options = checkbox::text_from_toggles(&checkbox::toggles_from_text(&before)) == before;
    if !before.trim().is_empty() && !only_options {
        output::warning(format!(
            "Free text in {} was replaced by the selected options",
            options.field
        ));
    }

    let toggles = checkbox::toggles_from_text(&text);
    output::success(format!("Updated {}", options.field));
    for (option, on) in CHECKBOX_OPTIONS.iter().zip(toggles) {
        let mark = if on { style("[x]").green() } else { style("[ ]").dim() };
        println!("    {} {}", mark, option.label);
    }
    Ok(())
}
