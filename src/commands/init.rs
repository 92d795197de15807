//! @acp:module "Init Command"
//! @acp:summary "Write a .qud.config.json for the current directory"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `qud init` command for project initialization.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use crate::config::Config;
use crate::registry::industry::Industry;
use crate::registry::FieldId;
use crate::session::InputMode;

use super::output;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to write
    pub config_path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Skip interactive prompts
    pub yes: bool,
    /// Prompt template to use
    pub industry: Option<Industry>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.config_path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.config_path.display()
        );
    }

    let mut config = Config::default();
    if let Some(industry) = options.industry {
        config.industry = industry;
    }

    let interactive = !options.yes && options.industry.is_none();
    if interactive {
        run_interactive_init(&mut config)?;
    }

    config.validate()?;
    config.save(&options.config_path)?;
    output::success(format!("Created {}", options.config_path.display()));
    println!("    answers are stored in {}", config.data_dir().display());

    println!("\n{}", style("Next steps:").bold());
    println!("  1. Run {} to fill in the questionnaire", style("qud answer").cyan());
    println!("  2. Run {} to write your responses", style("qud export all").cyan());

    Ok(())
}

fn run_interactive_init(config: &mut Config) -> Result<()> {
    output::step("Questions Up & Down setup\n");
    let theme = ColorfulTheme::default();

    let industries = Industry::all();
    let names: Vec<&str> = industries.iter().map(|i| i.as_str()).collect();
    let choice = Select::with_theme(&theme)
        .with_prompt("Which industry prompts should be shown?")
        .items(&names)
        .default(0)
        .interact()?;
    config.industry = industries[choice];

    let use_options = Confirm::with_theme(&theme)
        .with_prompt("Answer \"how do you know?\" with canned options by default?")
        .default(false)
        .interact()?;
    config.input_mode = if use_options { InputMode::Options } else { InputMode::Text };

    let output_dir: String = Input::with_theme(&theme)
        .with_prompt("Export directory")
        .default(config.output_dir.display().to_string())
        .interact_text()?;
    config.output_dir = PathBuf::from(output_dir.trim());

    let want_required = Confirm::with_theme(&theme)
        .with_prompt("Mark some fields as required for `qud validate`?")
        .default(false)
        .interact()?;
    if want_required {
        let ids: Vec<FieldId> = FieldId::all().collect();
        let labels: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        let selections = MultiSelect::with_theme(&theme)
            .with_prompt("Required fields")
            .items(&labels)
            .interact()?;
        config.required_fields = selections.into_iter().map(|idx| ids[idx]).collect();
    }

    Ok(())
}
