//! @acp:module "Questions Command"
//! @acp:summary "Print the questionnaire prompts for an industry"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::registry::industry::Industry;
use crate::registry::SECTIONS;

use super::output;

/// Options for the questions command
#[derive(Debug, Clone, Default)]
pub struct QuestionsOptions {
    pub industry: Industry,
}

/// Execute the questions command
pub fn execute_questions(options: QuestionsOptions) -> Result<()> {
    println!("{} {} prompts", style("→").cyan(), style(options.industry).bold());

    for section in SECTIONS.iter() {
        output::section_heading(section);
        for line in options.industry.prompt_lines(section.topic) {
            println!("  {}", line);
        }
    }
    Ok(())
}
