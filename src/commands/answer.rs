//! @acp:module "Answer Command"
//! @acp:summary "Interactively walk the questionnaire and save each answer"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};

use crate::checkbox::{self, Toggles, CHECKBOX_OPTIONS, OPTION_COUNT};
use crate::config::Config;
use crate::form::completion_percentage;
use crate::registry::{FieldId, Topic, SECTIONS};
use crate::session::{InputMode, SessionState};

use super::{open_session, output};

/// Options for the answer command
#[derive(Debug, Clone, Default)]
pub struct AnswerOptions {
    /// Only this topic; all topics when unset
    pub topic: Option<Topic>,
    /// Use option toggles for how-fields regardless of config
    pub options: bool,
}

/// Execute the answer command
pub fn execute_answer(options: AnswerOptions, config: Config) -> Result<()> {
    let mut session = open_session(&config);
    if options.options && session.input_mode() == InputMode::Text {
        session.toggle_input_mode();
    }

    let theme = ColorfulTheme::default();
    let sections = SECTIONS
        .iter()
        .filter(|s| options.topic.map_or(true, |topic| topic == s.topic));

    for section in sections {
        output::section_heading(section);
        for line in config.industry.prompt_lines(section.topic) {
            println!("  {}", style(line).dim());
        }

        for id in [section.what(), section.how()] {
            if session.input_mode() == InputMode::Options && checkbox::has_options(id) {
                ask_options(&mut session, &theme, id)?;
            } else {
                ask_text(&mut session, &theme, id)?;
            }
        }
    }

    output::success(format!(
        "Answers saved ({}% complete)",
        completion_percentage(session.data())
    ));
    Ok(())
}

fn ask_text(session: &mut SessionState, theme: &ColorfulTheme, id: FieldId) -> Result<()> {
    let current = session.data().get(id).to_string();
    let answer: String = Input::with_theme(theme)
        .with_prompt(id.question.prompt())
        .with_initial_text(current.clone())
        .allow_empty(true)
        .interact_text()?;

    if answer != current {
        session.set_value(id, answer)?;
    }
    Ok(())
}

fn ask_options(session: &mut SessionState, theme: &ColorfulTheme, id: FieldId) -> Result<()> {
    let defaults = checkbox::toggles_from_text(session.data().get(id));
    let labels: Vec<&str> = CHECKBOX_OPTIONS.iter().map(|o| o.label).collect();

    let chosen = MultiSelect::with_theme(theme)
        .with_prompt(id.question.prompt())
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    let mut toggles: Toggles = [false; OPTION_COUNT];
    for index in chosen {
        toggles[index] = true;
    }
    if toggles != defaults {
        session.select_options(id, &toggles)?;
    }
    Ok(())
}
