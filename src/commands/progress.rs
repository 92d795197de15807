//! @acp:module "Progress Command"
//! @acp:summary "Report how much of the questionnaire is answered"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::form::completion_percentage;
use crate::registry::FIELD_COUNT;

use super::{open_session, output};

/// Execute the progress command
pub fn execute_progress(config: Config) -> Result<()> {
    let session = open_session(&config);
    let data = session.data();
    let percent = completion_percentage(data);

    println!(
        "{} {}% ({} of {} answered)",
        output::progress_bar(percent, 20),
        style(percent).bold(),
        data.filled_count(),
        FIELD_COUNT
    );
    Ok(())
}
