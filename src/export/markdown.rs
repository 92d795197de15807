//! @acp:module "Markdown Export"
//! @acp:summary "Markdown rendering of the answer set"
//! @acp:domain cli
//! @acp:layer output
//!
//! User text is embedded verbatim; Markdown metacharacters are not escaped.

use super::{or_placeholder, ExportStamp, ATTRIBUTION, DOCUMENT_TITLE};
use crate::form::FormData;
use crate::registry::SECTIONS;

pub const PLACEHOLDER: &str = "*No response*";

/// Render the answer set as a Markdown document
pub fn render_markdown(data: &FormData, stamp: &ExportStamp) -> String {
    let mut output = format!("# {}\n\n", DOCUMENT_TITLE);
    output.push_str(&format!("**Generated:** {}\n\n", stamp.display()));
    output.push_str("---\n\n");

    for section in SECTIONS.iter() {
        output.push_str(&format!("## {}\n\n", section.title));
        for id in [section.what(), section.how()] {
            let value = or_placeholder(data.get(id), PLACEHOLDER);
            output.push_str(&format!("**{}**\n\n{}\n\n", id.question.prompt(), value));
        }
        output.push_str("---\n\n");
    }

    output.push_str(&format!("\n*{}*\n*{}*", ATTRIBUTION[0], ATTRIBUTION[1]));
    output
}
