//! @acp:module "Text Export"
//! @acp:summary "Plain text rendering; also the layout read back by import"
//! @acp:domain cli
//! @acp:layer output
//!
//! Each field is a block of `<label>:`, a dash underline as long as the
//! label, the value, and a blank line. `crate::import::text` depends on this
//! exact shape.

use super::{or_placeholder, ExportStamp, ATTRIBUTION};
use crate::form::FormData;
use crate::registry::FieldId;

pub const PLACEHOLDER: &str = "[No response]";

pub const BANNER: &str = "QUESTIONS UP & DOWN - RESPONSES";

const BANNER_RULE: &str = "================================";

/// Footer separator line, also a block terminator for the parser
pub const SEPARATOR: &str = "---";

/// Render the answer set as plain text
pub fn render_text(data: &FormData, stamp: &ExportStamp) -> String {
    let mut output = format!("{}\n{}\n\n", BANNER, BANNER_RULE);
    output.push_str(&format!("Generated: {}\n\n", stamp.display()));

    for id in FieldId::all() {
        output.push_str(&field_block(&id.text_label(), or_placeholder(data.get(id), PLACEHOLDER)));
    }

    output.push_str(&format!("\n{}\n{}\n{}", SEPARATOR, ATTRIBUTION[0], ATTRIBUTION[1]));
    output
}

fn field_block(label: &str, value: &str) -> String {
    format!("{}:\n{}\n{}\n\n", label, "-".repeat(label.chars().count()), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;

    fn stamp() -> ExportStamp {
        let utc = FixedOffset::east_opt(0).unwrap();
        ExportStamp::new(utc.with_ymd_and_hms(2026, 10, 17, 21, 5, 9).unwrap())
    }

    #[test]
    fn test_header() {
        let output = render_text(&FormData::new(), &stamp());
        assert!(output.starts_with(
            "QUESTIONS UP & DOWN - RESPONSES\n================================\n\nGenerated: 10/17/2026, 9:05:09 PM\n\nWORLD IMPACT - What do you know?:\n"
        ));
    }

    #[test]
    fn test_problem_blocks() {
        let mut data = FormData::new();
        data.set("problem-what".parse::<FieldId>().unwrap(), "Users waste time");
        data.set("problem-how".parse::<FieldId>().unwrap(), "");

        let output = render_text(&data, &stamp());
        let what = format!("PROBLEM - What do you know?:\n{}\nUsers waste time\n\n", "-".repeat(27));
        let how = format!("PROBLEM - How do you know?:\n{}\n[No response]\n\n", "-".repeat(26));
        assert!(output.contains(&what), "missing what block in:\n{}", output);
        assert!(output.contains(&how), "missing how block in:\n{}", output);
    }

    #[test]
    fn test_footer_follows_last_block() {
        let output = render_text(&FormData::new(), &stamp());
        let expected_tail = format!(
            "PRODUCTION - How do you know?:\n{}\n[No response]\n\n\n---\nGenerated by Questions Up & Down Web App\nMonty Sharma and Maia Schlussel 2025",
            "-".repeat(29)
        );
        assert!(output.ends_with(&expected_tail));
    }

    #[test]
    fn test_idempotent_for_fixed_stamp() {
        let mut data = FormData::new();
        data.set("exit-what".parse::<FieldId>().unwrap(), "Acquisition");
        assert_eq!(render_text(&data, &stamp()), render_text(&data, &stamp()));
    }

    #[test]
    fn test_one_block_per_field() {
        let output = render_text(&FormData::new(), &stamp());
        assert_eq!(output.matches(PLACEHOLDER).count(), 32);
        assert!(output.contains("PRODUCT LINE EXPANSION - What do you know?:\n"));
    }
}
