//! @acp:module "Text Import"
//! @acp:summary "Line scanner reading answers back out of a Text export"
//! @acp:domain cli
//! @acp:layer parser
//!
//! Each field is looked up independently by its label. A label that is
//! missing or has no dash underline drops only that field.

use crate::export::text::{PLACEHOLDER, SEPARATOR};
use crate::form::FormData;
use crate::registry::FieldId;

/// Parse a Text export (or a hand-edited copy) into the fields it contains
pub fn parse_text(input: &str) -> FormData {
    let lines: Vec<&str> = input.split('\n').map(|line| line.trim_end_matches('\r')).collect();
    let mut data = FormData::new();

    for id in FieldId::all() {
        let label = format!("{}:", id.text_label());
        match find_value(&lines, &label) {
            Some(value) => {
                data.set(id, value);
            }
            None => tracing::debug!("No value for {} in text import", id),
        }
    }

    data
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_underline(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.chars().all(|c| c == '-')
}

/// A value ends at an empty line followed by a heading-like line
fn ends_block(line: &str, next: Option<&&str>) -> bool {
    line.is_empty()
        && next.is_some_and(|next| {
            next.starts_with(SEPARATOR) || next.starts_with(|c: char| c.is_ascii_uppercase())
        })
}

/// A non-blank line ending in `:` whose next non-blank line is a dash underline
fn opens_block(lines: &[&str], index: usize) -> bool {
    lines[index].trim().ends_with(':')
        && (index + 1..lines.len())
            .find(|&i| !is_blank(lines[i]))
            .is_some_and(|i| is_underline(lines[i]))
}

/// Whether skipping blank lines at `cursor` would run into the next block
fn reaches_next_block(lines: &[&str], cursor: usize) -> bool {
    lines[cursor].is_empty()
        && lines
            .get(cursor + 1)
            .is_some_and(|next| next.starts_with(SEPARATOR) || opens_block(lines, cursor + 1))
}

fn find_value(lines: &[&str], label: &str) -> Option<String> {
    let mut start = 0;

    while let Some(offset) = lines[start..].iter().position(|line| line.trim() == label) {
        let heading = start + offset;
        start = heading + 1;

        let Some(underline) = (heading + 1..lines.len()).find(|&i| !is_blank(lines[i])) else {
            return None;
        };
        if !is_underline(lines[underline]) {
            continue;
        }

        let mut cursor = underline + 1;
        while cursor < lines.len() && is_blank(lines[cursor]) {
            if reaches_next_block(lines, cursor) {
                return None;
            }
            cursor += 1;
        }
        if cursor < lines.len() && opens_block(lines, cursor) {
            return None;
        }

        let mut content = Vec::new();
        while cursor < lines.len() && !ends_block(lines[cursor], lines.get(cursor + 1)) {
            content.push(lines[cursor]);
            cursor += 1;
        }

        let value = content.join("\n").trim().to_string();
        if value.is_empty() || value == PLACEHOLDER {
            return None;
        }
        return Some(value);
    }

    None
}
