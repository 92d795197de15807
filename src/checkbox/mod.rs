//! @acp:module "Checkbox-Text Bridge"
//! @acp:summary "Keeps a how-field's text in step with its canned option toggles"
//! @acp:domain cli
//! @acp:layer service
//!
//! A how-field answer is either free text or the `"; "`-joined values of the
//! options switched on. Deriving toggles from text drops pieces that match no
//! option; writing text from toggles replaces the whole field, so free text is
//! lost as soon as any toggle changes.

use crate::error::{QudError, Result};
use crate::registry::{FieldId, Question, Topic};

/// A canned rationale offered for how-fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxOption {
    /// Text written into the field
    pub value: &'static str,
    /// Text shown next to the toggle
    pub label: &'static str,
}

pub const OPTION_COUNT: usize = 4;

/// Options in display and join order
pub const CHECKBOX_OPTIONS: [CheckboxOption; OPTION_COUNT] = [
    CheckboxOption { value: "seems logical", label: "Seems logical" },
    CheckboxOption { value: "based on my experience", label: "Based on my experience" },
    CheckboxOption { value: "customer interviews", label: "Customer interviews" },
    CheckboxOption { value: "based on industry research", label: "Based on industry research" },
];

const JOINER: &str = "; ";

/// On/off state of each option, indexed like [`CHECKBOX_OPTIONS`]
pub type Toggles = [bool; OPTION_COUNT];

/// Whether a field carries option toggles
///
/// Every how-field does except the world impact one.
pub fn has_options(id: FieldId) -> bool {
    id.question == Question::How && id.topic != Topic::WorldImpact
}

/// Index of the option whose value is exactly `value`
pub fn option_index(value: &str) -> Option<usize> {
    CHECKBOX_OPTIONS.iter().position(|o| o.value == value)
}

/// Look up an option by value, or by label ignoring case
pub fn find_option(name: &str) -> Result<usize> {
    option_index(name)
        .or_else(|| {
            CHECKBOX_OPTIONS
                .iter()
                .position(|o| o.label.eq_ignore_ascii_case(name.trim()))
        })
        .ok_or_else(|| QudError::UnknownOption(name.to_string()))
}

/// Derive toggles from a field's text
pub fn toggles_from_text(text: &str) -> Toggles {
    let pieces: Vec<&str> = text.split(';').map(str::trim).collect();
    let mut toggles = [false; OPTION_COUNT];
    for (slot, option) in toggles.iter_mut().zip(CHECKBOX_OPTIONS.iter()) {
        *slot = pieces.contains(&option.value);
    }
    toggles
}

/// Rebuild a field's text from toggles
pub fn text_from_toggles(toggles: &Toggles) -> String {
    CHECKBOX_OPTIONS
        .iter()
        .zip(toggles.iter())
        .filter(|(_, on)| **on)
        .map(|(option, _)| option.value)
        .collect::<Vec<_>>()
        .join(JOINER)
}

/// Flip one option and return the field's new text
pub fn toggle(text: &str, index: usize) -> String {
    let mut toggles = toggles_from_text(text);
    if let Some(slot) = toggles.get_mut(index) {
        *slot = !*slot;
    }
    text_from_toggles(&toggles)
}
