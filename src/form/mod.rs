//! @acp:module "Form State"
//! @acp:summary "In-memory answer set and the field surface adapter"
//! @acp:domain cli
//! @acp:layer model
//!
//! [`FormData`] is the system of record for current answers. Anything that
//! holds answers keyed by raw id strings (parsed JSON, a UI layer) is reached
//! through the [`FieldSurface`] trait and converted with [`collect`] / [`apply`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

use crate::registry::{FieldId, FIELD_COUNT};

/// @acp:summary "Answers keyed by field id, iterated in export order"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: BTreeMap<FieldId, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field; absent fields read as empty
    pub fn get(&self, id: FieldId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        self.values.insert(id, value.into());
    }

    pub fn remove(&mut self, id: FieldId) -> Option<String> {
        self.values.remove(&id)
    }

    /// Overwrite with every key present in `other`; other keys are untouched
    pub fn merge(&mut self, other: &FormData) {
        for (id, value) in &other.values {
            self.values.insert(*id, value.clone());
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Fields holding something other than whitespace
    pub fn filled_count(&self) -> usize {
        self.values.values().filter(|v| !v.trim().is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.values.iter().map(|(id, v)| (*id, v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.values.keys().copied()
    }
}

impl FromIterator<(FieldId, String)> for FormData {
    fn from_iter<I: IntoIterator<Item = (FieldId, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Serialize for FormData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FormData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, String>::deserialize(deserializer)?;
        Ok(collect(&raw))
    }
}

/// @acp:summary "Key-value view over whatever currently holds answers"
///
/// Unknown ids are never an error: reads return `None` and writes return
/// `false`.
pub trait FieldSurface {
    /// Current value of an id, if the surface knows it
    fn value(&self, id: &str) -> Option<String>;

    /// Write a value; returns whether the id was accepted
    fn set_value(&mut self, id: &str, value: &str) -> bool;

    /// Every id the surface currently holds
    fn ids(&self) -> Vec<String>;
}

impl FieldSurface for FormData {
    fn value(&self, id: &str) -> Option<String> {
        let id: FieldId = id.parse().ok()?;
        Some(self.get(id).to_string())
    }

    fn set_value(&mut self, id: &str, value: &str) -> bool {
        match id.parse::<FieldId>() {
            Ok(id) => {
                self.set(id, value);
                true
            }
            Err(_) => false,
        }
    }

    fn ids(&self) -> Vec<String> {
        FieldId::all().map(|id| id.to_string()).collect()
    }
}

impl FieldSurface for HashMap<String, String> {
    fn value(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }

    fn set_value(&mut self, id: &str, value: &str) -> bool {
        self.insert(id.to_string(), value.to_string());
        true
    }

    fn ids(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

/// Gather the known fields of a surface, skipping ids the registry lacks
pub fn collect<S: FieldSurface + ?Sized>(surface: &S) -> FormData {
    let mut data = FormData::new();
    for raw in surface.ids() {
        match raw.parse::<FieldId>() {
            Ok(id) => {
                if let Some(value) = surface.value(&raw) {
                    data.set(id, value);
                }
            }
            Err(_) => tracing::debug!("Ignoring unknown field id: {}", raw),
        }
    }
    data
}

/// Push every field of `data` onto a surface
pub fn apply<S: FieldSurface + ?Sized>(surface: &mut S, data: &FormData) {
    for (id, value) in data.iter() {
        if !surface.set_value(&id.to_string(), value) {
            tracing::debug!("Surface rejected field: {}", id);
        }
    }
}

/// Blank every id a surface holds
pub fn clear_surface<S: FieldSurface + ?Sized>(surface: &mut S) {
    for id in surface.ids() {
        surface.set_value(&id, "");
    }
}

/// Share of the questionnaire answered, rounded to a whole percent
pub fn completion_percentage(data: &FormData) -> u8 {
    let filled = data.filled_count() as f64;
    ((filled / FIELD_COUNT as f64) * 100.0).round() as u8
}

/// One message per required field that is blank
pub fn validate_required(data: &FormData, required: &[FieldId]) -> Vec<String> {
    required
        .iter()
        .filter(|id| data.get(**id).trim().is_empty())
        .map(|id| format!("Please fill in the {} field.", id.to_string().replacen('-', " ", 1)))
        .collect()
}
