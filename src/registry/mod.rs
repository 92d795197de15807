//! @acp:module "Field Registry"
//! @acp:summary "Fixed questionnaire topics, field identifiers and their labels"
//! @acp:domain cli
//! @acp:layer model
//!
//! The [`SECTIONS`] table is the only place topic order and titles are
//! defined. Every renderer and the Text parser derive from it.

pub mod industry;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::QudError;

/// Questionnaire topic, declared in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    WorldImpact,
    Exit,
    SectorMapping,
    CompetitiveMarket,
    ProductExpansion,
    Company,
    BusinessModel,
    CustomerSegment,
    Solution,
    Problem,
    PainScale,
    Product,
    Requirements,
    Design,
    Integrations,
    Production,
}

impl Topic {
    /// All topics in export order
    pub fn all() -> impl Iterator<Item = Topic> {
        SECTIONS.iter().map(|s| s.topic)
    }

    /// The registry row for this topic
    pub fn section(self) -> &'static Section {
        &SECTIONS[self as usize]
    }

    pub fn slug(self) -> &'static str {
        self.section().slug
    }

    /// Look up a topic by its slug (`"world-impact"`, `"pain-scale"`, ...)
    pub fn from_slug(slug: &str) -> Option<Topic> {
        SECTIONS.iter().find(|s| s.slug == slug).map(|s| s.topic)
    }
}

/// Which half of a topic a field answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Question {
    What,
    How,
}

impl Question {
    pub fn prompt(self) -> &'static str {
        match self {
            Question::What => "What do you know?",
            Question::How => "How do you know?",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Question::What => "what",
            Question::How => "how",
        }
    }
}

/// One row of the topic table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub topic: Topic,
    /// Prefix shared by the section's two field ids
    pub slug: &'static str,
    /// Display title used by the Markdown and PDF exports
    pub title: &'static str,
    /// Heading used in Text export labels; canonical for import
    pub text_heading: &'static str,
}

impl Section {
    pub fn what(&self) -> FieldId {
        FieldId::new(self.topic, Question::What)
    }

    pub fn how(&self) -> FieldId {
        FieldId::new(self.topic, Question::How)
    }
}

const fn section(
    topic: Topic,
    slug: &'static str,
    title: &'static str,
    text_heading: &'static str,
) -> Section {
    Section { topic, slug, title, text_heading }
}

/// The questionnaire, in export order
pub static SECTIONS: [Section; 16] = [
    section(Topic::WorldImpact, "world-impact", "World Impact", "WORLD IMPACT"),
    section(Topic::Exit, "exit", "Exit", "EXIT"),
    section(Topic::SectorMapping, "sector-mapping", "Sector Mapping", "SECTOR MAPPING"),
    section(Topic::CompetitiveMarket, "competitive-market", "Competitive Market", "COMPETITIVE MARKET"),
    section(Topic::ProductExpansion, "product-expansion", "Market Expansion", "PRODUCT LINE EXPANSION"),
    section(Topic::Company, "company", "Company", "COMPANY"),
    section(Topic::BusinessModel, "business-model", "Business Model", "BUSINESS MODEL"),
    section(Topic::CustomerSegment, "customer-segment", "Customer Segment", "CUSTOMER SEGMENT"),
    section(Topic::Solution, "solution", "Solution", "SOLUTION"),
    section(Topic::Problem, "problem", "Problem", "PROBLEM"),
    section(Topic::PainScale, "pain-scale", "Pain Scale", "PAIN SCALE"),
    section(Topic::Product, "product", "Product", "PRODUCT"),
    section(Topic::Requirements, "requirements", "Requirements", "REQUIREMENTS"),
    section(Topic::Design, "design", "Design", "DESIGN"),
    section(Topic::Integrations, "integrations", "Integrations", "INTEGRATIONS"),
    section(Topic::Production, "production", "Production", "PRODUCTION"),
];

/// Number of answer slots in the questionnaire
pub const FIELD_COUNT: usize = 32;

/// @acp:summary "Identifier of one answer slot"
///
/// Ordering follows export order: topic first, then `what` before `how`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub topic: Topic,
    pub question: Question,
}

impl FieldId {
    pub const fn new(topic: Topic, question: Question) -> Self {
        Self { topic, question }
    }

    /// All 32 field ids in export order
    pub fn all() -> impl Iterator<Item = FieldId> {
        SECTIONS.iter().flat_map(|s| [s.what(), s.how()])
    }

    pub fn section(&self) -> &'static Section {
        self.topic.section()
    }

    pub fn is_how(&self) -> bool {
        self.question == Question::How
    }

    /// Text export label, e.g. `"PROBLEM - What do you know?"`
    pub fn text_label(&self) -> String {
        format!("{} - {}", self.section().text_heading, self.question.prompt())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.topic.slug(), self.question.suffix())
    }
}

impl FromStr for FieldId {
    type Err = QudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (slug, question) = if let Some(slug) = s.strip_suffix("-what") {
            (slug, Question::What)
        } else if let Some(slug) = s.strip_suffix("-how") {
            (slug, Question::How)
        } else {
            return Err(QudError::UnknownField(s.to_string()));
        };

        Topic::from_slug(slug)
            .map(|topic| FieldId::new(topic, question))
            .ok_or_else(|| QudError::UnknownField(s.to_string()))
    }
}

impl Serialize for FieldId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
