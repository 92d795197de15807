//! @acp:module "Industry Templates"
//! @acp:summary "Per-industry question prompts swapped into the questionnaire"
//! @acp:domain cli
//! @acp:layer model
//!
//! Prompts are stored as HTML fragments (`<br>` line breaks) so the same
//! table can back a web front end. They never affect field ids or exports.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::Topic;
use crate::error::QudError;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"));

/// Industry whose prompt set is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    #[default]
    Software,
    Biotech,
    Hardware,
    Fintech,
}

impl Industry {
    pub fn all() -> &'static [Industry] {
        &[
            Industry::Software,
            Industry::Biotech,
            Industry::Hardware,
            Industry::Fintech,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Software => "software",
            Industry::Biotech => "biotech",
            Industry::Hardware => "hardware",
            Industry::Fintech => "fintech",
        }
    }

    /// Raw prompt fragment for a topic
    pub fn prompt(&self, topic: Topic) -> &'static str {
        let table = match self {
            Industry::Software => &SOFTWARE,
            Industry::Biotech => &BIOTECH,
            Industry::Hardware => &HARDWARE,
            Industry::Fintech => &FINTECH,
        };
        table[topic as usize]
    }

    /// Prompt split into display lines
    pub fn prompt_lines(&self, topic: Topic) -> Vec<&'static str> {
        LINE_BREAK
            .split(self.prompt(topic))
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Industry {
    type Err = QudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "software" => Ok(Industry::Software),
            "biotech" => Ok(Industry::Biotech),
            "hardware" => Ok(Industry::Hardware),
            "fintech" => Ok(Industry::Fintech),
            _ => Err(QudError::Config(format!("unknown industry: {}", s))),
        }
    }
}

// Each table is indexed by `Topic as usize`.

const SOFTWARE: [&str; 16] = [
    "What is the global impact?<br>When you exit, what lasting impact have you made?",
    "What is the end goal of the company?<br>Will you go public, be acquired, license, etc.?",
    "Describe the relationship between players in the industry 2 degrees from where you expect to be?<br>How will they respond?",
    "Who are the competitors that<br>sell the same/similar products? What do the users do now?",
    "What are follow-on or complementary products your<br>company can offer? Where do you go from here?",
    "What size and type of company would<br>be needed to support the business model?",
    "How will this make money?<br>How will customers pay for it?",
    "Define and describe the target customers.<br>Who are you selling to? Describe the smallest cohesive group that is in the greatest need for your product. List 3 different groups of potential customers",
    "How is the product solving the problem?<br>What will the benefit to the user be?",
    "What problem is the pain causing?",
    "On a scale from death to mild inconvenience, how<br>would you categorize the impact of the pain?",
    "What is it? What are you selling?",
    "What are the design constraints and requirements?<br>What does a successful product need to be or do?",
    "What is the product description<br>that falls within the requirements?",
    "What components/parts are in the design solution?<br>What do they do?",
    "What platforms/systems do the components use?<br>How do you make the components work?",
];

const BIOTECH: [&str; 16] = [
    "What is the global health impact?<br>How many lives improved/saved? What diseases eliminated?",
    "IPO, acquisition by pharma, licensing deals, or platform company?<br>Consider typical 10-15 year timeline",
    "Map pharma companies, biotech peers, CROs, hospitals, insurers.<br>How will big pharma respond?",
    "Competing drugs/therapies, clinical trials, standard of care.<br>What treatments exist now?",
    "Indication expansion, combination therapies,<br>platform applications, geographic expansion",
    "R&D heavy organization, clinical operations,<br>regulatory expertise, commercial capabilities",
    "Drug sales, licensing, milestones, royalties.<br>Reimbursement strategy critical",
    "Patients (by indication), physicians,<br>payers/insurers, hospitals/clinics",
    "Mechanism of action, clinical benefits,<br>quality of life improvements, survival benefit",
    "Disease state, unmet medical need,<br>treatment gaps, quality of life issues",
    "Mortality/morbidity impact, patient population size,<br>current treatment satisfaction",
    "Drug/device/diagnostic, formulation,<br>delivery method, combination product?",
    "Efficacy targets, safety profile, delivery constraints,<br>stability, manufacturing feasibility",
    "Molecular design, formulation,<br>delivery system, dosing regimen",
    "CROs, CMOs, academic collaborations,<br>clinical sites, patient advocacy groups",
    "Proof of concept, preclinical data,<br>clinical endpoints, biomarkers, real-world evidence",
];

const HARDWARE: [&str; 16] = [
    "What is the global impact?<br>How does this change daily life at scale?",
    "What is the end goal?<br>Acquisition by tech giant, IPO, or become category leader?",
    "Map manufacturers, distributors, retailers, complementary products.<br>How will incumbents respond?",
    "Direct competitors, substitute products, DIY solutions.<br>What do consumers use now?",
    "Product line extensions, ecosystem products,<br>service offerings, subscription models",
    "Hardware engineering, supply chain expertise,<br>retail/marketing capabilities",
    "Hardware sales, recurring revenue (services/subscriptions),<br>ecosystem lock-in",
    "Early adopters, mass market segments,<br>demographic/psychographic profiles",
    "How the product solves the problem,<br>user experience benefits, lifestyle improvement",
    "What problem is the pain causing?<br>Inefficiency, inconvenience, or impossibility?",
    "Frequency of pain, cost of current solution,<br>time wasted, safety concerns",
    "Physical product description, key features,<br>form factor, price point",
    "Performance specs, certifications (FCC, CE, safety),<br>cost targets, user experience",
    "Industrial design, user experience,<br>aesthetic, ergonomics, packaging",
    "Ecosystem compatibility (Apple, Google, Amazon),<br>smart home, companion apps",
    "Manufacturing process, scale-up strategy,<br>quality control, unit economics",
];

const FINTECH: [&str; 16] = [
    "What is the global financial inclusion impact?<br>How many unbanked/underbanked served?",
    "Banking license acquisition, IPO,<br>acquisition by traditional bank, or new financial infrastructure?",
    "Map banks, payment processors, regulators, tech companies.<br>How will traditional finance respond?",
    "Fintechs, traditional banks, credit unions,<br>informal financial services. Include regulatory advantages",
    "Additional financial products,<br>geographic expansion, embedded finance opportunities",
    "Tech talent, compliance team,<br>risk management, customer support at scale",
    "Transaction fees, subscription, interchange,<br>interest/float, data monetization",
    "Underbanked segments, SMBs,<br>specific demographics, geographic markets",
    "How it improves financial access/efficiency,<br>user benefits, cost savings",
    "Financial exclusion, inefficiency,<br>high costs, poor user experience",
    "Financial impact, frequency of pain point,<br>current alternative costs",
    "Financial product/service, key features,<br>pricing, accessibility",
    "Regulatory requirements, security standards,<br>uptime, transaction speed, accuracy",
    "User interface, API design,<br>integration architecture, mobile/web experience",
    "Banking APIs, payment rails, identity verification,<br>credit bureaus, accounting software",
    "Tech stack, infrastructure, deployment,<br>scalability, disaster recovery",
];
