//! # ESG Screening Options
//!
//! The shared Environmental, Social and Governance questionnaire content.
//! Unlike the rest of the pack this is not keyed by jurisdiction: whether
//! it is shown, and whether it is mandatory, comes from each
//! jurisdiction's [`EsgFlags`](crate::EsgFlags).

use serde::{Deserialize, Serialize};

use evelyn_core::OptionEntry;

use crate::config::Band;

/// ESG questionnaire content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsgConfig {
    pub priority_areas: Vec<EsgPriorityArea>,
    pub exclusions: Vec<EsgExclusion>,
    /// Minimum sustainable allocation choices, lowest first.
    pub allocation_options: Vec<Band>,
}

/// One of the E, S or G pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsgPriorityArea {
    pub id: String,
    pub label: String,
    pub description: String,
}

/// A sector the client may ask to exclude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsgExclusion {
    pub id: String,
    pub label: String,
}

impl OptionEntry for EsgPriorityArea {
    fn option_value(&self) -> &str {
        &self.id
    }

    fn option_label(&self) -> &str {
        &self.label
    }
}

impl OptionEntry for EsgExclusion {
    fn option_value(&self) -> &str {
        &self.id
    }

    fn option_label(&self) -> &str {
        &self.label
    }
}

impl Default for EsgConfig {
    fn default() -> Self {
        esg_config()
    }
}

fn priority_area(id: &str, label: &str, description: &str) -> EsgPriorityArea {
    EsgPriorityArea {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}

fn exclusion(id: &str, label: &str) -> EsgExclusion {
    EsgExclusion {
        id: id.to_string(),
        label: label.to_string(),
    }
}

/// The built-in ESG questionnaire content.
pub fn esg_config() -> EsgConfig {
    EsgConfig {
        priority_areas: vec![
            priority_area(
                "environmental",
                "Environmental",
                "Climate change, renewable energy, pollution reduction, biodiversity",
            ),
            priority_area(
                "social",
                "Social",
                "Human rights, labour standards, community impact, diversity & inclusion",
            ),
            priority_area(
                "governance",
                "Governance",
                "Board diversity, executive pay, business ethics, transparency",
            ),
        ],
        exclusions: vec![
            exclusion("tobacco", "Tobacco"),
            exclusion("weapons", "Weapons/Defence"),
            exclusion("gambling", "Gambling"),
            exclusion("fossil_fuels", "Fossil Fuels"),
            exclusion("adult", "Adult Entertainment"),
            exclusion("alcohol", "Alcohol"),
        ],
        allocation_options: vec![
            Band::new("none", "No minimum requirement"),
            Band::new("25", "At least 25%"),
            Band::new("50", "At least 50%"),
            Band::new("75", "At least 75%"),
            Band::new("100", "100% sustainable investments only"),
        ],
    }
}
