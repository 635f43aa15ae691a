//! Typed view of a generated profile.
//!
//! `ProfileGenerator::generate_profile` returns raw text and never calls into
//! this module. Callers that need machine-readable output opt in with
//! [`parse_profile`], which validates the shape the prompt asks for.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Item cap the prompt sets for numbered-list sections.
pub const MAX_LIST_ITEMS: usize = 5;

/// The six section labels the profile prompt requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionLabel {
    #[serde(rename = "Profile Summary")]
    ProfileSummary,
    #[serde(rename = "Key Strengths")]
    KeyStrengths,
    #[serde(rename = "Potential Derailers")]
    PotentialDerailers,
    #[serde(rename = "Leadership Style")]
    LeadershipStyle,
    #[serde(rename = "Roles That Would Fit")]
    RolesThatWouldFit,
    #[serde(rename = "Roles That Would Not Fit")]
    RolesThatWouldNotFit,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 6] = [
        SectionLabel::ProfileSummary,
        SectionLabel::KeyStrengths,
        SectionLabel::PotentialDerailers,
        SectionLabel::LeadershipStyle,
        SectionLabel::RolesThatWouldFit,
        SectionLabel::RolesThatWouldNotFit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionLabel::ProfileSummary => "Profile Summary",
            SectionLabel::KeyStrengths => "Key Strengths",
            SectionLabel::PotentialDerailers => "Potential Derailers",
            SectionLabel::LeadershipStyle => "Leadership Style",
            SectionLabel::RolesThatWouldFit => "Roles That Would Fit",
            SectionLabel::RolesThatWouldNotFit => "Roles That Would Not Fit",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// Sections whose content is requested as a numbered list (max 5 items).
    pub fn is_enumerated(self) -> bool {
        !matches!(
            self,
            SectionLabel::ProfileSummary | SectionLabel::LeadershipStyle
        )
    }
}

/// One element of the JSON array the model is asked to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSection {
    pub section: String,
    pub content: String,
    /// Comma-separated provenance labels, e.g. "Hogan, 360".
    pub sources: String,
}

impl ProfileSection {
    pub fn label(&self) -> Option<SectionLabel> {
        SectionLabel::from_label(&self.section)
    }

    /// True when a numbered-list section has more items than the prompt allows.
    /// Unknown and paragraph sections never exceed the cap.
    pub fn exceeds_item_cap(&self) -> bool {
        self.label().is_some_and(SectionLabel::is_enumerated)
            && self.items().len() > MAX_LIST_ITEMS
    }

    /// Items of a numbered-list section with their `N.` prefixes removed.
    /// Paragraph sections come back as a single item.
    pub fn items(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(strip_list_number)
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum ProfileParseError {
    #[error("profile is not a JSON array of sections: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown profile section: {0}")]
    UnknownSection(String),
}

/// Parses raw model output into sections, rejecting labels outside the six
/// the prompt requests.
pub fn parse_profile(text: &str) -> Result<Vec<ProfileSection>, ProfileParseError> {
    let sections: Vec<ProfileSection> = serde_json::from_str(strip_json_fences(text))?;
    if let Some(unknown) = sections.iter().find(|s| s.label().is_none()) {
        return Err(ProfileParseError::UnknownSection(unknown.section.clone()));
    }
    Ok(sections)
}

fn strip_list_number(item: &str) -> &str {
    let digits = item.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return item;
    }
    item[digits..]
        .strip_prefix('.')
        .map(str::trim_start)
        .unwrap_or(item)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
