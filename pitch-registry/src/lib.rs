mod links;

pub use links::{clean_links, split_links};

use serde::{Deserialize, Serialize};

pub const DRAFT_SCHEMA: &str = "pitch.v1";

const NAME_CAP: usize = 80;
const PURPOSE_CAP: usize = 200;
const CONTACT_CAP: usize = 200;
const LINKS_CAP: usize = 2000;
const LONG_TEXT_CAP: usize = 4000;

/// Pitch deck as submitted by the create form, before it reaches the store.
///
/// Missing text fields decode as empty so [`validate_draft`] names them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PitchDraftV1 {
    #[serde(default = "default_schema")]
    pub schema: String,
    pub name: String,
    pub category: String,
    pub purpose: String,
    pub problem: String,
    pub solution: String,
    pub target_market: String,
    pub business_model: String,
    pub team: String,
    pub contact: String,
    pub links: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data_url: Option<String>,
}

fn default_schema() -> String {
    DRAFT_SCHEMA.into()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("unsupported schema '{0}'")]
    UnsupportedSchema(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("category must be one of: {}", .allowed.join(", "))]
    UnknownCategory { category: String, allowed: Vec<String> },
}

/// Rules applied on top of the required-field checks.
#[derive(Clone, Debug, Default)]
pub struct DraftRules {
    /// `None` accepts any category.
    pub allowed_categories: Option<Vec<String>>,
}

impl DraftRules {
    pub fn from_category_list(raw: &str) -> Self {
        let mut allowed: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ToString::to_string)
            .collect();
        allowed.sort();
        allowed.dedup();
        Self {
            allowed_categories: if allowed.is_empty() { None } else { Some(allowed) },
        }
    }
}

/// Normalizes every free-text field of the draft.
///
/// Tags are stripped, whitespace runs collapse to one space and each field
/// is capped. `links` keeps its line breaks so it still splits for display.
pub fn clean_draft(draft: PitchDraftV1) -> PitchDraftV1 {
    PitchDraftV1 {
        schema: draft.schema.trim().to_string(),
        name: clean_text(&draft.name, NAME_CAP),
        category: clean_text(&draft.category, NAME_CAP),
        purpose: clean_text(&draft.purpose, PURPOSE_CAP),
        problem: clean_text(&draft.problem, LONG_TEXT_CAP),
        solution: clean_text(&draft.solution, LONG_TEXT_CAP),
        target_market: clean_text(&draft.target_market, LONG_TEXT_CAP),
        business_model: clean_text(&draft.business_model, LONG_TEXT_CAP),
        team: clean_text(&draft.team, LONG_TEXT_CAP),
        contact: clean_text(&draft.contact, CONTACT_CAP),
        links: truncate_chars(strip_tags(&draft.links).trim(), LINKS_CAP),
        logo_data_url: draft.logo_data_url.filter(|v| !v.trim().is_empty()),
        image_data_url: draft.image_data_url.filter(|v| !v.trim().is_empty()),
    }
}

pub fn validate_draft(draft: &PitchDraftV1, rules: &DraftRules) -> Result<(), DraftError> {
    if draft.schema != DRAFT_SCHEMA {
        return Err(DraftError::UnsupportedSchema(draft.schema.clone()));
    }

    let required = [
        ("name", &draft.name),
        ("category", &draft.category),
        ("purpose", &draft.purpose),
        ("problem", &draft.problem),
        ("solution", &draft.solution),
        ("targetMarket", &draft.target_market),
        ("businessModel", &draft.business_model),
        ("team", &draft.team),
        ("contact", &draft.contact),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(DraftError::MissingField(field));
        }
    }

    if let Some(allowed) = &rules.allowed_categories {
        if !allowed.iter().any(|c| c == &draft.category) {
            return Err(DraftError::UnknownCategory {
                category: draft.category.clone(),
                allowed: allowed.clone(),
            });
        }
    }
    Ok(())
}

/// Trims, strips markup, collapses whitespace and caps at `cap` characters.
pub fn clean_text(raw: &str, cap: usize) -> String {
    let stripped = strip_tags(raw.trim());
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, cap)
}

fn truncate_chars(s: &str, cap: usize) -> String {
    s.chars().take(cap).collect()
}

fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let opens_tag = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');

        match after.find('>') {
            Some(end) if opens_tag => rest = &after[end + 1..],
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
