use chrono::{DateTime, Utc};
use pitch_registry::PitchDraftV1;
use serde::{Deserialize, Serialize};

/// One published pitch deck. Immutable once stored.
///
/// Reads are lenient: a record missing fields decodes with empty text and an
/// epoch `createdAt` instead of failing the whole collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub category: String,
    pub purpose: String,
    pub problem: String,
    pub solution: String,
    pub target_market: String,
    pub business_model: String,
    pub team: String,
    pub contact: String,
    /// Comma or newline separated.
    pub links: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload accepted by [`crate::ProjectStore::add`]: a project without `id`
/// and `createdAt`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub category: String,
    pub purpose: String,
    pub problem: String,
    pub solution: String,
    pub target_market: String,
    pub business_model: String,
    pub team: String,
    pub contact: String,
    #[serde(default)]
    pub links: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_data_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data_url: Option<String>,
}

impl Project {
    pub fn from_new(id: String, created_at: DateTime<Utc>, p: NewProject) -> Self {
        Self {
            id,
            name: p.name,
            category: p.category,
            purpose: p.purpose,
            problem: p.problem,
            solution: p.solution,
            target_market: p.target_market,
            business_model: p.business_model,
            team: p.team,
            contact: p.contact,
            links: p.links,
            logo_data_url: p.logo_data_url,
            image_data_url: p.image_data_url,
            created_at,
        }
    }

    /// Links split for display, unvalidated.
    pub fn link_list(&self) -> Vec<String> {
        pitch_registry::split_links(&self.links)
    }
}

impl From<PitchDraftV1> for NewProject {
    fn from(d: PitchDraftV1) -> Self {
        Self {
            name: d.name,
            category: d.category,
            purpose: d.purpose,
            problem: d.problem,
            solution: d.solution,
            target_market: d.target_market,
            business_model: d.business_model,
            team: d.team,
            contact: d.contact,
            links: d.links,
            logo_data_url: d.logo_data_url,
            image_data_url: d.image_data_url,
        }
    }
}

pub fn encode_collection(projects: &[Project]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(projects)
}

pub fn decode_collection(bytes: &[u8]) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_camel_case_and_omits_absent_images() {
        let p = Project::from_new(
            "abc".into(),
            "2024-05-01T12:00:00Z".parse().expect("ts"),
            NewProject {
                name: "Test".into(),
                target_market: "devs".into(),
                business_model: "fees".into(),
                ..NewProject::default()
            },
        );

        let v = serde_json::to_value(&p).expect("json");
        assert_eq!(v["targetMarket"], "devs");
        assert_eq!(v["businessModel"], "fees");
        assert_eq!(v["createdAt"], "2024-05-01T12:00:00Z");
        assert!(v.get("logoDataUrl").is_none());
        assert!(v.get("imageDataUrl").is_none());
    }

    #[test]
    fn decodes_browser_written_records() {
        let raw = br#"[{
            "id": "V1StGXR8_Z5jdHi6B-myT",
            "name": "ChainLearn", "category": "EdTech",
            "purpose": "p", "problem": "p", "solution": "s",
            "targetMarket": "t", "businessModel": "b", "team": "t",
            "contact": "team@chainlearn.io", "links": "https://chainlearn.io",
            "logoDataUrl": "data:image/svg+xml;utf8,x",
            "createdAt": "2024-05-01T12:00:00.000Z"
        }]"#;

        let projects = decode_collection(raw).expect("decode");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "V1StGXR8_Z5jdHi6B-myT");
        assert_eq!(projects[0].logo_data_url.as_deref(), Some("data:image/svg+xml;utf8,x"));
        assert_eq!(projects[0].image_data_url, None);
    }

    #[test]
    fn decode_keeps_records_with_missing_fields() {
        let raw = br#"[
            {"id": "full", "name": "A", "team": "t", "createdAt": "2024-05-01T12:00:00Z"},
            {"id": "partial", "name": "B"}
        ]"#;

        let projects = decode_collection(raw).expect("decode");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].team, "t");
        assert_eq!(projects[1].id, "partial");
        assert_eq!(projects[1].team, "");
        assert_eq!(projects[1].created_at, DateTime::<Utc>::default());
    }

    #[test]
    fn decode_rejects_non_array_payloads() {
        assert!(decode_collection(b"null").is_err());
        assert!(decode_collection(b"{\"id\":1}").is_err());
        assert!(decode_collection(b"not json").is_err());
    }

    #[test]
    fn link_list_splits_for_display() {
        let p = Project::from_new(
            "id".into(),
            Utc::now(),
            NewProject {
                links: "https://a.dev,\nhttps://b.dev".into(),
                ..NewProject::default()
            },
        );
        assert_eq!(p.link_list(), vec!["https://a.dev", "https://b.dev"]);
    }
}
