use crate::project::Project;
use crate::slot::StorageSlot;
use crate::store::ProjectStore;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const MAX_PAGE_SIZE: usize = 50;

/// Search and paging over the list, as the browse page and HTTP list use it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectQuery {
    /// Case-insensitive substring over name, purpose, problem, solution and team.
    pub q: Option<String>,
    /// Exact match.
    pub category: Option<String>,
    /// 1-based.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectPage {
    pub items: Vec<Project>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl ProjectQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn matches(&self, p: &Project) -> bool {
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if p.category != category {
                return false;
            }
        }

        let needle = self
            .q
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .unwrap_or_default();
        if needle.is_empty() {
            return true;
        }

        [&p.name, &p.purpose, &p.problem, &p.solution, &p.team]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl<S: StorageSlot> ProjectStore<S> {
    /// Filters, then pages, keeping newest-first order.
    pub fn query(&self, query: &ProjectQuery) -> ProjectPage {
        let page = query.page();
        let page_size = query.page_size();

        let matching: Vec<&Project> = self.list().iter().filter(|p| query.matches(p)).collect();
        let items = matching
            .iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .map(|p| (*p).clone())
            .collect();

        ProjectPage {
            items,
            total: matching.len(),
            page,
            page_size,
        }
    }
}
