/// Hash routes: `#/`, `#/create`, `#/project/{id}`, `#/contribute/{id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Create,
    Project(String),
    Contribute(String),
}

impl Route {
    /// Unknown paths resolve to `Home`.
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let mut parts = path.split('/').filter(|s| !s.is_empty());

        match (parts.next(), parts.next(), parts.next()) {
            (Some("create"), None, None) => Route::Create,
            (Some("project"), Some(id), None) => Route::Project(id.to_string()),
            (Some("contribute"), Some(id), None) => Route::Contribute(id.to_string()),
            _ => Route::Home,
        }
    }

    pub fn hash(&self) -> String {
        match self {
            Route::Home => "#/".into(),
            Route::Create => "#/create".into(),
            Route::Project(id) => format!("#/project/{id}"),
            Route::Contribute(id) => format!("#/contribute/{id}"),
        }
    }
}
