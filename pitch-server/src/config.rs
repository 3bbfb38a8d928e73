use pitch_registry::DraftRules;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    File,
    Memory,
}

impl Backend {
    fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_lowercase().as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "file" => Ok(Backend::File),
            "memory" => Ok(Backend::Memory),
            other => Err(format!("unknown PITCH_STORE_BACKEND '{other}'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind: String,
    pub store_path: PathBuf,
    pub backend: Backend,
    pub rules: DraftRules,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let backend = lookup("PITCH_STORE_BACKEND")
            .map(|v| Backend::parse(&v))
            .transpose()?
            .unwrap_or(Backend::Sqlite);

        let default_path = match backend {
            Backend::File => "projects.json",
            _ => "projects.db",
        };

        Ok(Self {
            bind: lookup("PITCH_BIND").unwrap_or_else(|| "0.0.0.0:8080".into()),
            store_path: lookup("PITCH_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default_path)),
            backend,
            rules: lookup("PITCH_ALLOWED_CATEGORIES")
                .map(|raw| DraftRules::from_category_list(&raw))
                .unwrap_or_default(),
        })
    }
}
