use super::{catalog_config::CatalogConfig, repl_config::ReplConfig};

pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub repl: ReplConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            catalog: CatalogConfig::from_env(),
            repl: ReplConfig::from_env(),
        }
    }
}
