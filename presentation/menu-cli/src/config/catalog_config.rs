use std::env;

/// How new menu records get their ids
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    #[default]
    Sequential,
    Random,
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "random" => Ok(IdStrategy::Random),
            _ => Err(format!("Invalid id strategy: {}", s)),
        }
    }
}

/// Catalog wiring options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub seed_sample: bool,
    pub id_strategy: IdStrategy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_sample: true,
            id_strategy: IdStrategy::Sequential,
        }
    }
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - MENU_SEED_SAMPLE: Start with the house dishes (default: "true")
    /// - MENU_ID_STRATEGY: "sequential" or "random" (default: "sequential")
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("MENU_SEED_SAMPLE").ok().as_deref(),
            env::var("MENU_ID_STRATEGY").ok().as_deref(),
        )
    }

    /// Unset or unreadable values fall back to the defaults with a warning.
    pub fn from_values(seed_sample: Option<&str>, id_strategy: Option<&str>) -> Self {
        let defaults = Self::default();

        let seed_sample = match seed_sample.map(parse_flag) {
            None => defaults.seed_sample,
            Some(Some(flag)) => flag,
            Some(None) => {
                tracing::warn!(
                    "MENU_SEED_SAMPLE={:?} is not a boolean, using {}",
                    seed_sample.unwrap_or_default(),
                    defaults.seed_sample
                );
                defaults.seed_sample
            }
        };

        let id_strategy = match id_strategy.map(str::parse::<IdStrategy>) {
            None => defaults.id_strategy,
            Some(Ok(strategy)) => strategy,
            Some(Err(e)) => {
                tracing::warn!("{}, using {:?}", e, defaults.id_strategy);
                defaults.id_strategy
            }
        };

        Self {
            seed_sample,
            id_strategy,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
