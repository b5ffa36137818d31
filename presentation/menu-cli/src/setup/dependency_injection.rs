use std::sync::Arc;

use anyhow::Context;
use logger::TracingLogger;

use business::application::menu::sample::seed_sample_menu;
use business::application::menu::service::MenuService;
use business::domain::menu::catalog::MenuCatalog;
use business::domain::menu::id_provider::{IdProvider, RandomIdProvider, SequentialIdProvider};

use crate::config::catalog_config::{CatalogConfig, IdStrategy};

pub struct DependencyContainer {
    pub menu_service: MenuService,
}

impl DependencyContainer {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        let ids: Box<dyn IdProvider> = match config.id_strategy {
            IdStrategy::Sequential => Box::new(SequentialIdProvider::new()),
            IdStrategy::Random => Box::new(RandomIdProvider),
        };

        let mut menu_service = MenuService::new(MenuCatalog::with_id_provider(ids), logger);

        if config.seed_sample {
            seed_sample_menu(&mut menu_service).context("failed to seed the sample menu")?;
        }

        Ok(Self { menu_service })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn should_seed_sample_menu_when_enabled() {
        let container = DependencyContainer::new(&CatalogConfig::default()).unwrap();

        let catalog = container.menu_service.catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.add_ons()[0].id, Uuid::from_u128(1));
    }

    #[test]
    fn should_start_empty_when_seeding_disabled() {
        let config = CatalogConfig {
            seed_sample: false,
            id_strategy: IdStrategy::Random,
        };

        let container = DependencyContainer::new(&config).unwrap();

        assert!(container.menu_service.catalog().is_empty());
    }
}
