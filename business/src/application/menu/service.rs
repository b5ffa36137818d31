use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::menu::catalog::MenuCatalog;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::{AddOn, MenuItem, NewMenuItemProps};
use crate::domain::menu::use_cases::MenuUseCases;
use crate::domain::menu::value_objects::{Course, Price};

/// Entry point used by front ends: the catalog plus logging around every call.
pub struct MenuService {
    catalog: MenuCatalog,
    logger: Arc<dyn Logger>,
}

impl MenuService {
    pub fn new(catalog: MenuCatalog, logger: Arc<dyn Logger>) -> Self {
        Self { catalog, logger }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn filter_by_course(&self, course: Option<Course>) -> Vec<&MenuItem> {
        let items: Vec<&MenuItem> = self.catalog.filter_by_course(course).collect();
        self.logger.debug(&format!(
            "Listing {} menu items (course: {})",
            items.len(),
            course.map_or_else(|| "all".to_string(), |c| c.to_string())
        ));
        items
    }

    pub fn average_price_by_course(&self) -> BTreeMap<Course, Price> {
        self.logger.debug("Computing average price per course");
        self.catalog.average_price_by_course()
    }
}

impl MenuUseCases for MenuService {
    fn add_item(&mut self, props: NewMenuItemProps) -> Result<MenuItem, MenuError> {
        self.logger
            .info(&format!("Creating menu item: {}", props.name.trim()));

        let item = self
            .catalog
            .add_item(props)
            .inspect_err(|e| self.logger.rejected("menu item", e))?;

        self.logger.info(&format!(
            "Menu item created: {} ({}, {})",
            item.id, item.course, item.price
        ));
        Ok(item)
    }

    fn duplicate_item(&mut self, id: Uuid) -> Result<MenuItem, MenuError> {
        self.logger.info(&format!("Duplicating menu item: {}", id));

        let copy = self
            .catalog
            .duplicate_item(id)
            .inspect_err(|e| self.logger.rejected("duplicate", e))?;

        self.logger
            .info(&format!("Menu item {} duplicated as {}", id, copy.id));
        Ok(copy)
    }

    fn remove_item(&mut self, id: Uuid) -> Result<MenuItem, MenuError> {
        self.logger.info(&format!("Deleting menu item: {}", id));

        let removed = self
            .catalog
            .remove_item(id)
            .inspect_err(|e| self.logger.rejected("delete", e))?;

        self.logger.info(&format!("Menu item deleted: {}", id));
        Ok(removed)
    }

    fn remove_last(&mut self) -> Result<MenuItem, MenuError> {
        self.logger.info("Deleting most recent menu item");

        let removed = self
            .catalog
            .remove_last()
            .inspect_err(|e| self.logger.rejected("delete last", e))?;

        self.logger
            .info(&format!("Menu item deleted: {}", removed.id));
        Ok(removed)
    }

    fn register_add_on(&mut self, name: &str) -> Result<AddOn, MenuError> {
        self.logger
            .info(&format!("Registering add-on: {}", name.trim()));

        let add_on = self
            .catalog
            .register_add_on(name)
            .inspect_err(|e| self.logger.rejected("add-on", e))?;

        self.logger
            .info(&format!("Add-on registered: {}", add_on.id));
        Ok(add_on)
    }
}
