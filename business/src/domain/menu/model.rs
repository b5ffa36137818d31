use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{MenuError, MenuField};
use super::value_objects::{Course, Price};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    /// Add-on text captured when the item was created.
    pub add_on: String,
    pub price: Price,
    pub course: Course,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: Uuid,
    pub name: String,
}

/// Raw input for a new menu item, as typed into the dish form.
#[derive(Debug, Clone, Default)]
pub struct NewMenuItemProps {
    pub name: String,
    pub raw_price: String,
    pub course: Option<Course>,
    pub add_on: String,
}

/// Validated and normalized item fields, waiting for an id.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemDraft {
    pub name: String,
    pub add_on: String,
    pub price: Price,
    pub course: Course,
}

/// Items with equal keys are considered the same dish.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    name: String,
    course: Course,
}

impl DedupKey {
    pub fn new(name: &str, course: Course) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            course,
        }
    }
}

impl MenuItemDraft {
    pub fn validate(props: NewMenuItemProps) -> Result<Self, MenuError> {
        let name = props.name.trim();
        if name.is_empty() {
            return Err(MenuError::MissingField(MenuField::Name));
        }
        if props.raw_price.trim().is_empty() {
            return Err(MenuError::MissingField(MenuField::Price));
        }
        let course = props
            .course
            .ok_or(MenuError::MissingField(MenuField::Course))?;
        let price = Price::parse_input(&props.raw_price)?;

        Ok(Self {
            name: name.to_string(),
            add_on: props.add_on.trim().to_string(),
            price,
            course,
        })
    }

    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::new(&self.name, self.course)
    }

    pub fn into_item(self, id: Uuid) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            add_on: self.add_on,
            price: self.price,
            course: self.course,
        }
    }
}

impl MenuItem {
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::new(&self.name, self.course)
    }

    /// Copy of this item under a new id.
    pub fn duplicate_as(&self, id: Uuid) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

impl AddOn {
    /// Trims an add-on name, rejecting blank ones.
    pub fn normalize_name(name: &str) -> Result<String, MenuError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MenuError::MissingField(MenuField::AddOnName));
        }
        Ok(name.to_string())
    }
}
