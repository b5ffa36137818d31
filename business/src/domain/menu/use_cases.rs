use uuid::Uuid;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::{AddOn, MenuItem, NewMenuItemProps};

/// Menu mutations available to front ends.
pub trait MenuUseCases {
    fn add_item(&mut self, props: NewMenuItemProps) -> Result<MenuItem, MenuError>;

    /// Copies every field of an existing dish under a fresh id.
    fn duplicate_item(&mut self, id: Uuid) -> Result<MenuItem, MenuError>;

    fn remove_item(&mut self, id: Uuid) -> Result<MenuItem, MenuError>;

    /// Undo for the most recently added dish.
    fn remove_last(&mut self) -> Result<MenuItem, MenuError>;

    fn register_add_on(&mut self, name: &str) -> Result<AddOn, MenuError>;
}
