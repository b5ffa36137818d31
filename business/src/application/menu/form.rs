use crate::domain::errors::ErrorKind;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::{MenuItem, NewMenuItemProps};
use crate::domain::menu::use_cases::MenuUseCases;
use crate::domain::menu::value_objects::Course;

/// Pending input of the "add dish" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishForm {
    pub name: String,
    pub price: String,
    pub course: Option<Course>,
    pub add_on: String,
}

/// What the form does with its fields once a submission has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormReaction {
    /// Dish saved: start over with a blank form.
    ClearAll,
    /// Dish already on the menu: drop name and price, keep course and add-on.
    ClearNameAndPrice,
    /// Leave the input so the user can fix it.
    Keep,
}

impl FormReaction {
    pub fn for_result(result: &Result<MenuItem, MenuError>) -> Self {
        match result {
            Ok(_) => FormReaction::ClearAll,
            Err(e) if e.kind() == ErrorKind::Duplicate => FormReaction::ClearNameAndPrice,
            Err(_) => FormReaction::Keep,
        }
    }
}

impl DishForm {
    pub fn to_props(&self) -> NewMenuItemProps {
        NewMenuItemProps {
            name: self.name.clone(),
            raw_price: self.price.clone(),
            course: self.course,
            add_on: self.add_on.clone(),
        }
    }

    pub fn apply(&mut self, reaction: FormReaction) {
        match reaction {
            FormReaction::ClearAll => self.clear(),
            FormReaction::ClearNameAndPrice => {
                self.name.clear();
                self.price.clear();
            }
            FormReaction::Keep => {}
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Sends the pending input to the menu and resets fields according to the outcome.
    pub fn submit(&mut self, menu: &mut dyn MenuUseCases) -> Result<MenuItem, MenuError> {
        let result = menu.add_item(self.to_props());
        self.apply(FormReaction::for_result(&result));
        result
    }
}
