use uuid::Uuid;

use super::value_objects::Course;
use crate::domain::errors::ErrorKind;

/// Required input that was missing or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuField {
    Name,
    Price,
    Course,
    AddOnName,
}

impl std::fmt::Display for MenuField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuField::Name => write!(f, "menu_item.name_missing"),
            MenuField::Price => write!(f, "menu_item.price_missing"),
            MenuField::Course => write!(f, "menu_item.course_missing"),
            MenuField::AddOnName => write!(f, "add_on.name_missing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MenuError {
    #[error("{0}")]
    MissingField(MenuField),
    #[error("menu_item.invalid_price")]
    InvalidPrice(String),
    #[error("menu_item.duplicated")]
    Duplicated { name: String, course: Course },
    #[error("menu_item.not_found")]
    NotFound(Uuid),
    #[error("menu_item.empty")]
    Empty,
}

impl MenuError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MenuError::MissingField(_) | MenuError::InvalidPrice(_) => ErrorKind::Validation,
            MenuError::Duplicated { .. } => ErrorKind::Duplicate,
            MenuError::NotFound(_) => ErrorKind::NotFound,
            MenuError::Empty => ErrorKind::Empty,
        }
    }
}
