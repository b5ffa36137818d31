use business::domain::menu::errors::{MenuError, MenuField};

/// A user-facing alert: short title plus a sentence explaining what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success",
            message: message.into(),
        }
    }
}

impl From<&MenuError> for Notification {
    fn from(error: &MenuError) -> Self {
        let (title, message) = match error {
            MenuError::MissingField(MenuField::AddOnName) => {
                ("Missing info", "Please enter an add-on name.".to_string())
            }
            MenuError::MissingField(_) => (
                "Missing info",
                "Please enter dish name, price, and course.".to_string(),
            ),
            MenuError::InvalidPrice(raw) => (
                "Invalid Price",
                format!("\"{}\" is not a valid price. Enter an amount above zero.", raw),
            ),
            MenuError::Duplicated { name, course } => (
                "Duplicate dish",
                format!("{} is already on the menu as a {}.", name, course.label()),
            ),
            MenuError::NotFound(id) => ("Not found", format!("No dish with id {}.", id)),
            MenuError::Empty => ("Nothing to remove", "The menu is already empty.".to_string()),
        };

        Self { title, message }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::menu::value_objects::Course;
    use uuid::Uuid;

    #[test]
    fn should_name_conflicting_dish_on_duplicate() {
        let error = MenuError::Duplicated {
            name: "Caesar Salad".to_string(),
            course: Course::Starter,
        };

        let notification = Notification::from(&error);

        assert_eq!(
            notification.to_string(),
            "Duplicate dish: Caesar Salad is already on the menu as a Starter."
        );
    }

    #[test]
    fn should_map_each_error_to_a_title() {
        let cases = [
            (MenuError::MissingField(MenuField::Name), "Missing info"),
            (MenuError::InvalidPrice("0".to_string()), "Invalid Price"),
            (MenuError::NotFound(Uuid::nil()), "Not found"),
            (MenuError::Empty, "Nothing to remove"),
        ];

        for (error, title) in cases {
            assert_eq!(Notification::from(&error).title, title);
        }
    }
}
