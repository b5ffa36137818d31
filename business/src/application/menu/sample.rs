use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::NewMenuItemProps;
use crate::domain::menu::use_cases::MenuUseCases;
use crate::domain::menu::value_objects::Course;

pub const SAMPLE_ADD_ONS: [&str; 3] = ["No add-on", "Extra cheese (+R15)", "Side salad (+R25)"];

/// House dishes: name, price, course, add-on.
pub const SAMPLE_DISHES: [(&str, &str, Course, &str); 3] = [
    ("Grilled Chicken", "120", Course::Main, "Side salad (+R25)"),
    ("Beef Lasagna", "150", Course::Main, "Extra cheese (+R15)"),
    ("Caesar Salad", "80", Course::Starter, "No add-on"),
];

/// Fills an empty menu with the default add-ons and house dishes.
///
/// Goes through the regular validated path, so seeding twice fails with a duplicate.
pub fn seed_sample_menu(service: &mut dyn MenuUseCases) -> Result<(), MenuError> {
    for name in SAMPLE_ADD_ONS {
        service.register_add_on(name)?;
    }

    for (name, price, course, add_on) in SAMPLE_DISHES {
        service.add_item(NewMenuItemProps {
            name: name.to_string(),
            raw_price: price.to_string(),
            course: Some(course),
            add_on: add_on.to_string(),
        })?;
    }

    Ok(())
}
