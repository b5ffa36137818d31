use std::collections::BTreeMap;

use business::application::menu::form::DishForm;
use business::domain::menu::model::{AddOn, MenuItem};
use business::domain::menu::value_objects::{Course, Price};

pub fn menu(items: &[&MenuItem]) -> String {
    if items.is_empty() {
        return "No dishes added yet.".to_string();
    }

    let mut out = String::from("Our Menu");
    for item in items {
        out.push('\n');
        out.push_str(&item_line(item));
    }
    out
}

pub fn item_line(item: &MenuItem) -> String {
    let mut line = format!(
        "  {}  {:<24} {:<9} {:>10}",
        item.id,
        item.name,
        item.course.label(),
        item.price.to_string()
    );
    if !item.add_on.is_empty() {
        line.push_str("  + ");
        line.push_str(&item.add_on);
    }
    line
}

pub fn items_json(items: &[&MenuItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}

pub fn averages(averages: &BTreeMap<Course, Price>) -> String {
    let mut out = String::from("Average price per course");
    for (course, price) in averages {
        out.push_str(&format!("\n  {:<9} {:>10}", course.label(), price.to_string()));
    }
    out
}

pub fn add_ons(add_ons: &[AddOn]) -> String {
    if add_ons.is_empty() {
        return "No add-ons registered yet.".to_string();
    }

    let mut out = String::from("Add-ons");
    for add_on in add_ons {
        out.push_str(&format!("\n  {}  {}", add_on.id, add_on.name));
    }
    out
}

pub fn form(form: &DishForm) -> String {
    format!(
        "Dish form\n  name:   {}\n  price:  {}\n  course: {}\n  add-on: {}",
        form.name,
        form.price,
        form.course.map_or("-", |course| course.label()),
        form.add_on
    )
}
