use std::collections::BTreeMap;

use uuid::Uuid;

use super::errors::MenuError;
use super::id_provider::{IdProvider, SequentialIdProvider};
use super::model::{AddOn, MenuItem, MenuItemDraft, NewMenuItemProps};
use super::value_objects::{Course, Price};

/// In-memory menu state: dishes and add-ons, both kept in insertion order.
///
/// Every operation either succeeds or returns a [`MenuError`] without touching
/// the catalog.
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    add_ons: Vec<AddOn>,
    ids: Box<dyn IdProvider>,
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuCatalog {
    /// Empty catalog numbering ids sequentially.
    pub fn new() -> Self {
        Self::with_id_provider(Box::new(SequentialIdProvider::new()))
    }

    pub fn with_id_provider(ids: Box<dyn IdProvider>) -> Self {
        Self {
            items: Vec::new(),
            add_ons: Vec::new(),
            ids,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn get(&self, id: Uuid) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validates the input, rejects a dish already on the menu under the same
    /// name and course, then appends it.
    pub fn add_item(&mut self, props: NewMenuItemProps) -> Result<MenuItem, MenuError> {
        let draft = MenuItemDraft::validate(props)?;

        let key = draft.dedup_key();
        if let Some(existing) = self.items.iter().find(|item| item.dedup_key() == key) {
            return Err(MenuError::Duplicated {
                name: existing.name.clone(),
                course: existing.course,
            });
        }

        let item = draft.into_item(self.ids.next_id());
        self.items.push(item.clone());
        Ok(item)
    }

    /// Appends a copy of an existing item under a fresh id.
    ///
    /// Skips the duplicate check: cloning a dish is an explicit request.
    pub fn duplicate_item(&mut self, id: Uuid) -> Result<MenuItem, MenuError> {
        let source = self.get(id).cloned().ok_or(MenuError::NotFound(id))?;
        let copy = source.duplicate_as(self.ids.next_id());
        self.items.push(copy.clone());
        Ok(copy)
    }

    pub fn remove_item(&mut self, id: Uuid) -> Result<MenuItem, MenuError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(MenuError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Removes the most recently appended item.
    pub fn remove_last(&mut self) -> Result<MenuItem, MenuError> {
        self.items.pop().ok_or(MenuError::Empty)
    }

    pub fn register_add_on(&mut self, name: &str) -> Result<AddOn, MenuError> {
        let name = AddOn::normalize_name(name)?;
        let add_on = AddOn {
            id: self.ids.next_id(),
            name,
        };
        self.add_ons.push(add_on.clone());
        Ok(add_on)
    }

    /// Items in the given course, or every item when `course` is `None`.
    pub fn filter_by_course(
        &self,
        course: Option<Course>,
    ) -> impl Iterator<Item = &MenuItem> + Clone {
        self.items
            .iter()
            .filter(move |item| course.is_none_or(|course| item.course == course))
    }

    pub fn count_by_course(&self, course: Course) -> usize {
        self.filter_by_course(Some(course)).count()
    }

    /// Mean price per course. Every course is present; empty ones average to zero.
    pub fn average_price_by_course(&self) -> BTreeMap<Course, Price> {
        Course::ALL
            .into_iter()
            .map(|course| {
                let prices = self.filter_by_course(Some(course)).map(|item| item.price);
                (course, Price::average(prices))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::errors::MenuField;

    fn props(name: &str, price: &str, course: Course) -> NewMenuItemProps {
        NewMenuItemProps {
            name: name.to_string(),
            raw_price: price.to_string(),
            course: Some(course),
            add_on: "No add-on".to_string(),
        }
    }

    fn names<'a>(items: impl Iterator<Item = &'a MenuItem>) -> Vec<&'a str> {
        items.map(|item| item.name.as_str()).collect()
    }

    fn sample_catalog() -> MenuCatalog {
        let mut catalog = MenuCatalog::new();
        catalog.add_item(props("Steak", "100", Course::Main)).unwrap();
        catalog.add_item(props("Malva Pudding", "50", Course::Dessert)).unwrap();
        catalog.add_item(props("Bobotie", "200", Course::Main)).unwrap();
        catalog
    }

    #[test]
    fn should_append_item_with_normalized_price() {
        let mut catalog = MenuCatalog::new();

        let item = catalog
            .add_item(props("Grilled Chicken", "120", Course::Main))
            .unwrap();

        assert_eq!(item.id, Uuid::from_u128(1));
        assert_eq!(item.price.to_string(), "R120.00");
        assert_eq!(catalog.items(), &[item]);
    }

    #[test]
    fn should_reject_duplicate_name_in_same_course() {
        let mut catalog = MenuCatalog::new();
        catalog
            .add_item(props("Caesar Salad", "80", Course::Starter))
            .unwrap();

        let result = catalog.add_item(props("  caesar SALAD ", "95", Course::Starter));

        assert_eq!(
            result,
            Err(MenuError::Duplicated {
                name: "Caesar Salad".to_string(),
                course: Course::Starter,
            })
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn should_allow_same_name_in_different_course() {
        let mut catalog = MenuCatalog::new();
        catalog
            .add_item(props("Caesar Salad", "80", Course::Starter))
            .unwrap();

        let result = catalog.add_item(props("Caesar Salad", "140", Course::Main));

        assert!(result.is_ok());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn should_leave_catalog_unchanged_on_validation_error() {
        let mut catalog = sample_catalog();
        let before = catalog.items().to_vec();

        let missing = catalog.add_item(NewMenuItemProps {
            course: None,
            ..props("Soup", "40", Course::Starter)
        });
        let invalid = catalog.add_item(props("Soup", "-40", Course::Starter));

        assert_eq!(missing, Err(MenuError::MissingField(MenuField::Course)));
        assert!(matches!(invalid, Err(MenuError::InvalidPrice(_))));
        assert_eq!(catalog.items(), before.as_slice());
    }

    #[test]
    fn should_not_consume_ids_on_rejected_add() {
        let mut catalog = MenuCatalog::new();
        let _ = catalog.add_item(props("", "10", Course::Main));

        let item = catalog.add_item(props("Pap", "10", Course::Main)).unwrap();

        assert_eq!(item.id, Uuid::from_u128(1));
    }

    #[test]
    fn should_duplicate_item_bypassing_uniqueness() {
        let mut catalog = sample_catalog();
        let source = catalog.items()[0].clone();

        let copy = catalog.duplicate_item(source.id).unwrap();

        assert_eq!(catalog.len(), 4);
        assert_ne!(copy.id, source.id);
        assert_eq!(copy, MenuItem { id: copy.id, ..source });
        assert_eq!(catalog.items().last(), Some(&copy));
    }

    #[test]
    fn should_fail_duplicating_unknown_item() {
        let mut catalog = sample_catalog();
        let missing = Uuid::from_u128(999);

        assert_eq!(
            catalog.duplicate_item(missing),
            Err(MenuError::NotFound(missing))
        );
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn should_remove_item_preserving_order() {
        let mut catalog = sample_catalog();
        let middle = catalog.items()[1].id;

        let removed = catalog.remove_item(middle).unwrap();

        assert_eq!(removed.name, "Malva Pudding");
        assert_eq!(names(catalog.items().iter()), vec!["Steak", "Bobotie"]);
        assert_eq!(
            catalog.remove_item(middle),
            Err(MenuError::NotFound(middle))
        );
    }

    #[test]
    fn should_remove_last_until_empty() {
        let mut catalog = sample_catalog();

        catalog.remove_last().unwrap();
        assert_eq!(names(catalog.items().iter()), vec!["Steak", "Malva Pudding"]);

        catalog.remove_last().unwrap();
        catalog.remove_last().unwrap();
        assert_eq!(catalog.remove_last(), Err(MenuError::Empty));
        assert!(catalog.is_empty());
    }

    #[test]
    fn should_never_reuse_ids_after_removal() {
        let mut catalog = sample_catalog();
        catalog.remove_last().unwrap();

        let item = catalog.add_item(props("Bunny Chow", "90", Course::Main)).unwrap();

        assert_eq!(item.id, Uuid::from_u128(4));
    }

    #[test]
    fn should_register_add_ons_in_order() {
        let mut catalog = MenuCatalog::new();

        let cheese = catalog.register_add_on(" Extra cheese (+R15) ").unwrap();
        let salad = catalog.register_add_on("Side salad (+R25)").unwrap();

        assert_eq!(cheese.name, "Extra cheese (+R15)");
        assert_ne!(cheese.id, salad.id);
        assert_eq!(catalog.add_ons(), &[cheese, salad]);
        assert_eq!(
            catalog.register_add_on(""),
            Err(MenuError::MissingField(MenuField::AddOnName))
        );
        assert_eq!(catalog.add_ons().len(), 2);
    }

    #[test]
    fn should_filter_by_course_keeping_order() {
        let catalog = sample_catalog();

        let mains = catalog.filter_by_course(Some(Course::Main));

        assert_eq!(names(mains.clone()), vec!["Steak", "Bobotie"]);
        assert_eq!(mains.count(), 2);
        assert_eq!(
            names(catalog.filter_by_course(None)),
            vec!["Steak", "Malva Pudding", "Bobotie"]
        );
        assert_eq!(catalog.filter_by_course(Some(Course::Beverage)).count(), 0);
    }

    #[test]
    fn should_average_prices_per_course() {
        let catalog = sample_catalog();

        let averages = catalog.average_price_by_course();

        assert_eq!(averages[&Course::Main].to_string(), "R150.00");
        assert_eq!(averages[&Course::Dessert].to_string(), "R50.00");
        assert_eq!(averages[&Course::Starter].to_string(), "R0.00");
        assert_eq!(averages[&Course::Beverage].to_string(), "R0.00");
        assert_eq!(averages.keys().copied().collect::<Vec<_>>(), Course::ALL.to_vec());
    }

    #[test]
    fn should_count_items_by_course() {
        let catalog = sample_catalog();

        assert_eq!(catalog.count_by_course(Course::Main), 2);
        assert_eq!(catalog.count_by_course(Course::Starter), 0);
    }
}
