use business::application::menu::form::DishForm;
use business::application::menu::service::MenuService;
use business::domain::menu::errors::MenuError;
use business::domain::menu::model::MenuItem;
use business::domain::menu::use_cases::MenuUseCases;

use super::notification::Notification;
use super::parser::{FormAction, ReplCommand, parse_line, tokenize};
use super::render;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show before the next prompt (may be empty).
    Continue(String),
    Quit,
}

/// Prompt state: the menu service plus the pending dish form.
pub struct Session {
    service: MenuService,
    form: DishForm,
}

impl Session {
    pub fn new(service: MenuService) -> Self {
        Self {
            service,
            form: DishForm::default(),
        }
    }

    pub fn overview(&self) -> String {
        render::menu(&self.service.filter_by_course(None))
    }

    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => return Outcome::Continue(e.to_string()),
        };
        if tokens.is_empty() {
            return Outcome::Continue(String::new());
        }

        match parse_line(tokens) {
            Ok(command) => self.execute(command),
            Err(e) => Outcome::Continue(e.render().to_string().trim_end().to_string()),
        }
    }

    pub fn execute(&mut self, command: ReplCommand) -> Outcome {
        let text = match command {
            ReplCommand::List { course, json } => {
                let items = self.service.filter_by_course(course);
                if json {
                    render::items_json(&items)
                        .unwrap_or_else(|e| format!("Could not render the menu as JSON: {}", e))
                } else {
                    render::menu(&items)
                }
            }
            ReplCommand::Add {
                name,
                price,
                course,
                add_on,
            } => {
                let mut form = DishForm {
                    name: name.unwrap_or_default(),
                    price: price.unwrap_or_default(),
                    course,
                    add_on: add_on.unwrap_or_default(),
                };
                added(form.submit(&mut self.service))
            }
            ReplCommand::Form { action } => self.form_action(action),
            ReplCommand::Duplicate { id } => match self.service.duplicate_item(id) {
                Ok(copy) => format!("Duplicated as\n{}", render::item_line(&copy)),
                Err(e) => failure(&e),
            },
            ReplCommand::Remove { id } => removed(self.service.remove_item(id)),
            ReplCommand::Undo => removed(self.service.remove_last()),
            ReplCommand::Addon { name } => match self.service.register_add_on(&name) {
                Ok(add_on) => Notification::success(format!("Add-on {} registered.", add_on.name))
                    .to_string(),
                Err(e) => failure(&e),
            },
            ReplCommand::Addons => render::add_ons(self.service.catalog().add_ons()),
            ReplCommand::Averages => render::averages(&self.service.average_price_by_course()),
            ReplCommand::Quit => return Outcome::Quit,
        };

        Outcome::Continue(text)
    }

    fn form_action(&mut self, action: FormAction) -> String {
        match action {
            FormAction::Name { value } => self.form.name = value,
            FormAction::Price { value } => self.form.price = value,
            FormAction::Course { value } => self.form.course = Some(value),
            FormAction::AddOn { value } => self.form.add_on = value,
            FormAction::Show => return render::form(&self.form),
            FormAction::Submit => return added(self.form.submit(&mut self.service)),
            FormAction::Clear => self.form.clear(),
        }
        render::form(&self.form)
    }
}

fn added(result: Result<MenuItem, MenuError>) -> String {
    match result {
        Ok(item) => format!(
            "{}\n{}",
            Notification::success("Menu item added successfully!"),
            render::item_line(&item)
        ),
        Err(e) => failure(&e),
    }
}

fn removed(result: Result<MenuItem, MenuError>) -> String {
    match result {
        Ok(item) => {
            Notification::success(format!("{} removed from the menu.", item.name)).to_string()
        }
        Err(e) => failure(&e),
    }
}

fn failure(error: &MenuError) -> String {
    Notification::from(error).to_string()
}
