use std::env;

/// Prompt and banner shown by the interactive front end
#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub restaurant_name: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "menu> ".to_string(),
            restaurant_name: "Christoff's Pallet".to_string(),
        }
    }
}

impl ReplConfig {
    /// Load prompt configuration from environment variables
    ///
    /// Environment variables:
    /// - MENU_PROMPT: Prompt printed before each command (default: "menu> ")
    /// - MENU_RESTAURANT_NAME: Name in the welcome banner (default: "Christoff's Pallet")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let prompt = env::var("MENU_PROMPT").unwrap_or(defaults.prompt);
        let restaurant_name =
            env::var("MENU_RESTAURANT_NAME").unwrap_or(defaults.restaurant_name);

        Self {
            prompt,
            restaurant_name,
        }
    }

    pub fn banner(&self) -> String {
        format!("Welcome to {}", self.restaurant_name)
    }
}
