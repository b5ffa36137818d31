use std::io::{self, BufRead, Write};

use crate::{
    commands::session::{Outcome, Session},
    config::repl_config::ReplConfig,
    setup::dependency_injection::DependencyContainer,
};

pub struct Repl;

impl Repl {
    pub fn run(config: ReplConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Self::run_with(&config, container, stdin.lock(), stdout.lock())
    }

    /// Reads commands until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(
        config: &ReplConfig,
        container: DependencyContainer,
        mut input: R,
        mut output: W,
    ) -> anyhow::Result<()> {
        let mut session = Session::new(container.menu_service);

        writeln!(output, "{}", config.banner())?;
        writeln!(output, "{}", session.overview())?;
        writeln!(output, "Type `help` for the list of commands.")?;

        let mut line = String::new();
        loop {
            write!(output, "{}", config.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            match session.handle_line(&line) {
                Outcome::Continue(text) if text.is_empty() => {}
                Outcome::Continue(text) => writeln!(output, "{}", text)?,
                Outcome::Quit => break,
            }
        }

        tracing::info!(target: "menu", "Session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::config::catalog_config::CatalogConfig;

    fn run(script: &str) -> String {
        let container = DependencyContainer::new(&CatalogConfig::default()).unwrap();
        let config = ReplConfig {
            prompt: "> ".to_string(),
            ..ReplConfig::default()
        };
        let mut output = Vec::new();

        Repl::run_with(&config, container, Cursor::new(script), &mut output).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn should_greet_and_show_seeded_menu() {
        let out = run("quit\n");

        assert!(out.starts_with("Welcome to Christoff's Pallet\nOur Menu\n"));
        assert!(out.contains("Beef Lasagna"));
    }

    #[test]
    fn should_run_commands_until_quit() {
        let out = run("add Rooibos 25 beverage\n\nlist --course beverage\nquit\nlist\n");

        assert!(out.contains("Success: Menu item added successfully!"));
        assert!(out.contains("R25.00"));
        assert_eq!(out.matches("> ").count(), 4);
    }

    #[test]
    fn should_stop_at_end_of_input() {
        let out = run("undo\n");

        assert!(out.contains("Success: Caesar Salad removed from the menu."));
        assert!(out.ends_with("> \n"));
    }
}
