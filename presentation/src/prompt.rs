use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use shared::confirmation::ask_confirmation;
use shared::types::Result;
use std::io::stdout;

/// Every terminal interaction the roster screen performs. Swapping the
/// implementation lets the screen run without a terminal.
pub trait Prompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;
    fn input(&mut self, prompt: &str, initial: &str) -> Result<String>;
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
    fn show(&mut self, text: &str);
    fn refresh(&mut self) -> Result<()>;
}

pub struct TerminalPrompter {
    clear_screen: bool,
}

impl TerminalPrompter {
    pub fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?;
        Ok(choice)
    }

    fn input(&mut self, prompt: &str, initial: &str) -> Result<String> {
        let text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        Ok(text)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        ask_confirmation(prompt, false)
    }

    fn show(&mut self, text: &str) {
        println!("{}", text);
    }

    fn refresh(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
