use crate::types::Result;
use dialoguer::Confirm;

/// Yes/no prompt used before destructive roster actions.
pub fn ask_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let choice = Confirm::new()
        .with_prompt(prompt)
        .default(default_yes)
        .show_default(true)
        .wait_for_newline(true)
        .interact()?;
    Ok(choice)
}
