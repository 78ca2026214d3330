use crate::app::commands::build_menu;
use crate::core::{Mode, Prompter};
use crate::domain::company::Company;
use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Menu loop: offer, dispatch by mode, leave on the Exit command. Owns no
/// entity logic; every mutation happens inside the commands.
pub fn run_session(
    company: &mut Company,
    console: &mut dyn Console,
    cancel_token: &str,
) -> Result<()> {
    let menu = build_menu();
    let mut prompter = Prompter::new(console, cancel_token);

    loop {
        prompter.title("== Main menu ==")?;
        for (mnemonic, command) in menu.entries() {
            prompter.say(&format!("  [{}] {}", mnemonic, command.title()))?;
        }

        // Cancelling the choice re-offers the menu; exhausted input must
        // leave the loop instead.
        let Some(command) = menu.select(&mut prompter, "choice")? else {
            if prompter.exhausted() {
                tracing::debug!("input exhausted, leaving the menu loop");
                return Ok(());
            }
            continue;
        };
        tracing::debug!(command = command.title(), "command selected");

        match command.mode() {
            Mode::Exit => {
                // The mode, not the body's outcome, stops the program.
                command.run(company, &mut prompter)?;
                return Ok(());
            }
            Mode::Once => {
                command.run(company, &mut prompter)?;
            }
            Mode::Repeat => loop {
                if !command.run(company, &mut prompter)? {
                    break;
                }
                match prompter.confirm("Return to the main menu?")? {
                    Some(false) => continue,
                    // yes, or cancel at the gate
                    _ => break,
                }
            },
        }
    }
}
