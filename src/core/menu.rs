use crate::core::command::Command;
use crate::core::input::Prompter;
use crate::utils::error::Result;

/// Mnemonic-keyed command table. Listing order is registration order, not
/// character order.
pub struct Menu<M> {
    entries: Vec<(char, Command<M>)>,
}

impl<M> Menu<M> {
    /// Panics on duplicate mnemonics: a wiring mistake, caught at
    /// construction rather than at dispatch.
    pub fn new(entries: Vec<(char, Command<M>)>) -> Self {
        for (i, (mnemonic, _)) in entries.iter().enumerate() {
            assert!(
                entries[..i]
                    .iter()
                    .all(|(other, _)| !other.eq_ignore_ascii_case(mnemonic)),
                "duplicate menu mnemonic: {mnemonic}"
            );
        }
        Self { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = (char, &Command<M>)> {
        self.entries.iter().map(|(mnemonic, command)| (*mnemonic, command))
    }

    /// One choice per invocation; `None` when the operator cancelled.
    pub fn select(&self, prompter: &mut Prompter, message: &str) -> Result<Option<&Command<M>>> {
        let allowed: Vec<char> = self.entries.iter().map(|(mnemonic, _)| *mnemonic).collect();
        let Some(choice) = prompter.mnemonic(message, &allowed)? else {
            return Ok(None);
        };
        Ok(self
            .entries
            .iter()
            .find(|(mnemonic, _)| mnemonic.eq_ignore_ascii_case(&choice))
            .map(|(_, command)| command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::ScriptedConsole;
    use crate::core::command::Mode;
    use crate::core::input::DEFAULT_CANCEL_TOKEN;

    fn menu() -> Menu<()> {
        Menu::new(vec![
            ('z', Command::noop("Last registered, listed first", Mode::Once)),
            ('a', Command::noop("Second", Mode::Once)),
        ])
    }

    #[test]
    fn listing_follows_registration_order() {
        let titles: Vec<_> = menu().entries().map(|(_, c)| c.title().to_string()).collect();
        assert_eq!(titles, vec!["Last registered, listed first", "Second"]);
    }

    #[test]
    fn select_is_case_insensitive() {
        let menu = menu();
        let mut console = ScriptedConsole::new(&["Z"]);
        let mut prompter = Prompter::new(&mut console, DEFAULT_CANCEL_TOKEN);
        let command = menu.select(&mut prompter, "choice").unwrap().unwrap();
        assert_eq!(command.title(), "Last registered, listed first");
    }

    #[test]
    fn unknown_mnemonic_retries_until_known() {
        let menu = menu();
        let mut console = ScriptedConsole::new(&["q", "?", "a"]);
        let mut prompter = Prompter::new(&mut console, DEFAULT_CANCEL_TOKEN);
        let command = menu.select(&mut prompter, "choice").unwrap().unwrap();
        assert_eq!(command.title(), "Second");
    }

    #[test]
    fn cancel_selects_nothing() {
        let menu = menu();
        let mut console = ScriptedConsole::new(&["/"]);
        let mut prompter = Prompter::new(&mut console, DEFAULT_CANCEL_TOKEN);
        assert!(menu.select(&mut prompter, "choice").unwrap().is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate menu mnemonic")]
    fn duplicate_mnemonics_fail_construction() {
        let _: Menu<()> = Menu::new(vec![
            ('a', Command::noop("one", Mode::Once)),
            ('A', Command::noop("two", Mode::Once)),
        ]);
    }
}
