use crate::core::input::Prompter;
use crate::core::wizard::{Step, Wizard};
use crate::utils::error::Result;

/// How the menu driver treats a command after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One full pass, back to the menu.
    Once,
    /// Re-offered after each successful pass until the operator declines.
    Repeat,
    /// The driver stops the program after running the body, whatever the
    /// body's own outcome.
    Exit,
}

/// A titled, mode-tagged unit of work. The default body is an empty
/// wizard, a no-op success.
pub struct Command<M> {
    title: String,
    mode: Mode,
    wizard: Wizard<M>,
}

impl<M> Command<M> {
    pub fn new(title: impl Into<String>, mode: Mode, steps: Vec<Step<M>>) -> Self {
        Self {
            title: title.into(),
            mode,
            wizard: Wizard::new(steps),
        }
    }

    pub fn noop(title: impl Into<String>, mode: Mode) -> Self {
        Self::new(title, mode, Vec::new())
    }

    /// Single-step specialization: the whole body is one action against
    /// the model, with no earlier step to back into.
    pub fn single(
        title: impl Into<String>,
        mode: Mode,
        step: impl Fn(&mut M, &mut Prompter) -> Result<bool> + 'static,
    ) -> Self {
        Self::new(title, mode, vec![Box::new(step) as Step<M>])
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Banner once, then the sequencer's verdict.
    pub fn run(&self, model: &mut M, prompter: &mut Prompter) -> Result<bool> {
        prompter.title(&format!("== {} ==", self.title))?;
        self.wizard.run(model, prompter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::ScriptedConsole;
    use crate::core::input::DEFAULT_CANCEL_TOKEN;

    #[test]
    fn noop_command_succeeds_and_shows_banner_once() {
        let command: Command<()> = Command::noop("Exit", Mode::Exit);
        let mut console = ScriptedConsole::new(&[]);
        let mut prompter = Prompter::new(&mut console, DEFAULT_CANCEL_TOKEN);
        assert!(command.run(&mut (), &mut prompter).unwrap());
        assert_eq!(console.titles(), &["== Exit =="]);
    }

    #[test]
    fn single_step_failure_is_overall_failure() {
        let command: Command<u32> =
            Command::single("Report", Mode::Once, |model, _| Ok(*model > 0));
        let mut console = ScriptedConsole::new(&[]);
        let mut prompter = Prompter::new(&mut console, DEFAULT_CANCEL_TOKEN);
        assert!(!command.run(&mut 0, &mut prompter).unwrap());
        assert!(command.run(&mut 1, &mut prompter).unwrap());
    }
}
