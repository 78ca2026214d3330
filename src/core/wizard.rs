use crate::core::input::Prompter;
use crate::utils::error::Result;

/// One wizard step: acquire/act against the model, `Ok(true)` to advance,
/// `Ok(false)` to step back. Steps are re-entrant — backing up re-runs the
/// earlier step's acquisition rather than restoring its old value.
pub type Step<M> = Box<dyn Fn(&mut M, &mut Prompter) -> Result<bool>>;

/// Linear step sequencer. Success past the last index completes the
/// wizard; failure before index 0 abandons it.
pub struct Wizard<M> {
    steps: Vec<Step<M>>,
}

impl<M> Default for Wizard<M> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<M> Wizard<M> {
    pub fn new(steps: Vec<Step<M>>) -> Self {
        Self { steps }
    }

    pub fn run(&self, model: &mut M, prompter: &mut Prompter) -> Result<bool> {
        let mut index: isize = 0;
        while index >= 0 && (index as usize) < self.steps.len() {
            if (self.steps[index as usize])(model, prompter)? {
                index += 1;
            } else {
                index -= 1;
            }
        }
        Ok(index >= 0)
    }
}
