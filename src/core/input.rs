use unicode_normalization::UnicodeNormalization;

use crate::domain::ports::Console;
use crate::utils::error::Result;

pub const DEFAULT_CANCEL_TOKEN: &str = "/";

/// Closed set of line-parseable scalars. New scalar kinds join this impl
/// list; call sites pick the parser statically.
pub trait LineValue: Sized {
    fn parse_line(line: &str) -> Option<Self>;
}

impl LineValue for i32 {
    fn parse_line(line: &str) -> Option<Self> {
        line.parse().ok()
    }
}

impl LineValue for String {
    fn parse_line(line: &str) -> Option<Self> {
        Some(line.to_string())
    }
}

/// One validation rule: predicate plus the message shown when it fails.
pub struct Rule<'a, T> {
    predicate: Box<dyn Fn(&T) -> bool + 'a>,
    message: String,
}

impl<'a, T> Rule<'a, T> {
    pub fn new(message: impl Into<String>, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    pub fn holds(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Input acquisition over the console port. Parsing and rule checking are
/// two independent gates: a parse failure re-prompts silently, a rule
/// failure shows that rule's message. Rules run in declaration order and
/// only the first failure is reported.
pub struct Prompter<'c> {
    console: &'c mut dyn Console,
    cancel_token: String,
    exhausted: bool,
}

impl<'c> Prompter<'c> {
    pub fn new(console: &'c mut dyn Console, cancel_token: impl Into<String>) -> Self {
        Self {
            console,
            cancel_token: cancel_token.into(),
            exhausted: false,
        }
    }

    /// True once the console reached end of input. End of input reads as a
    /// cancel, but callers that re-offer a prompt after cancel (the menu
    /// loop) must stop instead of spinning.
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    /// `Ok(None)` exactly when the user cancelled (cancel token or end of
    /// input); `Err` is reserved for console failure.
    pub fn value<T: LineValue>(&mut self, message: &str, rules: &[Rule<'_, T>]) -> Result<Option<T>> {
        loop {
            self.console.write(&format!("{}: ", message))?;
            let Some(raw) = self.console.read_line()? else {
                self.exhausted = true;
                return Ok(None);
            };
            let line = normalize(&raw);
            if line == self.cancel_token {
                return Ok(None);
            }
            let Some(value) = T::parse_line(&line) else {
                continue;
            };
            match rules.iter().find(|rule| !rule.holds(&value)) {
                Some(rule) => self.console.write_line(rule.message())?,
                None => return Ok(Some(value)),
            }
        }
    }

    /// Single-character selection: case-folds the first character of the
    /// line and retries until it is one of `allowed`.
    pub fn mnemonic(&mut self, message: &str, allowed: &[char]) -> Result<Option<char>> {
        loop {
            self.console.write(&format!("{}: ", message))?;
            let Some(raw) = self.console.read_line()? else {
                self.exhausted = true;
                return Ok(None);
            };
            let line = normalize(&raw);
            if line == self.cancel_token {
                return Ok(None);
            }
            let Some(first) = line.chars().next() else {
                continue;
            };
            let folded = first.to_ascii_lowercase();
            if allowed.iter().any(|c| c.eq_ignore_ascii_case(&folded)) {
                return Ok(Some(folded));
            }
        }
    }

    pub fn confirm(&mut self, message: &str) -> Result<Option<bool>> {
        Ok(self
            .mnemonic(&format!("{} [y/n]", message), &['y', 'n'])?
            .map(|c| c == 'y'))
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        self.console.write_line(text)
    }

    pub fn title(&mut self, text: &str) -> Result<()> {
        self.console.write_title(text)
    }
}

/// Lines are NFKC-normalized and trimmed before any interpretation, so
/// full-width input (ｙ, １８１) behaves like its ASCII counterpart.
fn normalize(raw: &str) -> String {
    raw.nfkc().collect::<String>().trim().to_string()
}
