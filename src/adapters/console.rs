use std::collections::VecDeque;
use std::io::{self, BufRead, Write as _};
use std::ops::{Deref, DerefMut};

use colored::{Color, Colorize};

use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Real console on stdin/stdout. Holds the current highlight color; all
/// writes go through it so a scoped highlight affects every line until
/// the scope ends.
pub struct StdConsole {
    highlight: Option<Color>,
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl StdConsole {
    pub fn new() -> Self {
        Self { highlight: None }
    }

    fn paint(&self, text: &str) -> String {
        match self.highlight {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }

    /// Switch output to `color` until the returned scope drops. The guard
    /// restores the previous state on every exit path, early returns and
    /// errors included.
    pub fn highlighted(&mut self, color: Color) -> HighlightScope<'_> {
        let previous = self.highlight.replace(color);
        HighlightScope {
            console: self,
            previous,
        }
    }
}

pub struct HighlightScope<'a> {
    console: &'a mut StdConsole,
    previous: Option<Color>,
}

impl Drop for HighlightScope<'_> {
    fn drop(&mut self) {
        self.console.highlight = self.previous.take();
    }
}

impl Deref for HighlightScope<'_> {
    type Target = StdConsole;

    fn deref(&self) -> &StdConsole {
        self.console
    }
}

impl DerefMut for HighlightScope<'_> {
    fn deref_mut(&mut self) -> &mut StdConsole {
        self.console
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(self.paint(text).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", self.paint(text))?;
        Ok(())
    }

    fn write_title(&mut self, text: &str) -> Result<()> {
        let mut scope = self.highlighted(Color::Cyan);
        scope.write_line(text)
    }
}

/// Console double for tests: answers from a fixed script, records output.
/// Plays the role at the console port that httpmock-style doubles play at
/// a network boundary.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    lines: Vec<String>,
    prompts: Vec<String>,
    titles: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            lines: Vec::new(),
            prompts: Vec::new(),
            titles: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Everything written, in order, for contains-style assertions.
    pub fn transcript(&self) -> String {
        let mut all = Vec::new();
        all.extend(self.titles.iter().cloned());
        all.extend(self.lines.iter().cloned());
        all.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.prompts.push(text.to_string());
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }

    fn write_title(&mut self, text: &str) -> Result<()> {
        self.titles.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_scope_restores_on_drop() {
        let mut console = StdConsole::new();
        assert!(console.highlight.is_none());
        {
            let scope = console.highlighted(Color::Cyan);
            assert_eq!(scope.highlight, Some(Color::Cyan));
        }
        assert!(console.highlight.is_none());
    }

    #[test]
    fn nested_scopes_restore_in_order() {
        let mut console = StdConsole::new();
        {
            let mut outer = console.highlighted(Color::Red);
            {
                let inner = outer.highlighted(Color::Cyan);
                assert_eq!(inner.highlight, Some(Color::Cyan));
            }
            assert_eq!(outer.highlight, Some(Color::Red));
        }
        assert!(console.highlight.is_none());
    }

    #[test]
    fn scripted_console_replays_inputs_then_eof() {
        let mut console = ScriptedConsole::new(&["a", "b"]);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("b"));
        assert_eq!(console.read_line().unwrap(), None);
    }
}
