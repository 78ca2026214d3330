// Domain layer ports: the seams the core needs from the outside world.

use crate::utils::error::Result;

/// Line-oriented console. `read_line` yields `None` on end of input.
pub trait Console {
    fn read_line(&mut self) -> Result<Option<String>>;
    /// Write without a trailing newline (prompts); implementations flush.
    fn write(&mut self, text: &str) -> Result<()>;
    fn write_line(&mut self, text: &str) -> Result<()>;
    /// Emphasized write for banners; plain `write_line` is a valid impl.
    fn write_title(&mut self, text: &str) -> Result<()>;
}

pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read(&self, path: &str) -> Result<Vec<u8>>;
    fn write(&self, path: &str, data: &[u8]) -> Result<()>;
}
