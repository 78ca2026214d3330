pub mod command;
pub mod input;
pub mod menu;
pub mod wizard;

pub use crate::domain::ports::{Console, Storage};
pub use crate::utils::error::Result;
pub use command::{Command, Mode};
pub use input::{LineValue, Prompter, Rule, DEFAULT_CANCEL_TOKEN};
pub use menu::Menu;
pub use wizard::{Step, Wizard};
