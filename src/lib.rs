pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::{ScriptedConsole, StdConsole};
pub use adapters::storage::LocalStorage;
pub use app::session::run_session;
pub use config::{AppConfig, CliConfig};
pub use domain::company::Company;
pub use domain::model::{Department, Staff};
pub use utils::error::{Result, RosterError};
