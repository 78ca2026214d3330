// Application layer: concrete commands and the session driver.

pub mod commands;
pub mod session;
