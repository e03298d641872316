mod args;
mod commands;
mod console;
mod handlers;
mod logging;
pub mod types;

pub use args::{Cli, Commands, SelectionArgs};
pub use commands::run;
pub use console::{ConsoleNotifier, ConsolePage};
