//! Command-line interface module.

mod commands;
mod export;
mod generate;
mod tui_handler;

pub use commands::{Cli, Commands, ExportFormat, OutputFormat};
pub use export::run_export;
pub use generate::run_generate;
pub use tui_handler::launch_tui;
