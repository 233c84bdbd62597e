//! Application controller and terminal interface.
//!
//! [`Controller`] owns the single explicit application state
//! (`Idle`, `Generating`, `Ready`, `Failed`) and is the only thing that
//! mutates it. Generation, the status ticker and PDF export run as tokio
//! tasks that report back through [`ControllerEvent`]s; [`run_tui`] feeds
//! those events and terminal input to the controller and redraws after each.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod events;
mod runner;
mod settings;
mod ui;

pub use controller::{
    AppState, Controller, ControllerEvent, FAILURE_MESSAGE, Notice, NoticeLevel, VALIDATION_MESSAGE,
};
pub use events::{Event, EventHandler};
pub use runner::{handle_key, run_tui};
pub use settings::TuiConfig;
