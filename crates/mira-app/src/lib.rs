//! Mira Application
//!
//! Headless host for the overlay engine: plays toolbar actions, global
//! shortcuts and pointer input from a script and writes PNG snapshots.

mod config;
mod error;
mod script;
mod session;
mod shortcuts;
mod toolbar;

pub use config::AppConfig;
pub use error::AppError;
pub use script::{ScriptStep, parse_script};
pub use session::Session;
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry};
pub use toolbar::{Toolbar, ToolbarAction};
