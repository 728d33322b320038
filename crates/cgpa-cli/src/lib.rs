//! # cgpa-cli
//!
//! Terminal output, user-facing messages, the interactive course editor,
//! and shell completion.

pub mod commands;
pub mod completion;
pub mod interactive;
pub mod messages;
pub mod output;
pub mod presenter;
pub mod ui;

pub use interactive::Session;
pub use output::OutputFormat;
pub use presenter::{CLIResultPresenter, JsonResultPresenter};
