//! UI module
//!
//! The line-oriented front end: command parsing, game text and the app that
//! ties them to the engine.

pub mod app;
pub mod command;
pub mod text;

pub use app::{App, Reply};
pub use command::{parse_command, Command, CommandError};
