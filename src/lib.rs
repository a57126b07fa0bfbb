//! mindful - A meditation timer for the terminal
//!
//! This crate provides a single-screen meditation timer: pick a preset,
//! start the countdown, follow the breathing guide, and hear a chime
//! when the session completes.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod session;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::MindfulError;
pub use session::SessionController;
