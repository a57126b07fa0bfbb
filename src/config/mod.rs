//! Runtime configuration for mindful.
//!
//! Settings are held in memory only; nothing is persisted across sessions.

mod settings;

pub use settings::{Settings, Theme};
