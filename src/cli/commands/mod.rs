//! Command implementations for mindful.

mod completions;
mod presets;

pub use completions::completions;
pub use presets::presets;
