pub mod command;
pub mod config;
pub mod error;
pub mod phrases;
pub mod platform;
pub mod reference;
pub mod resolver;
pub mod rotation;
pub mod selector;

#[cfg(test)]
mod testing;

pub use command::{Reply, SlashCommand};
pub use config::RotationConfig;
pub use error::{CoachError, PlatformError, Result};
pub use phrases::PhrasePool;
pub use reference::Reference;
pub use rotation::{rotate, ConfigSource, RotationOutcome, RotationRequest};
pub use selector::{Picker, RngPicker};
