pub mod command;

pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
pub use command::{Command, CommandResult, TagCommand};
