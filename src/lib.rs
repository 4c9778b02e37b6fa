pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliCommand, CliConfig};

pub use config::AppConfig;
pub use core::{Command, CommandResult, TagCommand};
pub use domain::{AddressBook, Person, ValueObject, Wedding};
pub use storage::{JsonAdaptedPerson, JsonAdaptedWedding, JsonAddressBookStorage, LocalStorage};
pub use utils::error::{BookError, CommandError, Result, ValidationError};
