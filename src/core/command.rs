use crate::domain::AddressBook;
use crate::utils::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
        }
    }
}

/// 對通訊錄執行的使用者指令
pub trait Command {
    fn execute(&self, book: &mut AddressBook) -> Result<CommandResult, CommandError>;
}

/// 為聯絡人加上標籤。尚未實作，執行時一律失敗。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCommand;

impl TagCommand {
    pub const COMMAND_WORD: &'static str = "tag";
}

impl Command for TagCommand {
    fn execute(&self, _book: &mut AddressBook) -> Result<CommandResult, CommandError> {
        Err(CommandError::NotImplemented)
    }
}
