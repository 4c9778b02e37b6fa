use thiserror::Error;

/// 資料欄位驗證錯誤。Display 內容即為呈現給使用者的訊息。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{entity}'s {field} field is missing!")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{message}")]
    InvalidFormat {
        field: &'static str,
        message: &'static str,
    },

    #[error("Persons list contains duplicate person(s).")]
    DuplicatePerson,

    #[error("Weddings list contains duplicate wedding(s).")]
    DuplicateWedding,
}

impl ValidationError {
    /// 出錯的欄位名稱（重複資料錯誤沒有單一欄位）
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } | Self::InvalidFormat { field, .. } => Some(field),
            Self::DuplicatePerson | Self::DuplicateWedding => None,
        }
    }
}

pub const MESSAGE_NOT_IMPLEMENTED_YET: &str = "Command not implemented yet";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{}", MESSAGE_NOT_IMPLEMENTED_YET)]
    NotImplemented,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Could not load data from {path}: {source}")]
    DataLoadingError {
        path: String,
        #[source]
        source: Box<BookError>,
    },

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("{0}")]
    CommandError(#[from] CommandError),
}

impl BookError {
    pub fn data_loading(path: impl Into<String>, source: BookError) -> Self {
        Self::DataLoadingError {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Data file is not valid JSON: {}", e),
            Self::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            Self::ConfigError { field, message } => format!("Bad setting '{}': {}", field, message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad setting '{}': {}", field, reason)
            }
            Self::DataLoadingError { path, source } => {
                format!("Could not load '{}': {}", path, source.user_friendly_message())
            }
            Self::ValidationError(e) => e.to_string(),
            Self::CommandError(e) => e.to_string(),
        }
    }

    /// CLI 結束碼：1 為資料/指令錯誤，2 為設定錯誤，3 為系統錯誤
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationError(_) | Self::CommandError(_) | Self::SerializationError(_) => 1,
            Self::DataLoadingError { source, .. } => source.exit_code(),
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => 2,
            Self::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
