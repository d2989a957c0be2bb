use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaneError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 輸入資料有誤，使用者可自行修正
    Input,
    /// 設定檔或參數錯誤
    Config,
    /// 系統層級錯誤 (檔案系統等)
    System,
}

impl LaneError {
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        LaneError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LaneError::InvalidArgument { .. }
            | LaneError::SerializationError(_)
            | LaneError::TomlError(_)
            | LaneError::UrlError(_) => ErrorSeverity::Input,
            LaneError::ConfigError { .. } => ErrorSeverity::Config,
            LaneError::IoError(_) => ErrorSeverity::System,
        }
    }

    /// 對應到 CLI 的結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Input => 1,
            ErrorSeverity::Config => 2,
            ErrorSeverity::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LaneError::InvalidArgument { .. } => {
                "Check that every lane has a title and a books list, and every book an identifier"
            }
            LaneError::SerializationError(_) => "Check the JSON document syntax",
            LaneError::TomlError(_) => "Check the TOML document syntax",
            LaneError::UrlError(_) => "Use an absolute http(s) URL",
            LaneError::ConfigError { .. } => "Review the settings file and command line flags",
            LaneError::IoError(_) => "Check that the file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LaneError::InvalidArgument { field, reason } => {
                format!("Invalid catalog data at `{}`: {}", field, reason)
            }
            LaneError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LaneError>;
