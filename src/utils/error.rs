use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectorError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Authentication failed ({status}) for {url}")]
    AuthError { status: u16, url: String },

    #[error("Request to {url} failed with status {status}")]
    TransportError { status: u16, url: String },

    #[error("Unexpected payload from {url}: {message}")]
    UnexpectedPayload { url: String, message: String },

    #[error("No {stage} found")]
    EmptyResult { stage: Stage },

    #[error("Invalid {stage} selection: '{input}'")]
    InvalidSelection { stage: Stage, input: String },

    #[error("Input closed while waiting for {what}")]
    InputClosed { what: String },
}

/// 下鑽流程的階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Board,
    Epic,
    Ticket,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Board => write!(f, "board"),
            Stage::Epic => write!(f, "epic"),
            Stage::Ticket => write!(f, "ticket"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Authentication,
    Network,
    Data,
    UserInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl InspectorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InspectorError::ConfigError { .. }
            | InspectorError::InvalidConfigValueError { .. }
            | InspectorError::IoError(_) => ErrorCategory::Configuration,
            InspectorError::AuthError { .. } => ErrorCategory::Authentication,
            InspectorError::ApiError(_) | InspectorError::TransportError { .. } => {
                ErrorCategory::Network
            }
            InspectorError::SerializationError(_)
            | InspectorError::UnexpectedPayload { .. }
            | InspectorError::EmptyResult { .. } => ErrorCategory::Data,
            InspectorError::InvalidSelection { .. } | InspectorError::InputClosed { .. } => {
                ErrorCategory::UserInput
            }
        }
    }

    /// 決定程式的結束代碼：Low 視為正常結束
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            InspectorError::EmptyResult { .. } => ErrorSeverity::Low,
            InspectorError::InvalidSelection { .. } | InspectorError::InputClosed { .. } => {
                ErrorSeverity::Medium
            }
            InspectorError::ConfigError { .. }
            | InspectorError::InvalidConfigValueError { .. }
            | InspectorError::IoError(_)
            | InspectorError::AuthError { .. } => ErrorSeverity::High,
            InspectorError::ApiError(_)
            | InspectorError::TransportError { .. }
            | InspectorError::SerializationError(_)
            | InspectorError::UnexpectedPayload { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InspectorError::ConfigError { message } => message.clone(),
            InspectorError::InvalidConfigValueError { field, value, .. } => {
                format!("設定値 '{}' が不正です: {}", field, value)
            }
            InspectorError::AuthError { status, .. } => {
                format!("JIRAの認証に失敗しました。(HTTP {})", status)
            }
            InspectorError::TransportError { status, .. } => {
                format!("JIRAへのリクエストが失敗しました。(HTTP {})", status)
            }
            InspectorError::ApiError(e) => format!("JIRAに接続できませんでした: {}", e),
            InspectorError::IoError(e) => format!("ファイルの読み込みに失敗しました: {}", e),
            InspectorError::SerializationError(_) | InspectorError::UnexpectedPayload { .. } => {
                "JIRAから想定外のレスポンスが返されました。".to_string()
            }
            InspectorError::EmptyResult { stage } => no_results_message(*stage).to_string(),
            InspectorError::InvalidSelection { .. } => "正しいidを選択してください。".to_string(),
            InspectorError::InputClosed { .. } => "入力が終了しました。".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Create token.txt with 'email=...' and 'token=...' lines, or pass --credentials"
            }
            ErrorCategory::Authentication => "Check the account email and regenerate the API token",
            ErrorCategory::Network => "Check the network connection and the --base-url value",
            ErrorCategory::Data => match self {
                InspectorError::EmptyResult { .. } => "Choose a different board or epic",
                _ => "Check that --base-url points at a Jira Agile REST API",
            },
            ErrorCategory::UserInput => "Run again and enter one of the listed ids",
        }
    }
}

/// 取得結果為空時顯示的訊息
pub fn no_results_message(stage: Stage) -> &'static str {
    match stage {
        Stage::Board => "ボードがありません",
        Stage::Epic => "エピックがありません",
        Stage::Ticket => "チケットがありません",
    }
}

pub type Result<T> = std::result::Result<T, InspectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_low_severity() {
        let err = InspectorError::EmptyResult {
            stage: Stage::Epic,
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.user_friendly_message(), "エピックがありません");
    }

    #[test]
    fn test_auth_and_transport_are_fatal() {
        let auth = InspectorError::AuthError {
            status: 401,
            url: "https://example.com".to_string(),
        };
        let transport = InspectorError::TransportError {
            status: 500,
            url: "https://example.com".to_string(),
        };
        assert_eq!(auth.category(), ErrorCategory::Authentication);
        assert!(auth.severity() > ErrorSeverity::Medium);
        assert_eq!(transport.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_invalid_selection_message() {
        let err = InspectorError::InvalidSelection {
            stage: Stage::Board,
            input: "3".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid board selection: '3'");
        assert_eq!(err.user_friendly_message(), "正しいidを選択してください。");
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }
}
