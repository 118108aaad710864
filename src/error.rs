use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeynavError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Команда {program} завершилась с ошибкой: {stderr}")]
    CommandFailed { program: String, stderr: String },

    #[error("Ошибка разбора: {0}")]
    Parse(String),

    #[error("Сервис недоступен: {0}")]
    ServiceUnavailable(String),

    #[error("Таймаут: {0}")]
    Timeout(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl KeynavError {
    pub fn command_failed(program: impl Into<String>, stderr: impl Into<String>) -> Self {
        KeynavError::CommandFailed {
            program: program.into(),
            stderr: stderr.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KeynavError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! keynav_error {
    (parse, $($arg:tt)*) => {
        $crate::error::KeynavError::Parse(format!($($arg)*))
    };
    (service_unavailable, $($arg:tt)*) => {
        $crate::error::KeynavError::ServiceUnavailable(format!($($arg)*))
    };
    (timeout, $($arg:tt)*) => {
        $crate::error::KeynavError::Timeout(format!($($arg)*))
    };
    (internal, $($arg:tt)*) => {
        $crate::error::KeynavError::Internal(format!($($arg)*))
    };
}
