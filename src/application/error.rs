//! 명령 실행 경계에서 사용하는 오류 타입.

use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

/// 모든 명령 오류는 `(error) <message>`로 출력된다.
#[derive(Debug, Error)]
pub enum CliError {
    /// 잘못된 명령/인자 등 사용자 입력 오류
    #[error("{0}")]
    Usage(String),

    /// 원격 API 또는 전송 계층 오류
    #[error("{0}")]
    Remote(String),

    /// 설정 파일/터미널/프로세스 I/O 오류
    #[error("{0}")]
    Io(String),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    pub fn remote(message: impl Into<String>) -> Self {
        CliError::Remote(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        CliError::Io(message.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}
