use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum TrackerError {
    Config(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    NotFound(String),
    Unauthorized(String),
    ServiceUnavailable(String),
    RequestTimeout(String),
    RateLimited(String),
    Serialization(String),
    FileOperation(String),
}

impl TrackerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            TrackerError::Config(_) => "E001",
            TrackerError::DatabaseConfig(_) => "E002",
            TrackerError::DatabaseConnection(_) => "E003",
            TrackerError::DatabaseOperation(_) => "E004",
            TrackerError::Validation(_) => "E005",
            TrackerError::NotFound(_) => "E006",
            TrackerError::Unauthorized(_) => "E007",
            TrackerError::ServiceUnavailable(_) => "E008",
            TrackerError::RequestTimeout(_) => "E009",
            TrackerError::RateLimited(_) => "E010",
            TrackerError::Serialization(_) => "E011",
            TrackerError::FileOperation(_) => "E012",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            TrackerError::Config(_) => "Configuration Error",
            TrackerError::DatabaseConfig(_) => "Database Configuration Error",
            TrackerError::DatabaseConnection(_) => "Database Connection Error",
            TrackerError::DatabaseOperation(_) => "Database Operation Error",
            TrackerError::Validation(_) => "Validation Error",
            TrackerError::NotFound(_) => "Resource Not Found",
            TrackerError::Unauthorized(_) => "Unauthorized",
            TrackerError::ServiceUnavailable(_) => "Service Unavailable",
            TrackerError::RequestTimeout(_) => "Request Timeout",
            TrackerError::RateLimited(_) => "Rate Limit Exceeded",
            TrackerError::Serialization(_) => "Serialization Error",
            TrackerError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            TrackerError::Config(msg) => msg,
            TrackerError::DatabaseConfig(msg) => msg,
            TrackerError::DatabaseConnection(msg) => msg,
            TrackerError::DatabaseOperation(msg) => msg,
            TrackerError::Validation(msg) => msg,
            TrackerError::NotFound(msg) => msg,
            TrackerError::Unauthorized(msg) => msg,
            TrackerError::ServiceUnavailable(msg) => msg,
            TrackerError::RequestTimeout(msg) => msg,
            TrackerError::RateLimited(msg) => msg,
            TrackerError::Serialization(msg) => msg,
            TrackerError::FileOperation(msg) => msg,
        }
    }

    /// HTTP 状态码映射
    ///
    /// Storage failures that reach a handler are reported as 500; they never
    /// crash the process.
    pub fn http_status(&self) -> StatusCode {
        match self {
            TrackerError::Validation(_) => StatusCode::BAD_REQUEST,
            TrackerError::NotFound(_) => StatusCode::NOT_FOUND,
            TrackerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            TrackerError::RequestTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            TrackerError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            TrackerError::Config(_)
            | TrackerError::DatabaseConfig(_)
            | TrackerError::DatabaseConnection(_)
            | TrackerError::DatabaseOperation(_)
            | TrackerError::ServiceUnavailable(_)
            | TrackerError::Serialization(_)
            | TrackerError::FileOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 启动失败）
    #[cfg(feature = "server")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TrackerError {}

// 便捷的构造函数
impl TrackerError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        TrackerError::Config(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        TrackerError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        TrackerError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        TrackerError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        TrackerError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        TrackerError::NotFound(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        TrackerError::Unauthorized(msg.into())
    }

    pub fn service_unavailable<T: Into<String>>(msg: T) -> Self {
        TrackerError::ServiceUnavailable(msg.into())
    }

    pub fn request_timeout<T: Into<String>>(msg: T) -> Self {
        TrackerError::RequestTimeout(msg.into())
    }

    pub fn rate_limited<T: Into<String>>(msg: T) -> Self {
        TrackerError::RateLimited(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        TrackerError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        TrackerError::FileOperation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TrackerError {
    fn from(err: sea_orm::DbErr) -> Self {
        TrackerError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for TrackerError {
    fn from(err: config::ConfigError) -> Self {
        TrackerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            TrackerError::validation("bad").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TrackerError::not_found("missing").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TrackerError::unauthorized("nope").http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            TrackerError::service_unavailable("db down").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            TrackerError::request_timeout("slow").http_status(),
            StatusCode::REQUEST_TIMEOUT
        );
        assert_eq!(
            TrackerError::rate_limited("slow down").http_status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_format_simple() {
        let err = TrackerError::config("ADMIN_SECRET must be set");
        assert_eq!(err.code(), "E001");
        assert_eq!(
            err.format_simple(),
            "Configuration Error: ADMIN_SECRET must be set"
        );
        assert_eq!(err.to_string(), err.format_simple());
    }

    #[test]
    fn test_from_db_err() {
        let err: TrackerError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, TrackerError::DatabaseOperation(_)));
        assert!(err.message().contains("boom"));
    }
}
