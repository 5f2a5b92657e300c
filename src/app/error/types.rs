use std::io;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum ComposerError {
    /// 参数重名
    #[error("Parameter '{name}' already exists")]
    DuplicateParameter {
        /// 冲突的参数名
        name: String,
    },

    /// 缩放系数非法
    #[error(
        "Invalid scale factor {scale}: must be positive"
    )]
    InvalidScale {
        /// 传入的缩放系数
        scale: f64,
    },

    /// 参数名非法（空名称为保留项）
    #[error("Parameter name cannot be empty")]
    InvalidName,

    /// 参数不存在
    #[error("Parameter '{name}' not found")]
    NotFound {
        /// 查找的参数名
        name: String,
    },

    /// 字节字段标记无法解析
    #[error("Invalid byte token '{token}': expected a parameter name or two hex digits")]
    InvalidByteToken {
        /// 原始标记
        token: String,
    },

    /// 报文行格式错误
    #[error("Malformed message line: {reason}")]
    MalformedLine {
        /// 具体原因
        reason: String,
    },

    /// 目录索引越界
    #[error("Index {index} out of range ({len} entries)")]
    IndexOutOfRange {
        /// 请求的索引
        index: usize,
        /// 目录当前条目数
        len: usize,
    },

    /// 验证错误
    #[error("Validation failed: {field} - {message}")]
    Validation {
        /// 出错的字段或记录位置
        field: String,
        /// 错误描述
        message: String,
    },

    /// 配置错误
    #[error("Configuration error: {message}")]
    Config {
        /// 错误描述
        message: String,
    },

    /// 文件读写错误
    #[error("File error: {0}")]
    Io(#[from] io::Error),

    /// JSON 序列化/反序列化错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<anyhow::Error> for ComposerError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(io_error) =
            err.downcast_ref::<std::io::Error>()
        {
            return ComposerError::Io(
                std::io::Error::new(
                    io_error.kind(),
                    err.to_string(),
                ),
            );
        }
        ComposerError::config(err.to_string())
    }
}

impl ComposerError {
    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 创建报文行格式错误
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            reason: reason.into(),
        }
    }
}

/// 结果类型别名
pub type Result<T> =
    std::result::Result<T, ComposerError>;
pub type AppError = ComposerError;
