//! 配置路径管理模块
//! 负责解析 config.toml 的查找与存放位置

use crate::app::error::types::{ComposerError, Result};
use std::path::{Path, PathBuf};

/// 配置目录名（用户配置目录下）
const CONFIG_DIR_NAME: &str = "can-composer";

/// 配置路径管理器
pub struct ConfigPaths {
    config_file: PathBuf,
}

impl ConfigPaths {
    /// 创建新的配置路径管理器
    ///
    /// 查找顺序：当前工作目录、可执行文件目录、
    /// 用户配置目录（不存在时以此为默认存放位置）
    pub fn new() -> Result<Self> {
        let config_file = Self::resolve_config_file()?;

        Ok(Self { config_file })
    }

    /// 获取配置文件路径
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// 确保配置文件所在目录存在
    pub fn ensure_config_dir_exists(&self) -> Result<()> {
        if let Some(parent) = self.config_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// 解析配置文件路径
    fn resolve_config_file() -> Result<PathBuf> {
        // 首先尝试从当前工作目录查找
        let current_dir = std::env::current_dir()
            .map_err(|e| {
                ComposerError::config(format!(
                    "Failed to get current directory: {}",
                    e
                ))
            })?;

        let config_file = current_dir.join("config.toml");
        if config_file.exists() {
            tracing::info!(
                "Using config file in working directory: {:?}",
                config_file
            );
            return Ok(config_file);
        }

        // 其次尝试从可执行文件目录查找
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let exe_config_file =
                    exe_dir.join("config.toml");
                if exe_config_file.exists() {
                    tracing::info!("Found config file in executable directory: {:?}", exe_config_file);
                    return Ok(exe_config_file);
                }
            }
        }

        // 最后落到用户配置目录
        if let Some(user_config_dir) = dirs::config_dir() {
            let user_config_file = user_config_dir
                .join(CONFIG_DIR_NAME)
                .join("config.toml");
            tracing::info!(
                "Using config file path: {:?}",
                user_config_file
            );
            return Ok(user_config_file);
        }

        tracing::info!(
            "Using config file path: {:?}",
            config_file
        );
        Ok(config_file)
    }
}
