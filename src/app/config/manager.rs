//! 配置管理模块
//! 负责加载、保存和管理应用程序配置

use anyhow::{Context, Result};
use std::fs;

use super::paths::ConfigPaths;
use super::types::AppConfig;

/// 配置管理器
pub struct ConfigManager {
    config_paths: ConfigPaths,
    config: AppConfig,
}

impl ConfigManager {
    /// 创建新的配置管理器
    ///
    /// # 返回
    /// 返回配置管理器实例，如果路径解析失败则返回错误
    pub fn new() -> Result<Self> {
        let config_paths = ConfigPaths::new()?;

        Ok(Self {
            config_paths,
            config: AppConfig::default(),
        })
    }

    /// 加载配置文件
    pub fn load(&mut self) -> Result<()> {
        let config_file = self.config_paths.config_file();

        if config_file.exists() {
            let content = fs::read_to_string(config_file)
                .with_context(|| {
                format!(
                    "无法读取配置文件: {:?}",
                    config_file
                )
            })?;

            self.config = toml::from_str(&content)
                .with_context(|| {
                    format!(
                        "无法解析配置文件: {:?}",
                        config_file
                    )
                })?;

            tracing::info!(
                "配置文件加载成功: {:?}",
                config_file
            );
        } else {
            tracing::info!(
                "配置文件不存在，使用默认配置: {:?}",
                config_file
            );
            self.save()?; // 创建默认配置文件
        }
        Ok(())
    }

    /// 保存配置文件
    pub fn save(&self) -> Result<()> {
        // 确保配置目录存在
        self.config_paths.ensure_config_dir_exists()?;

        let content = toml::to_string_pretty(&self.config)
            .context("无法序列化配置")?;

        let config_file = self.config_paths.config_file();
        fs::write(config_file, content).with_context(
            || {
                format!(
                    "无法写入配置文件: {:?}",
                    config_file
                )
            },
        )?;

        tracing::info!(
            "配置文件保存成功: {:?}",
            config_file
        );
        Ok(())
    }

    /// 获取配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 更新电池组结构配置
    pub fn update_battery_config(
        &mut self,
        cells_in_series_per_slave: u32,
        cells_in_parallel: u32,
        number_of_slaves: u32,
    ) {
        self.config.battery.cells_in_series_per_slave =
            cells_in_series_per_slave;
        self.config.battery.cells_in_parallel =
            cells_in_parallel;
        self.config.battery.number_of_slaves =
            number_of_slaves;
    }

    /// 更新通信配置
    pub fn update_comm_config(
        &mut self,
        can_id: String,
        update_rate_ms: u32,
    ) {
        self.config.comm.can_id = can_id;
        self.config.comm.update_rate_ms = update_rate_ms;
    }
}
