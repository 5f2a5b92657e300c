//! 配置验证模块
//!
//! 负责验证应用配置各分区的取值合法性

use crate::app::config::types::AppConfig;
use crate::app::error::types::{AppError, Result};

/// 配置验证器
pub struct ConfigValidator;

impl ConfigValidator {
    /// 验证完整应用配置
    pub fn validate(config: &AppConfig) -> Result<()> {
        Self::validate_battery(config)?;
        Self::validate_thresholds(config)?;
        Self::validate_comm(config)?;
        Ok(())
    }

    /// 验证电池组结构与传感器布局
    fn validate_battery(config: &AppConfig) -> Result<()> {
        if config.battery.cells_in_series_per_slave == 0 {
            return Err(AppError::validation(
                "Cells in series",
                "Count must be greater than zero",
            ));
        }

        if config.battery.cells_in_parallel == 0 {
            return Err(AppError::validation(
                "Cells in parallel",
                "Count must be greater than zero",
            ));
        }

        if config.battery.number_of_slaves == 0 {
            return Err(AppError::validation(
                "Number of slaves",
                "Count must be greater than zero",
            ));
        }

        if config.temp_sensors.sensors_per_slave == 0 {
            return Err(AppError::validation(
                "Temperature sensors",
                "Count must be greater than zero",
            ));
        }

        Ok(())
    }

    /// 验证阈值与均衡设置
    fn validate_thresholds(
        config: &AppConfig,
    ) -> Result<()> {
        if config.voltage.cell_overvoltage
            <= config.voltage.cell_undervoltage
        {
            return Err(AppError::validation(
                "Voltage thresholds",
                "Overvoltage must exceed undervoltage",
            ));
        }

        if config.temperature.overtemp
            <= config.temperature.undertemp
        {
            return Err(AppError::validation(
                "Temperature thresholds",
                "Overtemperature must exceed undertemperature",
            ));
        }

        if config.balance.threshold_v <= 0.0 {
            return Err(AppError::validation(
                "Balance threshold",
                "Threshold must be positive",
            ));
        }

        Ok(())
    }

    /// 验证通信设置
    fn validate_comm(config: &AppConfig) -> Result<()> {
        let id = config.comm.can_id.trim();
        let digits = id
            .strip_prefix("0x")
            .or_else(|| id.strip_prefix("0X"));

        match digits {
            Some(d)
                if !d.is_empty()
                    && u32::from_str_radix(d, 16)
                        .is_ok() => {}
            _ => {
                return Err(AppError::validation(
                    "CAN Bus ID",
                    "Must be a hex-prefixed id like 0x680",
                ));
            }
        }

        if config.comm.update_rate_ms == 0 {
            return Err(AppError::validation(
                "Update rate",
                "Rate must be greater than zero",
            ));
        }

        Ok(())
    }
}
