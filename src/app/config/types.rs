//! 应用配置数据结构定义
//!
//! 配置项来源于电池管理系统的组态表单：电池组结构、
//! 温度传感器布局、阈值与均衡设置、通信设置。核心层
//! 只消费由此派生的电芯/传感器总数。

use serde::{Deserialize, Serialize};

/// 电池组结构配置
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq,
)]
pub struct BatteryConfig {
    /// 每块从板串联电芯数
    pub cells_in_series_per_slave: u32,
    /// 并联电芯数
    pub cells_in_parallel: u32,
    /// 从板数量
    pub number_of_slaves: u32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            cells_in_series_per_slave: 12,
            cells_in_parallel: 4,
            number_of_slaves: 12,
        }
    }
}

impl BatteryConfig {
    /// 计算电芯总数
    pub fn total_cells(&self) -> u32 {
        self.cells_in_series_per_slave
            * self.cells_in_parallel
            * self.number_of_slaves
    }
}

/// 温度传感器配置
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq,
)]
pub struct TempSensorConfig {
    /// 每块从板温度传感器数
    pub sensors_per_slave: u32,
    /// 是否使用多路复用
    pub multiplexed: bool,
    /// 多路复用引脚
    pub mux_pin: u8,
}

impl Default for TempSensorConfig {
    fn default() -> Self {
        Self {
            sensors_per_slave: 10,
            multiplexed: false,
            mux_pin: 0,
        }
    }
}

impl TempSensorConfig {
    /// 计算温度传感器总数
    pub fn total_sensors(
        &self,
        number_of_slaves: u32,
    ) -> u32 {
        self.sensors_per_slave * number_of_slaves
    }
}

/// 电芯电压阈值（V）
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq,
)]
pub struct VoltageThresholds {
    /// 过压阈值
    pub cell_overvoltage: f64,
    /// 欠压阈值
    pub cell_undervoltage: f64,
}

impl Default for VoltageThresholds {
    fn default() -> Self {
        Self {
            cell_overvoltage: 4.20,
            cell_undervoltage: 2.80,
        }
    }
}

/// 温度阈值（°C）
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq,
)]
pub struct TempThresholds {
    /// 过温阈值
    pub overtemp: f64,
    /// 低温阈值
    pub undertemp: f64,
}

impl Default for TempThresholds {
    fn default() -> Self {
        Self {
            overtemp: 55.0,
            undertemp: -10.0,
        }
    }
}

/// 均衡配置
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq,
)]
pub struct BalanceConfig {
    /// 均衡触发压差（V）
    pub threshold_v: f64,
    /// 均衡起始电压（V）
    pub start_voltage: f64,
    /// 是否启用均衡
    pub enabled: bool,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            threshold_v: 0.01,
            start_voltage: 3.90,
            enabled: true,
        }
    }
}

/// 通信配置
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq,
)]
pub struct CommConfig {
    /// 基础 CAN 总线 ID（十六进制字符串）
    pub can_id: String,
    /// 更新周期（毫秒）
    pub update_rate_ms: u32,
}

impl Default for CommConfig {
    fn default() -> Self {
        Self {
            can_id: "0x680".to_string(),
            update_rate_ms: 500,
        }
    }
}

/// 应用程序配置结构
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default,
)]
pub struct AppConfig {
    /// 电池组结构
    pub battery: BatteryConfig,
    /// 温度传感器布局
    pub temp_sensors: TempSensorConfig,
    /// 电压阈值
    pub voltage: VoltageThresholds,
    /// 温度阈值
    pub temperature: TempThresholds,
    /// 均衡设置
    pub balance: BalanceConfig,
    /// 通信设置
    pub comm: CommConfig,
}
