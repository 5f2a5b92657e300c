//! 遥测参数类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 参数数值类型枚举
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// 8位无符号整数
    UInt8,
    /// 8位有符号整数
    Int8,
    /// 16位无符号整数
    UInt16,
    /// 16位有符号整数
    Int16,
    /// 原始十六进制字面量（无参数映射）
    #[serde(rename = "hex")]
    HexLiteral,
}

impl fmt::Display for ParamType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ParamType::UInt8 => write!(f, "uint8"),
            ParamType::Int8 => write!(f, "int8"),
            ParamType::UInt16 => write!(f, "uint16"),
            ParamType::Int16 => write!(f, "int16"),
            ParamType::HexLiteral => write!(f, "hex"),
        }
    }
}

/// 遥测参数定义
///
/// 物理值 = 原始编码整数 × `scale`
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize,
)]
pub struct Parameter {
    /// 参数名（注册表内唯一，空名为保留项）
    pub name: String,
    /// 参数描述
    pub description: String,
    /// 数值类型
    #[serde(rename = "type")]
    pub param_type: ParamType,
    /// 显示单位（可为空）
    pub unit: String,
    /// 缩放系数（必须为正数）
    pub scale: f64,
}

/// 批量生成参数时使用的类型模板
#[derive(Debug, Clone)]
pub struct ParamTemplate {
    /// 数值类型
    pub param_type: ParamType,
    /// 显示单位
    pub unit: String,
    /// 缩放系数
    pub scale: f64,
    /// 描述模板，其中 `{n}` 会被替换为序号
    pub description: String,
}

impl ParamTemplate {
    /// 电芯电压参数模板
    pub fn cell_voltage() -> Self {
        Self {
            param_type: ParamType::UInt16,
            unit: "V".to_string(),
            scale: 0.001,
            description: "Cell {n} Voltage (V)"
                .to_string(),
        }
    }

    /// 温度传感器参数模板
    pub fn temp_sensor() -> Self {
        Self {
            param_type: ParamType::Int8,
            unit: "°C".to_string(),
            scale: 1.0,
            description: "Temperature Sensor {n} (°C)"
                .to_string(),
        }
    }

    /// 按序号渲染描述文本
    pub fn describe(&self, index: u32) -> String {
        if self.description.contains("{n}") {
            self.description
                .replace("{n}", &index.to_string())
        } else {
            format!("{} {}", self.description, index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type_display() {
        assert_eq!(ParamType::UInt8.to_string(), "uint8");
        assert_eq!(ParamType::Int16.to_string(), "int16");
        assert_eq!(
            ParamType::HexLiteral.to_string(),
            "hex"
        );
    }

    #[test]
    fn test_param_type_serde_tags() {
        // 序列化标签与原始配置格式保持一致
        let tag =
            serde_json::to_string(&ParamType::UInt16)
                .unwrap();
        assert_eq!(tag, "\"uint16\"");

        let parsed: ParamType =
            serde_json::from_str("\"hex\"").unwrap();
        assert_eq!(parsed, ParamType::HexLiteral);
    }

    #[test]
    fn test_template_describe() {
        let template = ParamTemplate::cell_voltage();
        assert_eq!(
            template.describe(5),
            "Cell 5 Voltage (V)"
        );

        let plain = ParamTemplate {
            param_type: ParamType::UInt8,
            unit: String::new(),
            scale: 1.0,
            description: "Sensor".to_string(),
        };
        assert_eq!(plain.describe(2), "Sensor 2");
    }
}
