//! 参数注册表
//!
//! 维护全部可被报文字节槽引用的遥测参数。注册表是
//! 单写者共享状态，编解码与目录验证均以只读引用访问。

use crate::app::error::types::{ComposerError, Result};
use crate::core::params::types::{
    ParamTemplate, ParamType, Parameter,
};
use std::collections::HashMap;

/// 保留的空参数名，表示"原始十六进制字节，无参数映射"
pub const RAW_LITERAL_NAME: &str = "";

/// 参数注册表
#[derive(Debug, Clone)]
pub struct ParameterRegistry {
    params: HashMap<String, Parameter>,
}

impl Default for ParameterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterRegistry {
    /// 创建空注册表（仅含保留的空名条目）
    pub fn new() -> Self {
        let mut registry = Self {
            params: HashMap::new(),
        };
        registry.seed(
            RAW_LITERAL_NAME,
            "Custom hex value",
            ParamType::HexLiteral,
            "",
            1.0,
        );
        registry
    }

    /// 创建携带内置 BMS 参数表的注册表
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // 系统参数
        registry.seed(
            "SOC",
            "State of Charge (%)",
            ParamType::UInt8,
            "%",
            1.0,
        );
        registry.seed(
            "SOH",
            "State of Health (%)",
            ParamType::UInt8,
            "%",
            1.0,
        );
        registry.seed(
            "Current",
            "Pack Current (A)",
            ParamType::Int16,
            "A",
            0.1,
        );
        registry.seed(
            "Voltage",
            "Pack Voltage (V)",
            ParamType::UInt16,
            "V",
            0.1,
        );
        registry.seed(
            "Power",
            "Pack Power (kW)",
            ParamType::Int16,
            "kW",
            0.01,
        );
        registry.seed(
            "Status",
            "BMS Status",
            ParamType::UInt8,
            "",
            1.0,
        );
        registry.seed(
            "Flags",
            "Error/Warning Flags",
            ParamType::UInt8,
            "",
            1.0,
        );

        // 电芯电压参数
        registry.seed(
            "Highest_Cell_V",
            "Highest Cell Voltage (V)",
            ParamType::UInt16,
            "V",
            0.001,
        );
        registry.seed(
            "Lowest_Cell_V",
            "Lowest Cell Voltage (V)",
            ParamType::UInt16,
            "V",
            0.001,
        );
        registry.seed(
            "Delta_Cell_V",
            "Max Cell Voltage Difference (V)",
            ParamType::UInt16,
            "V",
            0.001,
        );
        registry.seed(
            "Avg_Cell_V",
            "Average Cell Voltage (V)",
            ParamType::UInt16,
            "V",
            0.001,
        );
        registry.seed(
            "High_Cell_ID",
            "Highest Voltage Cell ID",
            ParamType::UInt8,
            "",
            1.0,
        );
        registry.seed(
            "Low_Cell_ID",
            "Lowest Voltage Cell ID",
            ParamType::UInt8,
            "",
            1.0,
        );

        // 温度参数
        registry.seed(
            "High_Temp",
            "Highest Temperature (°C)",
            ParamType::Int8,
            "°C",
            1.0,
        );
        registry.seed(
            "Low_Temp",
            "Lowest Temperature (°C)",
            ParamType::Int8,
            "°C",
            1.0,
        );
        registry.seed(
            "Avg_Temp",
            "Average Temperature (°C)",
            ParamType::Int8,
            "°C",
            1.0,
        );
        registry.seed(
            "High_Temp_ID",
            "Highest Temperature Sensor ID",
            ParamType::UInt8,
            "",
            1.0,
        );
        registry.seed(
            "Low_Temp_ID",
            "Lowest Temperature Sensor ID",
            ParamType::UInt8,
            "",
            1.0,
        );

        // 均衡参数
        registry.seed(
            "Bal_Status",
            "Balancing Status",
            ParamType::UInt8,
            "",
            1.0,
        );
        registry.seed(
            "Cells_Balancing",
            "Number of Cells Balancing",
            ParamType::UInt8,
            "",
            1.0,
        );

        // 单体电压/温度参数（按配置可继续批量生成）
        for i in 1..=4u32 {
            registry.seed(
                &format!("Cell_{}", i),
                &format!("Cell {} Voltage (V)", i),
                ParamType::UInt16,
                "V",
                0.001,
            );
            registry.seed(
                &format!("Temp_{}", i),
                &format!("Temperature Sensor {} (°C)", i),
                ParamType::Int8,
                "°C",
                1.0,
            );
        }

        registry
    }

    /// 注册新参数
    ///
    /// 空名称为保留项不可注册；缩放系数必须为正；
    /// 重名注册返回错误且不覆盖
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        param_type: ParamType,
        unit: &str,
        scale: f64,
    ) -> Result<&Parameter> {
        if name.is_empty() {
            return Err(ComposerError::InvalidName);
        }

        if scale <= 0.0 {
            return Err(ComposerError::InvalidScale {
                scale,
            });
        }

        if self.params.contains_key(name) {
            return Err(
                ComposerError::DuplicateParameter {
                    name: name.to_string(),
                },
            );
        }

        self.seed(name, description, param_type, unit, scale);
        Ok(&self.params[name])
    }

    /// 查找参数
    pub fn lookup(&self, name: &str) -> Result<&Parameter> {
        if name.is_empty() {
            return Err(ComposerError::NotFound {
                name: name.to_string(),
            });
        }

        self.params.get(name).ok_or_else(|| {
            ComposerError::NotFound {
                name: name.to_string(),
            }
        })
    }

    /// 判断名称是否为已注册参数（保留空名除外）
    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && self.params.contains_key(name)
    }

    /// 已注册参数数量（不含保留空名条目）
    pub fn len(&self) -> usize {
        self.params
            .keys()
            .filter(|name| !name.is_empty())
            .count()
    }

    /// 注册表是否为空（不含保留空名条目）
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按名称升序列出全部参数（不含保留空名条目）
    pub fn list_sorted(&self) -> Vec<&Parameter> {
        let mut params: Vec<&Parameter> = self
            .params
            .values()
            .filter(|param| !param.name.is_empty())
            .collect();
        params.sort_by(|a, b| a.name.cmp(&b.name));
        params
    }

    /// 按模板批量生成 `prefix_1 ..= prefix_count` 参数
    ///
    /// 已存在的名称直接跳过（填补空缺，不覆盖也不报错），
    /// 返回实际新建的参数个数
    pub fn generate_sequential(
        &mut self,
        prefix: &str,
        count: u32,
        template: &ParamTemplate,
    ) -> Result<usize> {
        if prefix.is_empty() {
            return Err(ComposerError::InvalidName);
        }

        if template.scale <= 0.0 {
            return Err(ComposerError::InvalidScale {
                scale: template.scale,
            });
        }

        let mut created = 0;
        for i in 1..=count {
            let name = format!("{}_{}", prefix, i);
            if self.params.contains_key(&name) {
                continue;
            }
            self.seed(
                &name,
                &template.describe(i),
                template.param_type,
                &template.unit,
                template.scale,
            );
            created += 1;
        }

        if created > 0 {
            tracing::debug!(
                "Generated {} parameters with prefix '{}'",
                created,
                prefix
            );
        }

        Ok(created)
    }

    /// 直接写入条目（内部使用，输入为已知合法值）
    fn seed(
        &mut self,
        name: &str,
        description: &str,
        param_type: ParamType,
        unit: &str,
        scale: f64,
    ) {
        self.params.insert(
            name.to_string(),
            Parameter {
                name: name.to_string(),
                description: description.to_string(),
                param_type,
                unit: unit.to_string(),
                scale,
            },
        );
    }
}
