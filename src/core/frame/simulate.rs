//! 参数模拟取值
//!
//! 为预览发送生成合理范围内的随机值。随机源由调用方
//! 显式注入，保证测试可复现。

use crate::app::error::types::Result;
use crate::core::frame::types::{
    ByteSlot, MessageDefinition,
};
use crate::core::params::{
    ParamType, Parameter, ParameterRegistry,
};
use rand::Rng;

/// 根据参数身份抽取模拟原始值
///
/// 范围按参数名匹配，匹配顺序与取值区间沿用既有工具
fn draw_raw_value<R: Rng>(
    param: &Parameter,
    rng: &mut R,
) -> i32 {
    let name = param.name.as_str();

    if name == "SOC" {
        rng.gen_range(0..=100)
    } else if name == "SOH" {
        rng.gen_range(70..=100)
    } else if name == "Current" {
        // -50A ~ 50A，缩放 0.1
        rng.gen_range(-500..=500)
    } else if name == "Voltage" {
        // 300V ~ 420V，缩放 0.1
        rng.gen_range(3000..=4200)
    } else if name == "Power" {
        // -100kW ~ 200kW，缩放 0.01
        rng.gen_range(-10000..=20000)
    } else if name == "Status" {
        rng.gen_range(0..=5)
    } else if name == "Flags" {
        rng.gen_range(0..=3)
    } else if name.contains("Cell_V") {
        // 3.0V ~ 4.2V，缩放 0.001
        rng.gen_range(3000..=4200)
    } else if name.contains("Temp")
        && !name.ends_with("ID")
    {
        // 15°C ~ 45°C
        rng.gen_range(15..=45)
    } else if name.contains("ID") {
        // 电芯/传感器编号
        rng.gen_range(1..=16)
    } else if name.contains("Bal") {
        rng.gen_range(0..=1)
    } else if name.contains("Cell_") {
        rng.gen_range(3000..=4200)
    } else {
        0
    }
}

/// 将模拟原始值按参数类型格式化为两位十六进制文本
///
/// 已知局限：16 位类型同样只输出低字节（`value & 0xFF`），
/// 高字节被静默丢弃。该行为沿袭自既有工具并保持兼容；
/// 修正需要同时决定输出字节序，不在此处擅自更改
pub fn format_raw_value(
    param_type: ParamType,
    raw: i32,
) -> String {
    match param_type {
        ParamType::UInt8
        | ParamType::Int8
        | ParamType::UInt16
        | ParamType::Int16 => {
            format!("{:02X}", (raw & 0xFF) as u8)
        }
        ParamType::HexLiteral => "00".to_string(),
    }
}

/// 为单个参数生成一个格式化后的模拟值
pub fn simulate_parameter_value<R: Rng>(
    param: &Parameter,
    rng: &mut R,
) -> String {
    let raw = draw_raw_value(param, rng);
    format_raw_value(param.param_type, raw)
}

/// 为整条报文生成模拟字节文本序列
///
/// 字面量槽原样输出十六进制，参数槽按注册表定义模拟
pub fn simulate_message_values<R: Rng>(
    def: &MessageDefinition,
    registry: &ParameterRegistry,
    rng: &mut R,
) -> Result<Vec<String>> {
    def.bytes
        .iter()
        .map(|slot| match slot {
            ByteSlot::Literal(value) => {
                Ok(format!("{:02X}", value))
            }
            ByteSlot::ParamRef(name) => {
                let param = registry.lookup(name)?;
                Ok(simulate_parameter_value(param, rng))
            }
        })
        .collect()
}
