//! 结构化导出记录定义

use crate::app::error::types::Result;
use crate::core::frame::{
    compose_byte_field, parse_byte_field, parse_frame_id,
    MessageDefinition, MAX_STANDARD_ID,
};
use crate::core::params::ParameterRegistry;
use serde::{Deserialize, Serialize};

/// 结构化报文记录
///
/// 字段名与导出文件格式一一对应；id 按用户输入原文
/// 存取，不做规范化
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize,
)]
pub struct MessageRecord {
    /// 帧 ID 原文（0x 前缀十六进制）
    pub id: String,
    /// 数据长度码
    pub dlc: u8,
    /// 报文名称
    pub name: String,
    /// 是否周期发送
    pub periodic: bool,
    /// 发送周期（毫秒），非周期报文为 0
    pub period_ms: u32,
    /// 字段标记列表（参数名或两位十六进制字面量）
    pub data_bytes: Vec<String>,
}

impl MessageRecord {
    /// 由报文定义生成记录
    pub fn from_definition(
        def: &MessageDefinition,
    ) -> Self {
        Self {
            id: def.id.clone(),
            dlc: def.dlc,
            name: def.name.clone(),
            periodic: def.periodic,
            period_ms: if def.periodic {
                def.period_ms
            } else {
                0
            },
            data_bytes: def
                .bytes
                .iter()
                .map(compose_byte_field)
                .collect(),
        }
    }

    /// 将记录还原为报文定义
    ///
    /// 字段标记对照注册表解析，还原结果经过完整结构验证
    pub fn to_definition(
        &self,
        registry: &ParameterRegistry,
    ) -> Result<MessageDefinition> {
        let id_value = parse_frame_id(&self.id)?;

        let bytes = self
            .data_bytes
            .iter()
            .map(|token| {
                parse_byte_field(token, registry)
            })
            .collect::<Result<Vec<_>>>()?;

        let def = MessageDefinition {
            id: self.id.clone(),
            extended: id_value > MAX_STANDARD_ID,
            dlc: self.dlc,
            name: self.name.clone(),
            remote_request: false,
            periodic: self.periodic,
            period_ms: self.period_ms,
            bytes,
        };
        def.validate(registry)?;

        Ok(def)
    }
}
