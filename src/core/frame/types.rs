//! 报文定义数据结构

use crate::app::error::types::{ComposerError, Result};
use crate::core::params::ParameterRegistry;

/// 标准帧 ID 上限
pub const MAX_STANDARD_ID: u32 = 0x7FF;
/// 扩展帧 ID 上限
pub const MAX_EXTENDED_ID: u32 = 0x1FFF_FFFF;
/// 数据长度码上限
pub const MAX_DLC: u8 = 8;

/// 报文字节槽
///
/// 每个载荷字节要么是固定字面量，要么绑定到注册表中
/// 的一个参数。未绑定参数的槽一律表示为字面量。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteSlot {
    /// 固定字节值
    Literal(u8),
    /// 参数引用（按名称）
    ParamRef(String),
}

/// 报文定义
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDefinition {
    /// 帧 ID，保留用户输入的 0x 前缀原文
    pub id: String,
    /// 是否为扩展帧
    pub extended: bool,
    /// 数据长度码（0-8）
    pub dlc: u8,
    /// 报文名称
    pub name: String,
    /// 是否为远程请求帧
    pub remote_request: bool,
    /// 是否周期发送
    pub periodic: bool,
    /// 发送周期（毫秒），仅周期报文有意义
    pub period_ms: u32,
    /// 字节槽列表，长度必须等于 dlc
    pub bytes: Vec<ByteSlot>,
}

impl Default for MessageDefinition {
    fn default() -> Self {
        Self {
            id: "0x100".to_string(),
            extended: false,
            dlc: 8,
            name: "New_Message".to_string(),
            remote_request: false,
            periodic: true,
            period_ms: 1000,
            bytes: vec![ByteSlot::Literal(0); 8],
        }
    }
}

impl MessageDefinition {
    /// 解析帧 ID 的数值
    pub fn id_value(&self) -> Result<u32> {
        parse_frame_id(&self.id)
    }

    /// 对照注册表做完整结构验证
    ///
    /// 任何一项不满足即返回验证错误，调用方保证验证
    /// 通过前不提交任何状态变更
    pub fn validate(
        &self,
        registry: &ParameterRegistry,
    ) -> Result<()> {
        let id_value = parse_frame_id(&self.id)?;

        if !self.extended && id_value > MAX_STANDARD_ID {
            return Err(ComposerError::validation(
                "id",
                format!(
                    "Standard frame id {} exceeds 0x7FF",
                    self.id
                ),
            ));
        }

        if self.name.is_empty() {
            return Err(ComposerError::validation(
                "name",
                "Message name cannot be empty",
            ));
        }

        if self.dlc > MAX_DLC {
            return Err(ComposerError::validation(
                "dlc",
                format!(
                    "DLC {} out of range 0-{}",
                    self.dlc, MAX_DLC
                ),
            ));
        }

        if self.bytes.len() != self.dlc as usize {
            return Err(ComposerError::validation(
                "bytes",
                format!(
                    "Slot count {} does not match DLC {}",
                    self.bytes.len(),
                    self.dlc
                ),
            ));
        }

        for (index, slot) in self.bytes.iter().enumerate()
        {
            if let ByteSlot::ParamRef(name) = slot {
                if name.is_empty() {
                    return Err(
                        ComposerError::validation(
                            format!("byte[{}]", index),
                            "Empty parameter reference",
                        ),
                    );
                }
                if !registry.contains(name) {
                    return Err(
                        ComposerError::validation(
                            format!("byte[{}]", index),
                            format!(
                                "Unknown parameter '{}'",
                                name
                            ),
                        ),
                    );
                }
            }
        }

        if self.periodic && self.period_ms == 0 {
            return Err(ComposerError::validation(
                "period_ms",
                "Periodic message requires a positive period",
            ));
        }

        Ok(())
    }
}

/// 解析 0x 前缀的帧 ID 文本
pub fn parse_frame_id(id: &str) -> Result<u32> {
    let id = id.trim();
    let digits = id
        .strip_prefix("0x")
        .or_else(|| id.strip_prefix("0X"))
        .ok_or_else(|| {
            ComposerError::validation(
                "id",
                format!(
                    "Frame id '{}' must carry a 0x prefix",
                    id
                ),
            )
        })?;

    if digits.is_empty() {
        return Err(ComposerError::validation(
            "id",
            "Frame id has no hex digits",
        ));
    }

    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| {
            ComposerError::validation(
                "id",
                format!(
                    "Frame id '{}' is not valid hex",
                    id
                ),
            )
        })?;

    if value > MAX_EXTENDED_ID {
        return Err(ComposerError::validation(
            "id",
            format!(
                "Frame id {} exceeds 0x1FFFFFFF",
                id
            ),
        ));
    }

    Ok(value)
}
