//! 报文行编解码
//!
//! 字节槽 ⇄ 文本标记、报文定义 ⇄ 列表行的双向文法。
//! 组合器与解析器互为逆运算：任何经公共 API 构造的
//! 定义，组合后再解析得到等价定义。

use crate::app::error::types::{ComposerError, Result};
use crate::core::frame::types::{
    parse_frame_id, ByteSlot, MessageDefinition, MAX_DLC,
    MAX_STANDARD_ID,
};
use crate::core::params::ParameterRegistry;

/// 组合单个字节槽为文本标记
///
/// 参数引用输出参数名，字面量输出两位大写十六进制
pub fn compose_byte_field(slot: &ByteSlot) -> String {
    match slot {
        ByteSlot::ParamRef(name) => name.clone(),
        ByteSlot::Literal(value) => {
            format!("{:02X}", value)
        }
    }
}

/// 解析单个文本标记为字节槽
///
/// 已注册的参数名优先解析为参数引用；否则必须是
/// 恰好两位十六进制数字的字面量
pub fn parse_byte_field(
    token: &str,
    registry: &ParameterRegistry,
) -> Result<ByteSlot> {
    let token = token.trim();

    if registry.contains(token) {
        return Ok(ByteSlot::ParamRef(
            token.to_string(),
        ));
    }

    if token.len() == 2
        && token
            .chars()
            .all(|c| c.is_ascii_hexdigit())
    {
        let value = u8::from_str_radix(token, 16)
            .map_err(|_| {
                ComposerError::InvalidByteToken {
                    token: token.to_string(),
                }
            })?;
        return Ok(ByteSlot::Literal(value));
    }

    Err(ComposerError::InvalidByteToken {
        token: token.to_string(),
    })
}

/// 组合报文定义为列表行
///
/// 格式：`<id> [<dlc>] <name> (<period>ms): <tok>|<tok>|...`，
/// 非周期报文的周期标记为 `(on-demand)`；id 按存储原文输出
pub fn compose_message_line(
    def: &MessageDefinition,
) -> String {
    let period_text = if def.periodic {
        format!("({}ms)", def.period_ms)
    } else {
        "(on-demand)".to_string()
    };

    let fields: Vec<String> =
        def.bytes.iter().map(compose_byte_field).collect();

    format!(
        "{} [{}] {} {}: {}",
        def.id,
        def.dlc,
        def.name,
        period_text,
        fields.join("|")
    )
}

/// 解析列表行为报文定义
///
/// 扩展帧标志由 id 数值推断（> 0x7FF），远程请求标志
/// 不在行文法内，解析后恒为 false。dlc 为 0 时字段区
/// 必须为空白
pub fn parse_message_line(
    line: &str,
    registry: &ParameterRegistry,
) -> Result<MessageDefinition> {
    let line = line.trim();

    // ID 标记
    let (id, rest) =
        line.split_once(' ').ok_or_else(|| {
            ComposerError::malformed("missing id token")
        })?;
    let id_value =
        parse_frame_id(id).map_err(|_| {
            ComposerError::malformed(format!(
                "invalid id token '{}'",
                id
            ))
        })?;

    // [dlc] 区
    let rest = rest
        .trim_start()
        .strip_prefix('[')
        .ok_or_else(|| {
            ComposerError::malformed(
                "missing [dlc] section",
            )
        })?;
    let (dlc_str, rest) =
        rest.split_once(']').ok_or_else(|| {
            ComposerError::malformed(
                "missing closing ']' after dlc",
            )
        })?;
    let dlc: u8 =
        dlc_str.trim().parse().map_err(|_| {
            ComposerError::malformed(format!(
                "invalid dlc '{}'",
                dlc_str.trim()
            ))
        })?;
    if dlc > MAX_DLC {
        return Err(ComposerError::malformed(format!(
            "dlc {} out of range 0-{}",
            dlc, MAX_DLC
        )));
    }

    // 名称（直到周期标记的左括号）
    let rest = rest.trim_start();
    let paren = rest.find('(').ok_or_else(|| {
        ComposerError::malformed(
            "missing period marker",
        )
    })?;
    let name = rest[..paren].trim().to_string();
    if name.is_empty() {
        return Err(ComposerError::malformed(
            "missing message name",
        ));
    }

    // 周期标记：(<N>ms) 或 (on-demand)
    let rest = &rest[paren + 1..];
    let (marker, rest) =
        rest.split_once(')').ok_or_else(|| {
            ComposerError::malformed(
                "unterminated period marker",
            )
        })?;
    let (periodic, period_ms) = if marker == "on-demand" {
        (false, 0)
    } else {
        let ms_str = marker
            .strip_suffix("ms")
            .ok_or_else(|| {
                ComposerError::malformed(format!(
                    "invalid period marker '({})'",
                    marker
                ))
            })?;
        let period: u32 =
            ms_str.trim().parse().map_err(|_| {
                ComposerError::malformed(format!(
                    "invalid period '{}'",
                    ms_str.trim()
                ))
            })?;
        (true, period)
    };

    // 字段分隔符
    let fields_str = rest
        .trim_start()
        .strip_prefix(':')
        .ok_or_else(|| {
            ComposerError::malformed(
                "missing ':' field separator",
            )
        })?;

    // 字段区
    let fields_str = fields_str.trim();
    let bytes: Vec<ByteSlot> = if fields_str.is_empty() {
        Vec::new()
    } else {
        fields_str
            .split('|')
            .map(|token| {
                parse_byte_field(token, registry)
            })
            .collect::<Result<Vec<_>>>()?
    };

    if bytes.len() != dlc as usize {
        return Err(ComposerError::malformed(format!(
            "field count {} does not match dlc {}",
            bytes.len(),
            dlc
        )));
    }

    Ok(MessageDefinition {
        id: id.to_string(),
        extended: id_value > MAX_STANDARD_ID,
        dlc,
        name,
        remote_request: false,
        periodic,
        period_ms,
        bytes,
    })
}
