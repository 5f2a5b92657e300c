//! 目录序列化与文件存取
//!
//! 文本文法用于实时列表与编辑往返；结构化 JSON 文件
//! 用于导出/导入。文件导入与目录级导入采用同一策略：
//! 全部记录校验通过后一次性替换，失败不落任何变更。

use crate::app::error::types::Result;
use crate::core::catalog::catalog::MessageCatalog;
use crate::core::catalog::records::MessageRecord;
use crate::core::frame::{
    compose_message_line, parse_message_line,
    MessageDefinition,
};
use crate::core::params::ParameterRegistry;
use std::fs;
use std::path::Path;

/// 组合整个目录为文本列表（每条定义一行）
pub fn compose_catalog_text(
    catalog: &MessageCatalog,
) -> String {
    catalog
        .list()
        .iter()
        .map(compose_message_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 解析文本列表为定义序列（空行跳过）
pub fn parse_catalog_text(
    text: &str,
    registry: &ParameterRegistry,
) -> Result<Vec<MessageDefinition>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_message_line(line, registry))
        .collect()
}

/// 导出目录到结构化 JSON 文件
pub fn export_to_file(
    catalog: &MessageCatalog,
    path: &Path,
) -> Result<usize> {
    let records = catalog.export_all();
    let content =
        serde_json::to_string_pretty(&records)?;
    fs::write(path, content)?;

    tracing::info!(
        "Exported {} messages to {:?}",
        records.len(),
        path
    );
    Ok(records.len())
}

/// 读取结构化 JSON 文件中的记录序列
pub fn read_records(
    path: &Path,
) -> Result<Vec<MessageRecord>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<MessageRecord> =
        serde_json::from_str(&content)?;
    Ok(records)
}

/// 从结构化 JSON 文件导入目录
///
/// 与 [`MessageCatalog::import_replace_all`] 同为原子
/// 全量替换，返回导入的条目数
pub fn import_from_file(
    catalog: &mut MessageCatalog,
    registry: &ParameterRegistry,
    path: &Path,
) -> Result<usize> {
    let records = read_records(path)?;
    catalog.import_replace_all(&records, registry)?;

    tracing::info!(
        "Imported {} messages from {:?}",
        records.len(),
        path
    );
    Ok(records.len())
}
