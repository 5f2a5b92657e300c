//! 报文目录
//!
//! 按插入顺序维护报文定义，按位置寻址。所有写操作
//! 先完成全部验证再提交，失败时目录保持原状。

use crate::app::error::types::{ComposerError, Result};
use crate::core::catalog::records::MessageRecord;
use crate::core::frame::{
    parse_frame_id, MessageDefinition,
};
use crate::core::params::ParameterRegistry;
use std::collections::HashSet;

/// 目录行为选项
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogOptions {
    /// 拒绝重复帧 ID（默认关闭，保持宽松语义）
    pub reject_duplicate_ids: bool,
}

/// 报文目录
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    entries: Vec<MessageDefinition>,
    options: CatalogOptions,
}

impl MessageCatalog {
    /// 创建空目录（宽松模式）
    pub fn new() -> Self {
        Self::default()
    }

    /// 以指定选项创建空目录
    pub fn with_options(options: CatalogOptions) -> Self {
        Self {
            entries: Vec::new(),
            options,
        }
    }

    /// 追加报文定义，返回新条目索引
    pub fn append(
        &mut self,
        def: MessageDefinition,
        registry: &ParameterRegistry,
    ) -> Result<usize> {
        def.validate(registry)?;
        self.check_duplicate_id(&def, None)?;

        self.entries.push(def);
        Ok(self.entries.len() - 1)
    }

    /// 替换指定索引处的报文定义
    pub fn replace_at(
        &mut self,
        index: usize,
        def: MessageDefinition,
        registry: &ParameterRegistry,
    ) -> Result<()> {
        if index >= self.entries.len() {
            return Err(ComposerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        def.validate(registry)?;
        self.check_duplicate_id(&def, Some(index))?;

        self.entries[index] = def;
        Ok(())
    }

    /// 移除指定索引处的报文定义并返回它
    pub fn remove_at(
        &mut self,
        index: usize,
    ) -> Result<MessageDefinition> {
        if index >= self.entries.len() {
            return Err(ComposerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        Ok(self.entries.remove(index))
    }

    /// 当前条目的只读有序视图
    pub fn list(&self) -> &[MessageDefinition] {
        &self.entries
    }

    /// 目录条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 导出全部条目为结构化记录
    pub fn export_all(&self) -> Vec<MessageRecord> {
        self.entries
            .iter()
            .map(MessageRecord::from_definition)
            .collect()
    }

    /// 以记录序列原子替换整个目录
    ///
    /// 先验证全部记录，任意一条失败即返回错误并指明
    /// 该记录位置，目录保持调用前的状态不变
    pub fn import_replace_all(
        &mut self,
        records: &[MessageRecord],
        registry: &ParameterRegistry,
    ) -> Result<()> {
        let mut parsed =
            Vec::with_capacity(records.len());
        for (index, record) in
            records.iter().enumerate()
        {
            let def = record
                .to_definition(registry)
                .map_err(|e| {
                    ComposerError::validation(
                        format!("record[{}]", index),
                        e.to_string(),
                    )
                })?;
            parsed.push(def);
        }

        if self.options.reject_duplicate_ids {
            let mut seen = HashSet::new();
            for (index, def) in parsed.iter().enumerate()
            {
                let value = def.id_value()?;
                if !seen.insert(value) {
                    return Err(
                        ComposerError::validation(
                            format!(
                                "record[{}]",
                                index
                            ),
                            format!(
                                "Duplicate frame id {}",
                                def.id
                            ),
                        ),
                    );
                }
            }
        }

        self.entries = parsed;
        tracing::debug!(
            "Catalog replaced with {} entries",
            self.entries.len()
        );
        Ok(())
    }

    /// 严格模式下检查帧 ID 冲突
    ///
    /// 比较的是解析后的数值而非原文，`0x10` 与 `0x010`
    /// 视为同一 ID
    fn check_duplicate_id(
        &self,
        def: &MessageDefinition,
        skip: Option<usize>,
    ) -> Result<()> {
        if !self.options.reject_duplicate_ids {
            return Ok(());
        }

        let value = parse_frame_id(&def.id)?;
        for (index, entry) in
            self.entries.iter().enumerate()
        {
            if Some(index) == skip {
                continue;
            }
            if entry.id_value()? == value {
                return Err(ComposerError::validation(
                    "id",
                    format!(
                        "Frame id {} already used by entry {}",
                        def.id, index
                    ),
                ));
            }
        }

        Ok(())
    }
}
