//! CAN 报文组态库
//!
//! CAN 报文参数化定义与预览工具
//!
//! ## 功能特性
//!
//! - 命名、类型化、带缩放系数的遥测参数注册表
//! - 字节槽 ⇄ 文本标记的双向帧编解码
//! - 按位置寻址的报文目录与原子导入
//! - 文本列表与结构化 JSON 两种序列化格式
//!
//! ## 使用示例
//!
//! ```
//! use can_composer::core::frame::{
//!     compose_message_line, parse_message_line,
//! };
//! use can_composer::core::params::ParameterRegistry;
//!
//! let registry = ParameterRegistry::with_defaults();
//! let line = "0x680 [2] BMS_Status (1000ms): SOC|00";
//! let def = parse_message_line(line, &registry)?;
//! assert_eq!(compose_message_line(&def), line);
//! # Ok::<(), can_composer::ComposerError>(())
//! ```

pub mod app;
pub mod core;

// 重新导出主要功能
pub use app::error::types::{ComposerError, Result};
pub use core::catalog::{
    CatalogOptions, MessageCatalog, MessageRecord,
};
pub use core::frame::{
    compose_message_line, parse_message_line, ByteSlot,
    MessageDefinition,
};
pub use core::params::{
    ParamTemplate, ParamType, Parameter,
    ParameterRegistry,
};
