//! 报文目录模块
//!
//! 提供有序目录的增删改查、结构化记录与文件存取

#[allow(clippy::module_inception)]
pub mod catalog;
pub mod records;
pub mod store;

pub use catalog::{CatalogOptions, MessageCatalog};
pub use records::MessageRecord;
pub use store::{
    compose_catalog_text, export_to_file,
    import_from_file, parse_catalog_text, read_records,
};
