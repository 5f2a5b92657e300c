//! 核心域模块
//!
//! 包含参数注册表、帧编解码与报文目录

pub mod catalog;
pub mod frame;
pub mod params;
