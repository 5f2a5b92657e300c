//! 帧编解码模块
//!
//! 提供报文定义的数据结构、行文法编解码与模拟取值

pub mod codec;
pub mod simulate;
pub mod types;

pub use codec::{
    compose_byte_field, compose_message_line,
    parse_byte_field, parse_message_line,
};
pub use simulate::{
    format_raw_value, simulate_message_values,
    simulate_parameter_value,
};
pub use types::{
    parse_frame_id, ByteSlot, MessageDefinition,
    MAX_DLC, MAX_EXTENDED_ID, MAX_STANDARD_ID,
};
