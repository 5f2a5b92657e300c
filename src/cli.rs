//! 命令行参数定义

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CAN 报文组态工具
#[derive(Parser, Debug)]
#[command(name = "can-composer")]
#[command(about = "CAN 报文参数化定义与预览工具")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 列出注册表中的全部参数
    Params,

    /// 按配置批量生成电芯/温度参数并打印结果
    GenerateParams,

    /// 以文本列表形式打印目录文件内容
    List {
        /// 目录文件路径（JSON）
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },

    /// 校验目录文件中的全部记录
    Check {
        /// 目录文件路径（JSON）
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },

    /// 为目录中的一条报文生成模拟发送字节
    Preview {
        /// 目录文件路径（JSON）
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// 目录条目索引
        #[arg(short, long, value_name = "INDEX")]
        index: usize,

        /// 随机种子（可选，用于复现）
        #[arg(short, long, value_name = "SEED")]
        seed: Option<u64>,
    },
}
