//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::DEFAULT_BIT_DEPTH;

/// 一款像素级隐写工具，支持 LSB 隐写、放大隐写、神奇混合以及颜色通道分离/合并，
/// 仅适用于无损格式图像 (如 PNG, BMP)。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款像素级隐写工具，支持 LSB 隐写、放大隐写、神奇混合以及颜色通道分离/合并，仅适用于无损格式图像 (如 PNG, BMP)。"
)]
pub struct Cli {
    /// 输出调试日志。
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 在图像像素分量的最低有效位中隐藏文本。
    Hide(HideArgs),

    /// 从经过 LSB 隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 将图像放大一倍，并在新增的像素中隐藏文本。
    Enlarge(EnlargeArgs),

    /// 从经过放大隐写的图像中恢复隐藏的文本。
    Shrink(ShrinkArgs),

    /// 将两幅灰度 RGBA 图像混合：深色背景上显示第一幅，浅色背景上显示第二幅。
    Magic(MagicArgs),

    /// 将 RGB(A) 图像分离为红、绿、蓝三幅灰度图像。
    Split(SplitArgs),

    /// 将三幅图像分别作为红、绿、蓝通道合并为一幅 RGB 图像。
    Merge(MergeArgs),

    /// 显示图像在各种方案下可隐藏的字符数。
    Capacity(CapacityArgs),
}

/// 要隐藏的文本来源：文本文件或命令行字符串，二选一。
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TextSource {
    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 直接在命令行中给出的要隐藏的文本。
    #[arg(short, long)]
    pub message: Option<String>,
}

/// 'hide' 命令所需的参数。
#[derive(Args, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    #[command(flatten)]
    pub source: TextSource,

    /// 每个分量使用的最低有效位数 (1, 2, 4 或 8)。恢复时必须使用相同的值。
    #[arg(short, long, default_value_t = DEFAULT_BIT_DEPTH)]
    pub bits: u8,

    /// 隐写完成后，保存结果图像的输出路径。默认为输入文件旁的 `doctored_<名称>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Args, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 隐藏时使用的最低有效位数。
    #[arg(short, long, default_value_t = DEFAULT_BIT_DEPTH)]
    pub bits: u8,

    /// 恢复文本后，保存文本内容的输出路径。默认为 `recovered_<名称>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'enlarge' 命令所需的参数。
#[derive(Args, Debug)]
pub struct EnlargeArgs {
    /// 用于隐写的输入图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    #[command(flatten)]
    pub source: TextSource,

    /// 放大后图像的输出路径。默认为 `enlarged_<名称>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'shrink' 命令所需的参数。
#[derive(Args, Debug)]
pub struct ShrinkArgs {
    /// 经过放大隐写的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本后，保存文本内容的输出路径。默认为 `recovered_<名称>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'magic' 命令所需的参数。
#[derive(Args, Debug)]
pub struct MagicArgs {
    /// 在深色背景上显现的 RGBA 灰度图像。
    #[arg(short = 'a', long)]
    pub first: PathBuf,

    /// 在浅色背景上显现的 RGBA 灰度图像，尺寸须与第一幅相同。
    #[arg(short = 'b', long)]
    pub second: PathBuf,

    /// 混合结果的输出路径。默认为 `magic_<第一幅名称>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 同时保存结果在浅色与深色背景上的预览图。
    #[arg(short, long)]
    pub preview: bool,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'split' 命令所需的参数。
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// 要分离的 RGB(A) 图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 保存三幅通道图像的目录。默认为输入图像所在目录。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'merge' 命令所需的参数。
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// 作为红色通道的图像。
    #[arg(short, long)]
    pub red: PathBuf,

    /// 作为绿色通道的图像。
    #[arg(short, long)]
    pub green: PathBuf,

    /// 作为蓝色通道的图像。
    #[arg(short, long)]
    pub blue: PathBuf,

    /// 合并结果的输出路径。默认为 `merged_<红色通道名称>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// 要查询的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
