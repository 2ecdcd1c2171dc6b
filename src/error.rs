//! # 错误类型模块
//!
//! 定义隐写编解码层可能返回的所有错误。
//! 所有前置条件都在操作开始时检查，绝不会退化为静默的数据损坏或越界读取。

use thiserror::Error;

/// 编解码层的错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// 位深度不是 1、2、4、8 之一 (8 必须能被位深度整除)。
    #[error("Invalid bit depth {0}: must be one of 1, 2, 4 or 8")]
    InvalidBitDepth(u8),

    /// 要求几何尺寸一致的输入图像宽高不同。
    #[error(
        "Dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// 通道数超出 1-4，或不满足某个操作对通道数的要求。
    #[error("Unsupported plane count {planes}, expected one of {allowed:?}")]
    UnsupportedPlaneCount {
        planes: usize,
        allowed: &'static [usize],
    },

    /// 文本需要的位数超过图像所能提供的位数。
    #[error("Not enough space in the image to hide the text. Required: {required} bits, Available: {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// 文本中含有零字符，与结束标记无法区分。
    #[error("Text contains a NUL character at index {index}, which is reserved as the terminator")]
    PayloadContainsTerminator { index: usize },

    /// 字符无法用单个 8 位编码表示。
    #[error("Character {character:?} at index {index} does not fit into an 8-bit code")]
    UnencodableCharacter { character: char, index: usize },

    /// 宽或高为零。
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    /// 像素缓冲区长度与 `width * height * planes` 不符。
    #[error("Pixel buffer holds {actual} components, expected {expected}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// 图像不是放大编码的产物 (宽或高为奇数)。
    #[error("Image {width}x{height} cannot hold 2x2 blocks: width and height must be even")]
    NotEnlarged { width: usize, height: usize },
}

/// 编解码层的 `Result` 别名。
pub type Result<T> = std::result::Result<T, CodecError>;
